//! ストレージバックエンド
//!
//! 永続化の読み書きはすべて [`StorageBackend`] 経由で行う。
//! ブラウザでは `localStorage`、テストではメモリ上のマップを使う。

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("ストレージが利用できません")]
    Unavailable,

    #[error("ストレージ操作失敗: {0}")]
    Backend(String),

    #[error("JSON変換失敗: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// キーと文字列値の読み書き
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// メモリ上のストレージ（テスト用）
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// ストレージが無い環境用（読むと空、書くと失敗）
pub struct NullStorage;

impl StorageBackend for NullStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// ブラウザの localStorage
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// window.localStorage を取得（使えない環境ではNone）
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        Some(Self { storage })
    }

    /// wasm以外ではブラウザが無いので常にNone
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Option<Self> {
        None
    }
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // 容量超過 (QuotaExceededError) もここで返る
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}
