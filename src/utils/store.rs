//! お気に入り・履歴・検索履歴・冷蔵庫・評価の永続化
//!
//! 読み込みに失敗したら空の値を返し、書き込みに失敗したらログだけ残す。
//! どの操作も呼び出し側にエラーを返さない。

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{
    COOKIE_CONSENT_KEY, HISTORY_KEY, HISTORY_LIMIT, PANTRY_KEY, RATINGS_KEY, RECENT_SEARCHES_KEY,
    RECENT_SEARCH_LIMIT, SAVED_RECIPES_KEY,
};
use crate::models::{RatingEntry, RecipeId};
use super::log_trace::{log_error_with_data, log_warn};
use super::storage::{BrowserStorage, NullStorage, StorageBackend, StorageError};

const LOG_CATEGORY: &str = "storage";

#[derive(Clone)]
pub struct RecipeStore {
    backend: Rc<dyn StorageBackend>,
}

impl RecipeStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// ブラウザの localStorage を使う（使えなければ何も保存しないストア）
    pub fn browser() -> Self {
        match BrowserStorage::open() {
            Some(storage) => Self::new(storage),
            None => {
                log_warn(LOG_CATEGORY, "localStorageが利用できません。保存は無効になります");
                Self::new(NullStorage)
            }
        }
    }

    // ============================================
    // 共通の読み書き
    // ============================================

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log_warn(LOG_CATEGORY, &format!("読み込み失敗 ({}): {}", key, e));
                None
            }
        }
    }

    fn read_json<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(json) = self.read_raw(key) else {
            return T::default();
        };
        match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                log_warn(LOG_CATEGORY, &format!("データ破損のため初期値を使用 ({}): {}", key, e));
                T::default()
            }
        }
    }

    fn write_raw(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set_item(key, value) {
            self.report_write_error(key, &e);
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.write_raw(key, &json),
            Err(e) => self.report_write_error(key, &StorageError::from(e)),
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            self.report_write_error(key, &e);
        }
    }

    fn report_write_error(&self, key: &str, error: &StorageError) {
        log_error_with_data(
            LOG_CATEGORY,
            "保存失敗",
            serde_json::json!({ "key": key, "error": error.to_string() }),
        );
    }

    // ============================================
    // お気に入り
    // ============================================

    pub fn get_saved_recipes(&self) -> Vec<RecipeId> {
        self.read_json(SAVED_RECIPES_KEY)
    }

    /// お気に入りに追加（登録済みなら何もしない）
    pub fn save_recipe(&self, id: RecipeId) {
        let mut saved = self.get_saved_recipes();
        if saved.contains(&id) {
            return;
        }
        saved.push(id);
        self.write_json(SAVED_RECIPES_KEY, &saved);
    }

    /// お気に入りから削除（未登録なら何もしない）
    pub fn remove_saved_recipe(&self, id: RecipeId) {
        let mut saved = self.get_saved_recipes();
        let before = saved.len();
        saved.retain(|&saved_id| saved_id != id);
        if saved.len() != before {
            self.write_json(SAVED_RECIPES_KEY, &saved);
        }
    }

    pub fn is_saved(&self, id: RecipeId) -> bool {
        self.get_saved_recipes().contains(&id)
    }

    /// お気に入りを切り替え、切り替え後に登録されているかを返す
    pub fn toggle_saved(&self, id: RecipeId) -> bool {
        if self.is_saved(id) {
            self.remove_saved_recipe(id);
            false
        } else {
            self.save_recipe(id);
            true
        }
    }

    // ============================================
    // 閲覧履歴
    // ============================================

    /// 閲覧履歴（新しい順）
    pub fn get_history(&self) -> Vec<RecipeId> {
        self.read_json(HISTORY_KEY)
    }

    /// 履歴の先頭に追加（既にあれば先頭へ移動、最大50件）
    pub fn add_to_history(&self, id: RecipeId) {
        let history = push_front_unique(self.get_history(), id, HISTORY_LIMIT);
        self.write_json(HISTORY_KEY, &history);
    }

    pub fn clear_history(&self) {
        self.remove(HISTORY_KEY);
    }

    // ============================================
    // 最近の検索
    // ============================================

    pub fn get_recent_searches(&self) -> Vec<String> {
        self.read_json(RECENT_SEARCHES_KEY)
    }

    /// 検索語を記録（空白のみは記録しない、最大10件）
    pub fn add_recent_search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let searches = push_front_unique(self.get_recent_searches(), query.to_string(), RECENT_SEARCH_LIMIT);
        self.write_json(RECENT_SEARCHES_KEY, &searches);
    }

    pub fn clear_recent_searches(&self) {
        self.remove(RECENT_SEARCHES_KEY);
    }

    // ============================================
    // 冷蔵庫
    // ============================================

    pub fn get_pantry(&self) -> Vec<String> {
        self.read_json(PANTRY_KEY)
    }

    /// 冷蔵庫の中身を丸ごと置き換えて保存
    pub fn save_pantry(&self, items: &[String]) {
        self.write_json(PANTRY_KEY, items);
    }

    /// 1項目追加（空白のみ・同名は無視）し、保存後の一覧を返す
    pub fn add_pantry_item(&self, item: &str) -> Vec<String> {
        let mut pantry = self.get_pantry();
        let item = item.trim();
        if item.is_empty() || pantry.iter().any(|p| p.eq_ignore_ascii_case(item)) {
            return pantry;
        }
        pantry.push(item.to_string());
        self.save_pantry(&pantry);
        pantry
    }

    pub fn remove_pantry_item(&self, item: &str) -> Vec<String> {
        let mut pantry = self.get_pantry();
        pantry.retain(|p| p != item);
        self.save_pantry(&pantry);
        pantry
    }

    // ============================================
    // 評価
    // ============================================

    pub fn get_ratings(&self) -> BTreeMap<RecipeId, RatingEntry> {
        self.read_json(RATINGS_KEY)
    }

    pub fn get_rating(&self, id: RecipeId) -> Option<RatingEntry> {
        self.get_ratings().remove(&id)
    }

    /// 評価を保存（既存の評価・レビューは丸ごと上書き）
    pub fn set_rating(&self, id: RecipeId, rating: f64, review: Option<String>) {
        let mut ratings = self.get_ratings();
        let review = review.filter(|r| !r.trim().is_empty());
        ratings.insert(id, RatingEntry { rating, review });
        self.write_json(RATINGS_KEY, &ratings);
    }

    // ============================================
    // Cookie同意
    // ============================================

    pub fn get_cookie_consent(&self) -> bool {
        self.cookie_consent_answer() == Some(true)
    }

    /// 回答済みかどうかも区別して返す（未回答・不明な値はNone）
    pub fn cookie_consent_answer(&self) -> Option<bool> {
        match self.read_raw(COOKIE_CONSENT_KEY).as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    /// JSONではなく "true" / "false" をそのまま保存
    pub fn set_cookie_consent(&self, accepted: bool) {
        self.write_raw(COOKIE_CONSENT_KEY, if accepted { "true" } else { "false" });
    }
}

/// 先頭に追加し、重複を除いて `limit` 件に切り詰める
fn push_front_unique<T: PartialEq>(mut items: Vec<T>, item: T, limit: usize) -> Vec<T> {
    items.retain(|existing| *existing != item);
    items.insert(0, item);
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    /// 何をしても失敗するバックエンド
    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Backend("SecurityError".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("QuotaExceededError".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("SecurityError".to_string()))
        }
    }

    fn memory_store() -> (RecipeStore, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::new());
        let store = RecipeStore {
            backend: storage.clone(),
        };
        (store, storage)
    }

    #[test]
    fn test_save_recipe_is_idempotent() {
        let (store, _) = memory_store();
        store.save_recipe(5);
        store.save_recipe(5);
        assert_eq!(store.get_saved_recipes(), vec![5]);
        assert!(store.is_saved(5));
    }

    #[test]
    fn test_remove_saved_recipe() {
        let (store, _) = memory_store();
        store.save_recipe(1);
        store.save_recipe(2);
        store.remove_saved_recipe(3);
        assert_eq!(store.get_saved_recipes(), vec![1, 2]);
        store.remove_saved_recipe(1);
        assert_eq!(store.get_saved_recipes(), vec![2]);
    }

    #[test]
    fn test_toggle_saved() {
        let (store, _) = memory_store();
        assert!(store.toggle_saved(7));
        assert!(!store.toggle_saved(7));
        assert!(store.get_saved_recipes().is_empty());
    }

    #[test]
    fn test_history_keeps_latest_50() {
        let (store, _) = memory_store();
        for id in 1..=51 {
            store.add_to_history(id);
        }
        let history = store.get_history();
        assert_eq!(history.len(), 50);
        assert_eq!(history[0], 51);
        assert_eq!(history[49], 2);
        assert!(!history.contains(&1));
    }

    #[test]
    fn test_history_promotes_existing() {
        let (store, _) = memory_store();
        store.add_to_history(1);
        store.add_to_history(2);
        store.add_to_history(3);
        store.add_to_history(1);
        assert_eq!(store.get_history(), vec![1, 3, 2]);
        store.clear_history();
        assert!(store.get_history().is_empty());
    }

    #[test]
    fn test_recent_searches() {
        let (store, _) = memory_store();
        store.add_recent_search("   ");
        store.add_recent_search("");
        assert!(store.get_recent_searches().is_empty());

        for i in 0..12 {
            store.add_recent_search(&format!("query {}", i));
        }
        store.add_recent_search(" query 5 ");
        let searches = store.get_recent_searches();
        assert_eq!(searches.len(), 10);
        assert_eq!(searches[0], "query 5");
        assert_eq!(searches[1], "query 11");
        assert_eq!(searches.iter().filter(|s| *s == "query 5").count(), 1);
    }

    #[test]
    fn test_pantry_full_replacement() {
        let (store, _) = memory_store();
        store.save_pantry(&["eggs".to_string(), "milk".to_string()]);
        store.save_pantry(&["rice".to_string()]);
        assert_eq!(store.get_pantry(), vec!["rice".to_string()]);

        let pantry = store.add_pantry_item(" Butter ");
        assert_eq!(pantry, vec!["rice".to_string(), "Butter".to_string()]);
        assert_eq!(store.add_pantry_item("butter").len(), 2);
        assert_eq!(store.remove_pantry_item("rice"), vec!["Butter".to_string()]);
    }

    #[test]
    fn test_ratings_overwrite_whole_entry() {
        let (store, storage) = memory_store();
        store.set_rating(3, 4.0, Some("おいしい".to_string()));
        store.set_rating(3, 5.0, None);
        assert_eq!(
            store.get_rating(3),
            Some(RatingEntry { rating: 5.0, review: None })
        );
        assert_eq!(store.get_rating(4), None);

        // キーは文字列化したID
        let raw = storage.get_item(RATINGS_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"3":{"rating":5.0}}"#);
    }

    #[test]
    fn test_ratings_read_string_keys() {
        let (store, storage) = memory_store();
        storage
            .set_item(RATINGS_KEY, r#"{"12":{"rating":3,"review":"ok"}}"#)
            .unwrap();
        let entry = store.get_rating(12).unwrap();
        assert_eq!(entry.rating, 3.0);
        assert_eq!(entry.review.as_deref(), Some("ok"));
    }

    #[test]
    fn test_cookie_consent_literal() {
        let (store, storage) = memory_store();
        assert!(!store.get_cookie_consent());
        store.set_cookie_consent(true);
        assert_eq!(storage.get_item(COOKIE_CONSENT_KEY).unwrap().as_deref(), Some("true"));
        assert!(store.get_cookie_consent());
        store.set_cookie_consent(false);
        assert_eq!(storage.get_item(COOKIE_CONSENT_KEY).unwrap().as_deref(), Some("false"));
        assert!(!store.get_cookie_consent());
    }

    #[test]
    fn test_cookie_consent_decline_is_remembered() {
        let (store, storage) = memory_store();
        assert_eq!(store.cookie_consent_answer(), None);
        store.set_cookie_consent(false);
        assert_eq!(store.cookie_consent_answer(), Some(false));
        store.set_cookie_consent(true);
        assert_eq!(store.cookie_consent_answer(), Some(true));
        storage.set_item(COOKIE_CONSENT_KEY, "maybe").unwrap();
        assert_eq!(store.cookie_consent_answer(), None);
        assert!(!store.get_cookie_consent());
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        let (store, storage) = memory_store();
        storage.set_item(SAVED_RECIPES_KEY, "not json").unwrap();
        storage.set_item(HISTORY_KEY, r#"{"a":1}"#).unwrap();
        storage.set_item(RATINGS_KEY, "[1,2").unwrap();
        assert!(store.get_saved_recipes().is_empty());
        assert!(store.get_history().is_empty());
        assert!(store.get_ratings().is_empty());

        // 破損していても書き込めば復旧する
        store.save_recipe(9);
        assert_eq!(store.get_saved_recipes(), vec![9]);
    }

    #[test]
    fn test_broken_backend_never_fails_caller() {
        let store = RecipeStore::new(BrokenStorage);
        store.save_recipe(1);
        store.add_to_history(1);
        store.add_recent_search("curry");
        store.save_pantry(&["eggs".to_string()]);
        store.set_rating(1, 4.0, None);
        store.set_cookie_consent(true);
        store.clear_history();

        assert!(store.get_saved_recipes().is_empty());
        assert!(store.get_history().is_empty());
        assert!(store.get_recent_searches().is_empty());
        assert!(store.get_pantry().is_empty());
        assert!(store.get_ratings().is_empty());
        assert!(!store.get_cookie_consent());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_browser_store_falls_back_on_host() {
        let store = RecipeStore::browser();
        store.save_recipe(1);
        assert!(store.get_saved_recipes().is_empty());
    }
}
