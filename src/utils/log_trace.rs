//! 時系列トレースログシステム
//! 保存失敗などのイベントを記録し、後から確認できるようにする

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::MAX_LOG_ENTRIES;
#[cfg(target_arch = "wasm32")]
use crate::config::LOG_TRACE_KEY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub category: String, // "storage", "catalog", "ui-action", etc.
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    pub fn new() -> Self {
        let mut trace = LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        };
        trace.load_from_storage();
        trace
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str, data: Option<serde_json::Value>) {
        let entry = LogEntry {
            timestamp: now_iso_string(),
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            data,
        };

        // コンソールにも出力
        write_console(level, category, message);

        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);

        self.save_to_storage();
    }

    pub fn info(&mut self, category: &str, message: &str) {
        self.log("info", category, message, None);
    }

    pub fn info_with_data(&mut self, category: &str, message: &str, data: serde_json::Value) {
        self.log("info", category, message, Some(data));
    }

    pub fn warn(&mut self, category: &str, message: &str) {
        self.log("warn", category, message, None);
    }

    pub fn error(&mut self, category: &str, message: &str) {
        self.log("error", category, message, None);
    }

    pub fn error_with_data(&mut self, category: &str, message: &str, data: serde_json::Value) {
        self.log("error", category, message, Some(data));
    }

    #[cfg(test)]
    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.logs.iter().cloned().collect()
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn clear(&mut self) {
        self.logs.clear();
        self.save_to_storage();
    }

    // ログ自体はストア層を通さず直接 localStorage に書く
    #[cfg(target_arch = "wasm32")]
    fn load_from_storage(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(json_str)) = storage.get_item(LOG_TRACE_KEY) {
                    if let Ok(logs) = serde_json::from_str::<Vec<LogEntry>>(&json_str) {
                        self.logs = logs.into_iter().collect();
                    }
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_from_storage(&mut self) {}

    #[cfg(target_arch = "wasm32")]
    fn save_to_storage(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let json_str = serde_json::to_string(&self.logs).unwrap_or_else(|_| "[]".to_string());
                let _ = storage.set_item(LOG_TRACE_KEY, &json_str);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_to_storage(&self) {}

    #[cfg(target_arch = "wasm32")]
    pub fn download_logs(&self) {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let json_str = self.get_logs_json();
        let filename = format!("log_trace_{}.json", now_iso_string().replace(":", "-").replace(".", "-"));

        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                let blob_parts = js_sys::Array::new();
                blob_parts.push(&JsValue::from_str(&json_str));

                let options = web_sys::BlobPropertyBag::new();
                options.set_type("application/json");

                if let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options) {
                    if let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) {
                        if let Ok(a) = document.create_element("a") {
                            let _ = a.set_attribute("href", &url);
                            let _ = a.set_attribute("download", &filename);
                            if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
                                element.click();
                            }
                            let _ = web_sys::Url::revoke_object_url(&url);
                        }
                    }
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn download_logs(&self) {}
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn now_iso_string() -> String {
    js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_iso_string() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: &str, category: &str, message: &str) {
    let line = format!("[{}] {}", category, message);
    match level {
        "error" => web_sys::console::error_1(&line.into()),
        "warn" => web_sys::console::warn_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: &str, category: &str, message: &str) {
    eprintln!("{} [{}] {}", level, category, message);
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().info(category, message);
    });
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().info_with_data(category, message, data);
    });
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().warn(category, message);
    });
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().error(category, message);
    });
}

pub fn log_error_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().error_with_data(category, message, data);
    });
}

pub fn download_logs() {
    LOG_TRACE.with(|trace| {
        trace.borrow().download_logs();
    });
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().clear();
    });
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| {
        trace.borrow().get_logs_json()
    })
}

pub async fn copy_logs_to_clipboard_async() -> Result<(), String> {
    let json_str = get_logs_json();

    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let promise = clipboard.write_text(&json_str);
        let result = wasm_bindgen_futures::JsFuture::from(promise).await;

        match result {
            Ok(_) => {
                log_info("log-trace", "ログをクリップボードにコピーしました");
                Ok(())
            }
            Err(e) => {
                let error_msg = format!("クリップボードへのコピー失敗: {:?}", e);
                log_error("log-trace", &error_msg);
                Err(error_msg)
            }
        }
    } else {
        Err("windowが利用できません".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut trace = LogTrace::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            trace.info("test", &format!("entry {}", i));
        }
        let logs = trace.get_logs();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "entry 5");
    }

    #[test]
    fn test_levels_and_data() {
        let mut trace = LogTrace::new();
        trace.warn("storage", "読み込み失敗");
        trace.error_with_data("storage", "書き込み失敗", serde_json::json!({ "key": "k" }));
        let logs = trace.get_logs();
        assert_eq!(logs[0].level, "warn");
        assert_eq!(logs[1].level, "error");
        assert_eq!(logs[1].data.as_ref().unwrap()["key"], "k");

        trace.clear();
        assert!(trace.get_logs().is_empty());
        assert_eq!(trace.get_logs_json(), "[]");
    }
}
