//! レシピカタログ
//!
//! data/recipes.json をビルド時に埋め込み、セッション開始時に一度だけ読み込む。

use crate::models::{Recipe, RecipeId};
use crate::utils::log_trace::{log_error, log_info};

const CATALOG_JSON: &str = include_str!("../data/recipes.json");

/// カタログを読み込み（解析できなければ空）
pub fn load_catalog() -> Vec<Recipe> {
    parse_catalog(CATALOG_JSON)
}

fn parse_catalog(json: &str) -> Vec<Recipe> {
    match serde_json::from_str::<Vec<Recipe>>(json) {
        Ok(recipes) => {
            log_info("catalog", &format!("{}件のレシピを読み込みました", recipes.len()));
            recipes
        }
        Err(e) => {
            log_error("catalog", &format!("カタログ解析エラー: {}", e));
            Vec::new()
        }
    }
}

pub fn find_recipe(recipes: &[Recipe], id: RecipeId) -> Option<&Recipe> {
    recipes.iter().find(|r| r.id == id)
}

/// IDの並び順でレシピを取り出す（カタログに無いIDは飛ばす）
pub fn recipes_by_ids(recipes: &[Recipe], ids: &[RecipeId]) -> Vec<Recipe> {
    ids.iter()
        .filter_map(|id| find_recipe(recipes, *id).cloned())
        .collect()
}

/// カタログの更新日時を取得（ビルド時に埋め込み）
pub fn format_catalog_modified_time() -> String {
    match catalog_modified_secs(option_env!("CATALOG_MODIFIED")) {
        Some(secs) => format!("カタログ更新: {}", format_epoch_secs(secs)),
        None => "カタログ更新: 不明".to_string(),
    }
}

/// build.rs が埋め込んだUNIX秒（未設定・0・不正値はNone）
fn catalog_modified_secs(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|secs| *secs > 0.0)
}

/// ブラウザのロケール表記（JST）
#[cfg(target_arch = "wasm32")]
fn format_epoch_secs(secs: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(secs * 1000.0));
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"timeZone".into(), &"Asia/Tokyo".into());
    date.to_locale_string("ja-JP", &options).into()
}

#[cfg(not(target_arch = "wasm32"))]
fn format_epoch_secs(secs: f64) -> String {
    format!("@{}", secs as i64)
}
