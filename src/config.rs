//! 設定値（LocalStorageキー・上限値）

pub const SAVED_RECIPES_KEY: &str = "recipe_finder_saved_recipes";
pub const HISTORY_KEY: &str = "recipe_finder_history";
pub const RECENT_SEARCHES_KEY: &str = "recipe_finder_recent_searches";
pub const PANTRY_KEY: &str = "recipe_finder_pantry";
pub const RATINGS_KEY: &str = "recipe_finder_ratings";
/// JSONではなく "true" / "false" の文字列で保存
pub const COOKIE_CONSENT_KEY: &str = "recipe_finder_cookie_consent";
#[cfg(target_arch = "wasm32")]
pub const LOG_TRACE_KEY: &str = "recipe_finder_log_trace";

/// 閲覧履歴の最大件数
pub const HISTORY_LIMIT: usize = 50;
/// 最近の検索の最大件数
pub const RECENT_SEARCH_LIMIT: usize = 10;
/// 詳細画面に出す似たレシピの件数
pub const SIMILAR_RECIPE_LIMIT: usize = 4;
pub const MAX_LOG_ENTRIES: usize = 1000;
