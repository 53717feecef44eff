//! ユーティリティモジュール
//!
//! レシピの絞り込み・照合・推薦と、LocalStorageへの永続化

pub mod filters;
pub mod log_trace;
pub mod matching;
pub mod similarity;
pub mod storage;
pub mod store;
pub mod time;

pub use filters::RecipeFilter;
pub use matching::{match_recipe, rank_by_pantry};
pub use similarity::get_similar_recipes;
pub use store::RecipeStore;
