//! ビューモジュール

pub mod browse;
pub mod detail;
pub mod pantry;
pub mod saved;

pub use browse::BrowseView;
pub use detail::RecipeDetail;
pub use pantry::PantryView;
pub use saved::{HistoryView, SavedView};
