//! UIコンポーネントモジュール

pub mod cookie_banner;
pub mod cooking_steps;
pub mod filter_bar;
pub mod rating_form;
pub mod recipe_card;

pub use cookie_banner::CookieBanner;
pub use cooking_steps::CookingSteps;
pub use filter_bar::FilterBar;
pub use rating_form::RatingForm;
pub use recipe_card::{RecipeCard, RecipeGrid};
