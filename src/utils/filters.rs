//! レシピ一覧の絞り込み
//!
//! どの関数も `Vec<Recipe>` を受け取り絞り込んだ `Vec<Recipe>` を返すので、
//! つなげて呼べばAND条件になる。

use crate::models::{Course, Difficulty, Recipe};
use super::time::parse_time;

/// コースで絞り込み（None = すべて）
pub fn filter_by_course(recipes: Vec<Recipe>, course: Option<Course>) -> Vec<Recipe> {
    match course {
        None => recipes,
        Some(course) => recipes.into_iter().filter(|r| r.course == course).collect(),
    }
}

/// 難易度で絞り込み（None = すべて）
pub fn filter_by_difficulty(recipes: Vec<Recipe>, difficulty: Option<Difficulty>) -> Vec<Recipe> {
    match difficulty {
        None => recipes,
        Some(difficulty) => recipes
            .into_iter()
            .filter(|r| r.difficulty == difficulty)
            .collect(),
    }
}

/// 調理時間の上限で絞り込み
///
/// `max_minutes` が 0 なら未設定扱い。上限があるときは時間を解析できない
/// レシピ（0分扱い）も除外する。
pub fn filter_by_time(recipes: Vec<Recipe>, max_minutes: u32) -> Vec<Recipe> {
    if max_minutes == 0 {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|r| {
            let minutes = parse_time(&r.time);
            minutes > 0 && minutes <= max_minutes
        })
        .collect()
}

/// フリーワード検索
///
/// タイトル・料理ジャンル・材料・手順のどれかに部分一致すればヒット（大文字小文字は無視）。
pub fn search_recipes(recipes: Vec<Recipe>, query: &str) -> Vec<Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|r| matches_query(r, &query))
        .collect()
}

fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.title.to_lowercase().contains(query)
        || recipe.cuisine.to_lowercase().contains(query)
        || recipe.ingredients.iter().any(|i| i.to_lowercase().contains(query))
        || recipe.instructions.iter().any(|s| s.to_lowercase().contains(query))
}

/// 絞り込み条件一式
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    pub query: String,
    pub course: Option<Course>,
    pub difficulty: Option<Difficulty>,
    /// 0 = 上限なし
    pub max_minutes: u32,
}

impl RecipeFilter {
    /// 検索 → コース → 難易度 → 時間 の順に適用
    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        let recipes = search_recipes(recipes, &self.query);
        let recipes = filter_by_course(recipes, self.course);
        let recipes = filter_by_difficulty(recipes, self.difficulty);
        filter_by_time(recipes, self.max_minutes)
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.course.is_some()
            || self.difficulty.is_some()
            || self.max_minutes > 0
    }
}
