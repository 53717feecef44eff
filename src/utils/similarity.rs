//! 似たレシピの推薦

use std::collections::HashSet;

use crate::models::Recipe;

const CUISINE_WEIGHT: f64 = 40.0;
const COURSE_WEIGHT: f64 = 20.0;
const INGREDIENT_WEIGHT: f64 = 40.0;

fn ingredient_set(recipe: &Recipe) -> HashSet<String> {
    recipe.ingredients.iter().map(|i| i.to_lowercase()).collect()
}

/// 材料集合のJaccard係数（和集合が空なら 0）
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// 2つのレシピの類似度 (0〜100)
///
/// ジャンル一致 +40、コース一致 +20、材料のJaccard係数 × 40。
pub fn calculate_similarity(a: &Recipe, b: &Recipe) -> u8 {
    let mut score = 0.0;
    if a.cuisine == b.cuisine {
        score += CUISINE_WEIGHT;
    }
    if a.course == b.course {
        score += COURSE_WEIGHT;
    }
    score += INGREDIENT_WEIGHT * jaccard(&ingredient_set(a), &ingredient_set(b));
    score.round() as u8
}

/// 対象レシピに似ているものを上位 `limit` 件返す
///
/// 対象自身（同じID）は除外。同点はカタログ順。
pub fn get_similar_recipes(target: &Recipe, recipes: &[Recipe], limit: usize) -> Vec<Recipe> {
    let mut scored: Vec<(u8, &Recipe)> = recipes
        .iter()
        .filter(|r| r.id != target.id)
        .map(|r| (calculate_similarity(target, r), r))
        .collect();
    // sort_by は安定ソート
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, r)| r.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use crate::utils::test_support::recipe;

    #[test]
    fn test_identical_recipes_score_100() {
        let a = recipe(1, "Pad Thai", "Thai", Course::Dinner, &["Noodles", "Peanuts", "Lime"]);
        let b = recipe(2, "Pad Thai II", "Thai", Course::Dinner, &["lime", "NOODLES", "peanuts"]);
        assert_eq!(calculate_similarity(&a, &b), 100);
    }

    #[test]
    fn test_nothing_shared_scores_0() {
        let a = recipe(1, "Pad Thai", "Thai", Course::Dinner, &["Noodles"]);
        let b = recipe(2, "Scones", "British", Course::Snack, &["Flour"]);
        assert_eq!(calculate_similarity(&a, &b), 0);
    }

    #[test]
    fn test_partial_overlap() {
        // ジャンル一致 40 + 材料 1/3 × 40 = 53.3
        let a = recipe(1, "A", "Italian", Course::Dinner, &["Tomato", "Basil"]);
        let b = recipe(2, "B", "Italian", Course::Lunch, &["Tomato", "Cheese"]);
        assert_eq!(calculate_similarity(&a, &b), 53);
    }

    #[test]
    fn test_empty_ingredient_sets() {
        let a = recipe(1, "A", "Thai", Course::Dinner, &[]);
        let b = recipe(2, "B", "Thai", Course::Dinner, &[]);
        assert_eq!(calculate_similarity(&a, &b), 60);
    }

    #[test]
    fn test_ingredients_not_trimmed() {
        let a = recipe(1, "A", "X", Course::Snack, &["Salt "]);
        let b = recipe(2, "B", "Y", Course::Dinner, &["salt"]);
        assert_eq!(calculate_similarity(&a, &b), 0);
    }

    #[test]
    fn test_similar_excludes_target_and_limits() {
        let target = recipe(1, "Green Curry", "Thai", Course::Dinner, &["Chicken", "Curry Paste"]);
        let catalog = vec![
            target.clone(),
            recipe(2, "Scones", "British", Course::Snack, &["Flour"]),
            recipe(3, "Red Curry", "Thai", Course::Dinner, &["Beef", "Curry Paste"]),
            recipe(4, "Tom Yum", "Thai", Course::Lunch, &["Shrimp"]),
            recipe(5, "Massaman", "Thai", Course::Dinner, &["Chicken", "Curry Paste"]),
        ];
        let similar = get_similar_recipes(&target, &catalog, 3);
        let ids: Vec<_> = similar.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 3, 4]);
        assert!(!ids.contains(&1));
    }

    #[test]
    fn test_similar_ties_keep_catalog_order() {
        let target = recipe(1, "T", "Thai", Course::Dinner, &["Rice"]);
        let catalog = vec![
            recipe(7, "A", "Thai", Course::Lunch, &[]),
            recipe(3, "B", "Thai", Course::Lunch, &[]),
            recipe(9, "C", "Thai", Course::Lunch, &[]),
        ];
        let ids: Vec<_> = get_similar_recipes(&target, &catalog, 10).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 3, 9]);
    }
}
