//! 冷蔵庫の中身とレシピ材料の照合

use crate::models::{Recipe, RecipeWithMatch};

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// 冷蔵庫の中身を正規化（空の項目は捨てる）
fn normalize_pantry(pantry: &[String]) -> Vec<String> {
    pantry
        .iter()
        .map(|item| normalize(item))
        .filter(|item| !item.is_empty())
        .collect()
}

/// 材料が手持ちにあるか
///
/// 次のどれかを満たせばあり扱い（ゆるめの判定で、"chili" が "chili powder" に当たるのは許容）:
/// - 手持ちの項目が材料名に含まれる
/// - 材料名が手持ちの項目に含まれる
/// - 材料名を空白で区切った単語のどれかが手持ちの項目と一致する
fn is_available(ingredient: &str, pantry: &[String]) -> bool {
    let ingredient = normalize(ingredient);
    pantry.iter().any(|item| {
        ingredient.contains(item.as_str())
            || item.contains(ingredient.as_str())
            || ingredient.split_whitespace().any(|word| word == item)
    })
}

/// レシピと冷蔵庫の中身を照合
///
/// 冷蔵庫の項目は前後の空白を除いて小文字化し、空になった項目は照合に使わない。
/// 空文字はどの材料名にも含まれるため、そのまま使うと全材料があり扱いになる。
pub fn match_recipe(recipe: &Recipe, pantry: &[String]) -> RecipeWithMatch {
    let pantry = normalize_pantry(pantry);

    let (have, missing): (Vec<String>, Vec<String>) = recipe
        .ingredients
        .iter()
        .cloned()
        .partition(|ingredient| is_available(ingredient, &pantry));

    // 材料ゼロのレシピは 0%
    let percentage = if recipe.ingredients.is_empty() {
        0
    } else {
        (100.0 * have.len() as f64 / recipe.ingredients.len() as f64).round() as u8
    };

    RecipeWithMatch {
        recipe: recipe.clone(),
        have,
        missing,
        percentage,
    }
}

/// 冷蔵庫の中身で作れそうな順に並べる
///
/// `min_percentage` 未満は除外。冷蔵庫が空でなければ1つも一致しないレシピも除外する。
/// 同率は元のカタログ順を維持。
pub fn rank_by_pantry(recipes: &[Recipe], pantry: &[String], min_percentage: u8) -> Vec<RecipeWithMatch> {
    let has_pantry = !normalize_pantry(pantry).is_empty();
    let mut matches: Vec<RecipeWithMatch> = recipes
        .iter()
        .map(|r| match_recipe(r, pantry))
        .filter(|m| m.percentage >= min_percentage)
        .filter(|m| !has_pantry || !m.have.is_empty())
        .collect();
    matches.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use crate::utils::test_support::{pantry, recipe};

    #[test]
    fn test_substring_match() {
        let r = recipe(1, "Chili", "Mexican", Course::Dinner, &["Chili Powder", "Salt"]);
        let m = match_recipe(&r, &pantry(&["chili"]));
        assert_eq!(m.have, vec!["Chili Powder".to_string()]);
        assert_eq!(m.missing, vec!["Salt".to_string()]);
        assert_eq!(m.percentage, 50);
    }

    #[test]
    fn test_ingredient_contained_in_pantry_entry() {
        let r = recipe(1, "Pasta", "Italian", Course::Dinner, &["Basil"]);
        let m = match_recipe(&r, &pantry(&["Fresh Basil Leaves"]));
        assert_eq!(m.percentage, 100);
    }

    #[test]
    fn test_token_match_and_normalization() {
        let r = recipe(1, "Salad", "Greek", Course::Lunch, &["  Red ONION ", "Feta cheese"]);
        let m = match_recipe(&r, &pantry(&["  onion  "]));
        // 元の表記を保つ
        assert_eq!(m.have, vec!["  Red ONION ".to_string()]);
        assert_eq!(m.missing, vec!["Feta cheese".to_string()]);
    }

    #[test]
    fn test_lenient_match_is_preserved() {
        let r = recipe(1, "Odd", "Test", Course::Snack, &["Coil"]);
        let m = match_recipe(&r, &pantry(&["oil"]));
        assert_eq!(m.percentage, 100);
    }

    #[test]
    fn test_order_preserved() {
        let r = recipe(1, "Soup", "French", Course::Lunch, &["Leek", "Potato", "Butter", "Stock"]);
        let m = match_recipe(&r, &pantry(&["stock", "leek"]));
        assert_eq!(m.have, vec!["Leek".to_string(), "Stock".to_string()]);
        assert_eq!(m.missing, vec!["Potato".to_string(), "Butter".to_string()]);
        assert_eq!(m.percentage, 50);
    }

    #[test]
    fn test_rounding() {
        let r = recipe(1, "Trio", "Test", Course::Snack, &["A1", "B2", "C3"]);
        let m = match_recipe(&r, &pantry(&["a1", "b2"]));
        assert_eq!(m.percentage, 67);
    }

    #[test]
    fn test_zero_ingredients() {
        let r = recipe(1, "Air", "None", Course::Snack, &[]);
        let m = match_recipe(&r, &pantry(&["salt"]));
        assert_eq!(m.percentage, 0);
        assert!(m.have.is_empty());
        assert!(m.missing.is_empty());
    }

    #[test]
    fn test_empty_pantry() {
        let r = recipe(1, "Toast", "British", Course::Breakfast, &["Bread", "Butter"]);
        let m = match_recipe(&r, &[]);
        assert_eq!(m.percentage, 0);
        assert_eq!(m.missing.len(), 2);
        // 空白だけの項目は無視
        let m = match_recipe(&r, &pantry(&["", "  "]));
        assert_eq!(m.percentage, 0);
    }

    #[test]
    fn test_rank_by_pantry() {
        let recipes = vec![
            recipe(1, "Toast", "British", Course::Breakfast, &["Bread", "Butter"]),
            recipe(2, "Omelette", "French", Course::Breakfast, &["Eggs", "Butter", "Chives"]),
            recipe(3, "Eggs", "Any", Course::Breakfast, &["Eggs"]),
            recipe(4, "Sushi", "Japanese", Course::Dinner, &["Rice", "Nori"]),
        ];
        let ranked = rank_by_pantry(&recipes, &pantry(&["eggs", "butter"]), 0);
        let ids: Vec<_> = ranked.iter().map(|m| m.recipe.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let ranked = rank_by_pantry(&recipes, &pantry(&["eggs", "butter"]), 60);
        let ids: Vec<_> = ranked.iter().map(|m| m.recipe.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
