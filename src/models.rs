//! データ構造体モジュール

use serde::{Deserialize, Serialize};

/// レシピID（セッション内で一意）
pub type RecipeId = u32;

// ============================================
// レシピカタログ用データ構造
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
    Beverage,
}

impl Course {
    pub const ALL: &'static [Course] = &[
        Course::Breakfast,
        Course::Lunch,
        Course::Dinner,
        Course::Snack,
        Course::Dessert,
        Course::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Breakfast => "Breakfast",
            Course::Lunch => "Lunch",
            Course::Dinner => "Dinner",
            Course::Snack => "Snack",
            Course::Dessert => "Dessert",
            Course::Beverage => "Beverage",
        }
    }

    /// 表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Course::Breakfast => "朝食",
            Course::Lunch => "昼食",
            Course::Dinner => "夕食",
            Course::Snack => "軽食",
            Course::Dessert => "デザート",
            Course::Beverage => "ドリンク",
        }
    }

    /// 文字列から変換（"All"など未知の値はNone = 絞り込みなし）
    pub fn from_str(s: &str) -> Option<Self> {
        Course::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] = &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "かんたん",
            Difficulty::Medium => "ふつう",
            Difficulty::Hard => "むずかしい",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Difficulty::ALL.iter().copied().find(|d| d.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub cuisine: String,
    pub course: Course,
    /// 調理時間（"45 mins", "1 hour 30 min" などの自由記述）
    pub time: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
}

/// 栄養成分（1人前あたり）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub protein: String,
    #[serde(default)]
    pub carbs: String,
    #[serde(default)]
    pub fat: String,
}

/// 代替食材
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub ingredient: String,
    pub alternative: String,
}

// ============================================
// 冷蔵庫マッチ結果
// ============================================

/// 冷蔵庫の中身と照合したレシピ（保存はしない）
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeWithMatch {
    pub recipe: Recipe,
    /// 手持ちの材料（元の表記・カタログ順）
    pub have: Vec<String>,
    /// 足りない材料
    pub missing: Vec<String>,
    /// 0〜100
    pub percentage: u8,
}

// ============================================
// 評価
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

// ============================================
// ビューモード
// ============================================

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ViewMode {
    Browse,
    Pantry,
    Saved,
    History,
    Detail(RecipeId),
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Browse
    }
}
