//! 調理モード（手順を1つずつ進める）

use crate::models::Recipe;

#[derive(Debug, Clone, PartialEq)]
pub struct CookingSession {
    steps: Vec<String>,
    current: usize,
}

impl CookingSession {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            steps: recipe.instructions.clone(),
            current: 0,
        }
    }

    pub fn current_step(&self) -> Option<&str> {
        self.steps.get(self.current).map(String::as_str)
    }

    /// 0始まりの現在位置
    pub fn index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    /// 次へ（最後の手順では動かない）
    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.steps.len() {
            self.current = index;
        }
    }

    /// 進捗 (0〜100)
    pub fn progress(&self) -> usize {
        if self.steps.is_empty() {
            return 0;
        }
        (self.current + 1) * 100 / self.steps.len()
    }
}
