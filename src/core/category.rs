//! # Categories
//!
//! The four kinds of question the quiz can ask. The set is closed, so
//! every `match` over it is exhaustive and there is no "unknown category"
//! path anywhere in the engine.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Addition,
    Subtract,
    Multiply,
    Division,
}

impl Category {
    /// All categories in button order.
    pub const ALL: [Category; 4] = [
        Category::Addition,
        Category::Subtract,
        Category::Multiply,
        Category::Division,
    ];

    /// Operator shown between the two operands.
    pub fn operator(&self) -> &'static str {
        match self {
            Category::Addition => "+",
            Category::Subtract => "-",
            Category::Multiply => "×",
            Category::Division => "÷",
        }
    }

    /// Human-readable button label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Addition => "Addition",
            Category::Subtract => "Subtraction",
            Category::Multiply => "Multiplication",
            Category::Division => "Division",
        }
    }

    /// Stable key used in config files and env vars.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Addition => "addition",
            Category::Subtract => "subtract",
            Category::Multiply => "multiply",
            Category::Division => "division",
        }
    }

    /// Parses a config/env key. Case-insensitive, surrounding whitespace ignored.
    pub fn from_key(key: &str) -> Option<Category> {
        let key = key.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    /// Position in `ALL`.
    pub fn index(&self) -> usize {
        match self {
            Category::Addition => 0,
            Category::Subtract => 1,
            Category::Multiply => 2,
            Category::Division => 3,
        }
    }

    /// Cycle forward through categories (wraps around).
    pub fn next(&self) -> Category {
        Category::ALL[(self.index() + 1) % Category::ALL.len()]
    }

    /// Cycle backward through categories (wraps around).
    pub fn prev(&self) -> Category {
        let len = Category::ALL.len();
        Category::ALL[(self.index() + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_addition() {
        assert_eq!(Category::default(), Category::Addition);
    }

    #[test]
    fn test_operators() {
        assert_eq!(Category::Addition.operator(), "+");
        assert_eq!(Category::Subtract.operator(), "-");
        assert_eq!(Category::Multiply.operator(), "×");
        assert_eq!(Category::Division.operator(), "÷");
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Category::Addition.next(), Category::Subtract);
        assert_eq!(Category::Division.next(), Category::Addition);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(Category::Addition.prev(), Category::Division);
        assert_eq!(Category::Multiply.prev(), Category::Subtract);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Category::from_key("division"), Some(Category::Division));
        assert_eq!(Category::from_key("  Multiply "), Some(Category::Multiply));
        assert_eq!(Category::from_key("subtraction"), None);
        assert_eq!(Category::from_key(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        #[derive(Deserialize)]
        struct Wrapper {
            category: Category,
        }
        let w: Wrapper = toml::from_str("category = \"subtract\"").unwrap();
        assert_eq!(w.category, Category::Subtract);
    }
}
