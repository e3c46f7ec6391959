//! Simplify Context - Value Objects

use serde::{Deserialize, Serialize};

/// 目标阅读难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Very Easy", alias = "very_easy")]
    VeryEasy,
    #[serde(alias = "easy")]
    Easy,
    #[default]
    #[serde(alias = "medium")]
    Medium,
}

impl Difficulty {
    /// 展示用标签
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
        }
    }

    /// 难度对应的提示词片段
    pub fn instruction(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => {
                "Target a 2nd-grade reading level. Use extremely simple words. Sentences must be under 8 words."
            }
            Difficulty::Easy => {
                "Target a 5th-grade reading level. Use common vocabulary. Sentences must be under 12 words."
            }
            Difficulty::Medium => {
                "Target an 8th-grade reading level. Clear, standard English. Sentences around 15 words."
            }
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 简化模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimplificationMode {
    #[default]
    Simplify,
    Summarize,
    Bullets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_deserialize() {
        let d: Difficulty = serde_json::from_str("\"Very Easy\"").unwrap();
        assert_eq!(d, Difficulty::VeryEasy);
        let d: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_mode_deserialize() {
        let m: SimplificationMode = serde_json::from_str("\"bullets\"").unwrap();
        assert_eq!(m, SimplificationMode::Bullets);
        assert_eq!(SimplificationMode::default(), SimplificationMode::Simplify);
    }
}
