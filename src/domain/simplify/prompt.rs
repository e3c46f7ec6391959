//! 提示词构造

use super::value_objects::{Difficulty, SimplificationMode};

/// 构造发送给语言模型的完整提示词
pub fn build_prompt(mode: SimplificationMode, difficulty: Difficulty, source: &str) -> String {
    let instructions = match mode {
        SimplificationMode::Summarize => {
            "Summarize the text in a concise way. Focus on the main ideas.".to_string()
        }
        SimplificationMode::Bullets => {
            "Convert the text into a bulleted list of key points.".to_string()
        }
        SimplificationMode::Simplify => format!(
            "Simplify the text specifically for a reader with dyslexia.\n\
             Strictly follow these rules:\n\
             1. {}\n\
             2. Use active voice/verbs (e.g., \"The cat sat on the mat\" NOT \"The mat was sat on by the cat\").\n\
             3. Break large blocks of text into smaller paragraphs with clear topic sentences.\n\
             4. Maintain the original meaning and tone, but reduce cognitive load.",
            difficulty.instruction()
        ),
    };

    format!("Task: {}\n\nOriginal Text:\n\"{}\"", instructions, source)
}
