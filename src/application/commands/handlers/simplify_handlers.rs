//! Simplify Command Handlers

use std::sync::Arc;

use crate::application::commands::simplify_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{SimplifierPort, SimplifyRequest};
use crate::domain::simplify::build_prompt;
use crate::domain::summarize;

/// SimplifyText Handler - 调用语言模型简化文本并计算前后对比
pub struct SimplifyTextHandler {
    simplifier: Arc<dyn SimplifierPort>,
    default_api_key: Option<String>,
}

impl SimplifyTextHandler {
    pub fn new(simplifier: Arc<dyn SimplifierPort>, default_api_key: Option<String>) -> Self {
        Self {
            simplifier,
            default_api_key,
        }
    }

    pub async fn handle(
        &self,
        cmd: SimplifyTextCommand,
    ) -> Result<SimplifyTextResponse, ApplicationError> {
        if cmd.text.trim().is_empty() {
            return Err(ApplicationError::validation("Source text is empty"));
        }

        let api_key = cmd
            .api_key
            .or_else(|| self.default_api_key.clone())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::validation(format!(
                    "Please enter a {} API key first",
                    self.simplifier.provider_name()
                ))
            })?;

        let request = SimplifyRequest {
            prompt: build_prompt(cmd.mode, cmd.difficulty, &cmd.text),
            api_key,
        };

        let text = self.simplifier.simplify(request).await.map_err(|e| {
            tracing::error!(
                provider = self.simplifier.provider_name(),
                error = %e,
                "Simplification failed"
            );
            ApplicationError::ExternalServiceError(format!(
                "Could not simplify text using {}: {}",
                self.simplifier.provider_name(),
                e
            ))
        })?;

        let stats = summarize(&text, false, Some(&cmd.text));

        tracing::info!(
            provider = self.simplifier.provider_name(),
            mode = ?cmd.mode,
            difficulty = %cmd.difficulty,
            words_before = cmd.text.split_whitespace().count(),
            words_after = stats.word_count,
            improvement = ?stats.improvement_delta,
            "Text simplified"
        );

        Ok(SimplifyTextResponse {
            text,
            difficulty: cmd.difficulty,
            stats,
        })
    }
}
