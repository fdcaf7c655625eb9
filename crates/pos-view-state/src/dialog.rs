//! # Operator Dialogs
//!
//! Async collaborators for questions put to the operator: yes/no
//! confirmation before irreversible actions, and free-text prompts.
//!
//! A dismissed or declined dialog is an ordinary answer, not an error.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the confirmation dialog shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
}

/// What the text prompt shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub message: String,
}

/// Yes/no confirmation.
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Resolves `true` only on an explicit yes.
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}

/// Free-text prompt.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Resolves `None` when dismissed.
    async fn prompt(&self, request: PromptRequest) -> Option<String>;
}

// =============================================================================
// Scripted Dialogs
// =============================================================================

/// Dialogs answered from a pre-loaded script, recording every question.
///
/// Runs out of answers as "no" / dismissed.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    confirms: Mutex<VecDeque<bool>>,
    prompts: Mutex<VecDeque<Option<String>>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_confirm(&self, answer: bool) {
        self.confirms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(answer);
    }

    pub fn push_prompt(&self, answer: Option<&str>) {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(answer.map(str::to_string));
    }

    /// Messages of every dialog shown, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, message: &str) {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[async_trait]
impl Confirmer for ScriptedDialogs {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.record(&request.message);
        self.confirms
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(false)
    }
}

#[async_trait]
impl Prompter for ScriptedDialogs {
    async fn prompt(&self, request: PromptRequest) -> Option<String> {
        self.record(&request.message);
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_answers_in_order() {
        let dialogs = ScriptedDialogs::new();
        dialogs.push_confirm(true);
        dialogs.push_prompt(Some("Drinks"));

        let yes = dialogs
            .confirm(ConfirmRequest {
                title: "t".into(),
                message: "first?".into(),
            })
            .await;
        let no = dialogs
            .confirm(ConfirmRequest {
                title: "t".into(),
                message: "second?".into(),
            })
            .await;
        let name = dialogs
            .prompt(PromptRequest {
                message: "name?".into(),
            })
            .await;

        assert!(yes);
        assert!(!no);
        assert_eq!(name.as_deref(), Some("Drinks"));
        assert_eq!(dialogs.asked(), vec!["first?", "second?", "name?"]);
    }
}
