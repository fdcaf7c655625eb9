//! # Console Dialogs
//!
//! Operator dialogs answered on stdin. The command loop and the dialogs read
//! from one shared line reader, so a dialog opened by a command takes the
//! next typed line.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use pos_view_state::{ConfirmRequest, Confirmer, PromptRequest, Prompter};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::warn;

/// Line-oriented stdin shared by the command loop and the dialogs.
pub struct LineReader {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl LineReader {
    pub fn stdin() -> Self {
        LineReader {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    pub async fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        if let Err(e) = std::io::stdout().flush() {
            warn!(%e, "Could not flush stdout");
        }

        let mut lines = self.lines.lock().await;
        match lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                warn!(%e, "Could not read from stdin");
                None
            }
        }
    }
}

/// Confirmation and prompt dialogs on the console.
pub struct ConsoleDialogs {
    input: Arc<LineReader>,
}

impl ConsoleDialogs {
    pub fn new(input: Arc<LineReader>) -> Self {
        ConsoleDialogs { input }
    }
}

/// Accepts the answers an operator would type for "yes".
fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "ok" | "ใช่"
    )
}

#[async_trait]
impl Confirmer for ConsoleDialogs {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        println!("[{}]", request.title);
        let prompt = format!("{} [y/N] ", request.message);
        self.input
            .read_line(&prompt)
            .await
            .is_some_and(|answer| is_yes(&answer))
    }
}

#[async_trait]
impl Prompter for ConsoleDialogs {
    async fn prompt(&self, request: PromptRequest) -> Option<String> {
        let prompt = format!("{} (empty line cancels): ", request.message);
        let answer = self.input.read_line(&prompt).await?;
        // A bare newline is the console's way to dismiss; whitespace-only
        // input is passed through so it can be refused as blank.
        if answer.is_empty() {
            None
        } else {
            Some(answer)
        }
    }
}
