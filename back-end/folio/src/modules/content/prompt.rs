use std::io::{self, BufRead, Write};

/// Interactive questions asked by the gate and by deletes.
pub trait Prompt {
    /// Yes/no question. `false` means the user cancelled.
    fn confirm(&mut self, message: &str) -> bool;

    /// Secret entry. `None` means the prompt was dismissed.
    fn secret(&mut self, message: &str) -> Option<String>;
}

/// Answers read from the terminal, unless pre-answered by command-line flags.
///
/// Input is not masked.
#[derive(Debug, Default)]
pub struct TerminalPrompt {
    assume_yes: bool,
    secret: Option<String>,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool, secret: Option<String>) -> Self {
        Self { assume_yes, secret }
    }

    fn read_line(message: &str) -> Option<String> {
        eprint!("{} ", message);
        io::stderr().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Self::read_line(&format!("{} [y/N]", message))
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn secret(&mut self, message: &str) -> Option<String> {
        if let Some(secret) = self.secret.take() {
            return Some(secret);
        }
        Self::read_line(message).filter(|s| !s.is_empty())
    }
}

/// Pre-recorded answers, consumed in order. Unanswered questions cancel.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    confirmations: std::collections::VecDeque<bool>,
    secrets: std::collections::VecDeque<Option<String>>,
    asked: Vec<String>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secrets.push_back(Some(secret.into()));
        self
    }

    pub fn dismissing_secret(mut self) -> Self {
        self.secrets.push_back(None);
        self
    }

    /// Every message shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

#[cfg(any(test, feature = "testing"))]
impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn secret(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.secrets.pop_front().flatten()
    }
}
