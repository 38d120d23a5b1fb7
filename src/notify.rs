//! User-facing notifications.
//!
//! Exporters never print directly; they report through a [`Notifier`] so the
//! binary, tests and non-interactive callers can each decide what a
//! notification looks like.

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use std::cell::RefCell;
use std::io::{self, Write};

/// Message shown when an export is asked to write an empty dataset.
pub const NO_DATA_MESSAGE: &str = "No data available to export.";

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Prints a highlighted warning to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(stderr, "{} {}", "warning:".yellow().bold(), message);
    }
}

/// Notifier for the current stderr: styled when it is a terminal, a log
/// warning otherwise.
#[must_use]
pub fn stderr_notifier() -> Box<dyn Notifier> {
    if io::stderr().is_tty() {
        Box::new(TerminalNotifier)
    } else {
        Box::new(LogNotifier)
    }
}

/// Emits notifications as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Keeps every message it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
