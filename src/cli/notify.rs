//! Terminal notification sink: spinner for loading, styled lines otherwise

use crate::cli::style::{check, cross, spinner_style, Stylize};
use anstream::{eprintln, println};
use folio_contact::submit::NotificationSink;
use indicatif::ProgressBar;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows loading as a spinner on stderr and results as single lines
pub struct CliNotifier {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliNotifier {
    /// Create a sink with no active spinner
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }
}

impl Default for CliNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for CliNotifier {
    fn show_loading(&self, message: &str) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        let mut slot = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(bar) {
            previous.finish_and_clear();
        }
    }

    fn show_success(&self, message: &str) {
        println!("{} {}", check(), message.success());
    }

    fn show_error(&self, message: &str) {
        eprintln!("{} {}", cross(), message.error());
    }

    fn dismiss_active(&self) {
        let mut slot = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(bar) = slot.take() {
            bar.finish_and_clear();
        }
    }
}
