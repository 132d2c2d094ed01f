use crate::output::is_quiet;
use indicatif::ProgressBar;
use std::time::Duration;

/// Spinner shown while a file is streamed into the store
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = if is_quiet() || !console::Term::stdout().is_term() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    pub fn finish_with_message(&self, msg: &str) {
        self.pb.finish_with_message(msg.to_string());
    }

    /// Stop and leave the last message visible
    pub fn abandon(&self, msg: &str) {
        self.pb.abandon_with_message(msg.to_string());
    }
}
