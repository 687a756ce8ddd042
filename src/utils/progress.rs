use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress output for one pipeline run.
///
/// Milestones go to stdout; a spinner covers the long parse step. With
/// `silent` set nothing is printed at all.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    silent: bool,
}

impl ProgressReporter {
    pub fn new(silent: bool) -> Self {
        Self {
            progress_bar: None,
            silent,
        }
    }

    pub fn silent() -> Self {
        Self::new(true)
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Start (or restart) a spinner with the given message.
    pub fn start_spinner(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&mut self, message: &str) {
        match self.progress_bar.take() {
            Some(pb) => pb.finish_with_message(message.to_string()),
            None => self.println(message),
        }
    }

    pub fn println(&self, message: &str) {
        if !self.silent {
            if let Some(ref pb) = self.progress_bar {
                pb.println(message);
            } else {
                println!("{}", message);
            }
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}
