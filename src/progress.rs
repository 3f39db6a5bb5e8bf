//! Progress bar display for target builds

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "[{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Progress display over the targets of one run
///
/// Hidden when quiet or when stderr is not a terminal.
pub struct BuildProgress {
    bar: ProgressBar,
}

impl BuildProgress {
    /// Create a new progress display with total target count
    pub fn new(total_targets: u64, quiet: bool) -> Self {
        let bar = if quiet || !Term::stderr().is_term() {
            ProgressBar::hidden()
        } else {
            ProgressBar::with_draw_target(Some(total_targets), ProgressDrawTarget::stderr())
        };

        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_length(total_targets);

        Self { bar }
    }

    /// Record one finished target
    pub fn target_built(&self, name: &str) {
        self.bar.set_message(name.to_string());
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
