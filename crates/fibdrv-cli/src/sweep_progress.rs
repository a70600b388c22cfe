//! Progress bar for offset sweeps.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar over the offsets of a sweep, hidden in quiet mode.
pub struct SweepProgress {
    bar: ProgressBar,
}

impl SweepProgress {
    /// Create a bar for `total` reads. Draws to stderr unless `hidden`.
    #[must_use]
    pub fn new(total: u64, hidden: bool) -> Self {
        let bar = ProgressBar::new(total);
        if hidden {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        } else if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} offsets ({eta})")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    /// Record one completed read.
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Reads recorded so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_counts() {
        let progress = SweepProgress::new(3, true);
        progress.advance();
        progress.advance();
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
