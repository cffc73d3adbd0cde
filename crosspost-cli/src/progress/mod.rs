//! Progress reporting for batch conversions

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar shown while a batch of posts is converted.
///
/// Quiet mode and single-file runs get no bar; one file finishes too
/// fast for a bar to say anything useful.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for a batch of `total` input files.
    pub fn for_files(total: u64, quiet: bool) -> Self {
        if quiet || total < 2 {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} posts {msg}")
                .expect("progress template is valid")
                .progress_chars("##-"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    /// Record one converted post and how many chunks it produced.
    pub fn post_converted(&self, filename: &str, chunks: usize) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} ({} chunk(s))", filename, chunks));
            bar.inc(1);
        }
    }

    /// Clear the bar and print the closing message.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_has_no_bar() {
        let reporter = ProgressReporter::for_files(10, true);
        assert!(reporter.bar.is_none());

        // No-ops, but must not panic.
        reporter.post_converted("a.txt", 3);
        reporter.finish();
    }

    #[test]
    fn test_single_file_has_no_bar() {
        let reporter = ProgressReporter::for_files(1, false);
        assert!(reporter.bar.is_none());
    }
}
