//! Progress bar rendering for downloads.

use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar for a single file download.
///
/// Determinate when the response declared a content length, a spinner
/// otherwise.
pub fn make_progress_bar(total: Option<u64>, name: &str) -> ProgressBar {
    let bar = match total {
        Some(size) => {
            let bar = ProgressBar::new(size);
            bar.set_style(
                ProgressStyle::with_template(
                    "{spinner:.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} @ {bytes_per_sec} - {msg}",
                )
                .expect("progress template is valid")
                .progress_chars("━━╌"),
            );
            bar
        }
        None => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {bytes} @ {bytes_per_sec} - {msg}")
                    .expect("spinner template is valid"),
            );
            bar
        }
    };
    bar.set_message(name.to_string());
    bar
}
