//! Spinner shown while a submission is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn analyzing_spinner(filename: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.red} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(format!("Analyzing {}...", filename));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
