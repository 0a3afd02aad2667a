use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner style used while a command is running.
/// - Yellow spinner with braille frames, message beside it.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("\x1b[33m{spinner}\x1b[0m {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"])
}

/// Green check mark followed by the final message.
pub fn ok_style() -> ProgressStyle {
    ProgressStyle::with_template("\x1b[32m✔\x1b[0m {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Red cross followed by the error message.
pub fn err_style() -> ProgressStyle {
    ProgressStyle::with_template("\x1b[31m✘\x1b[0m {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Add a ticking spinner showing `msg` to `mp`.
pub fn start_spinner(mp: &MultiProgress, msg: String) -> ProgressBar {
    let pb = mp.add(ProgressBar::new_spinner());
    pb.set_style(spinner_style());
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
