//! Terminal output helpers.

use std::io::Write;

use miette::Report;
use owo_colors::OwoColorize;

/// Banner printed above every fatal error.
pub const FATAL_BANNER: &str = "Fatal Error (try --help for help):";

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to whether stderr is a
/// terminal.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Install the miette report handler; plain text unless `color`.
pub fn init_report_handler(color: bool) {
    // Only the first hook sticks.
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(color)
                .unicode(color)
                .wrap_lines(false)
                .build(),
        )
    }));
}

/// Print the fatal banner and `report` to stderr.
pub fn fatal(report: &Report, color: bool) {
    let mut stderr = std::io::stderr().lock();
    let banner = if color {
        FATAL_BANNER.red().bold().to_string()
    } else {
        FATAL_BANNER.to_string()
    };
    // Nothing useful can be done if stderr itself is gone.
    let _ = writeln!(stderr, "{banner}");
    let _ = writeln!(stderr, "{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_env_disables_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(should_use_color());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
