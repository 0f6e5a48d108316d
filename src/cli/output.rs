//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;
use crate::core::types::RundeckOption;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for repository IDs
    pub fn repository(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for option values
    pub fn value(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for the RELEASE/LATEST keywords
    pub fn keyword(s: &str) -> ColoredString {
        s.magenta().bold()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Text of one option for human output
///
/// The display name is shown only when it adds something to the value.
pub fn format_option(option: &RundeckOption) -> String {
    if option.name == option.value {
        option.value.clone()
    } else {
        let detail = option
            .name
            .strip_prefix(option.value.as_str())
            .map(str::trim)
            .unwrap_or(option.name.as_str());
        format!("{} {}", option.value, detail)
    }
}

/// Colored variant of [`format_option`]
pub fn format_option_colored(option: &RundeckOption, keyword: bool) -> String {
    let value = if keyword {
        colors::keyword(&option.value)
    } else {
        colors::value(&option.value)
    };

    if option.name == option.value {
        format!("{value}")
    } else {
        let plain = format_option(option);
        let detail = plain[option.value.len()..].trim_start();
        format!("{} {}", value, colors::dim(detail))
    }
}

/// Print output based on format
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            // Human format should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
