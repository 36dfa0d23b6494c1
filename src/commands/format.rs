//! Shared output helpers for commands

use blogline_core::error::Result;
use serde::Serialize;

/// Dispatch output by format. The json branch returns `Result`; the human
/// branch is a block returning `()`.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&channel),
///     human => { println!("{}", channel.title); }
/// )?;
/// ```
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

pub(crate) use output_by_format_result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human label for an optional link
pub fn link_label(title: &str, url: &str) -> String {
    if url.is_empty() {
        "(none)".to_string()
    } else {
        format!("{} <{}>", title, url)
    }
}
