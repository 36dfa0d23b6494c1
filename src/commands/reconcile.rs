//! `blogline reconcile` command - maintenance sweep over channel child lists

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use blogline_core::content::ContentId;
use blogline_core::display::CacheTags;
use blogline_core::error::Result;
use blogline_core::site::Site;

pub fn execute(cli: &Cli, site: &Site, channel: Option<ContentId>) -> Result<()> {
    let report = site.sweep(channel)?;
    let tags: CacheTags = report.written().into_iter().collect();

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "channels_checked": report.channels_checked,
            "changed": report.changed,
            "cache_tags": tags,
        })),
        human => {
            if cli.quiet {
                for channel in report.written() {
                    println!("{}", channel);
                }
            } else {
                println!(
                    "Checked {} channel(s), updated {}",
                    report.channels_checked,
                    report.changed.len()
                );
                for sweep in &report.changed {
                    println!(
                        "  channel {}: {} added, {} removed, {} duplicate(s) collapsed",
                        sweep.channel,
                        sweep.diff.added.len(),
                        sweep.diff.removed.len(),
                        sweep.diff.collapsed
                    );
                }
            }
        }
    )
}
