//! `blogline init` command - create a new site
//!
//! Idempotent: an existing site keeps its config and content.

use std::path::Path;

use crate::cli::paths::resolve_site_path;
use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use blogline_core::content::ContentKind;
use blogline_core::error::Result;
use blogline_core::site::Site;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let site = match &cli.site {
        Some(path) => Site::init_at(&resolve_site_path(root, path))?,
        None => Site::init(root)?,
    };

    let schema_version = site.db().get_schema_version()?;
    let channels = site.db().count(ContentKind::Channel)?;
    let posts = site.db().count(ContentKind::Post)?;

    output_by_format_result!(cli.format,
        json => print_json(&serde_json::json!({
            "status": "ok",
            "site": site.root().display().to_string(),
            "schema_version": schema_version,
            "channels": channels,
            "posts": posts,
            "message": "Site initialized"
        })),
        human => {
            println!("Initialized blogline site at {}", site.root().display());
            if !cli.quiet {
                if channels == 0 {
                    println!();
                    println!("Run `blogline channel create <title>` to add a channel.");
                } else {
                    println!("  {} channel(s), {} post(s)", channels, posts);
                }
            }
        }
    )
}
