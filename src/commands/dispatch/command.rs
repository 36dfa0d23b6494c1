//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_site_path;
use crate::cli::Cli;
use blogline_core::error::Result;
use blogline_core::site::Site;

/// Discover or open a site based on CLI configuration
pub fn discover_or_open_site(cli: &Cli, root: &Path) -> Result<Site> {
    match &cli.site {
        Some(path) => Site::open(&resolve_site_path(root, path)),
        None => Site::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_site(&self) -> Result<Site> {
        let site = discover_or_open_site(self.cli, self.root)?;
        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            site = %site.root().display(),
            "open_site"
        );
        Ok(site)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("blogline {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Channel and post maintenance for a blog site.");
        println!();
        println!("Run `blogline --help` for usage information.");
        Ok(())
    }
}
