//! Command implementations for all blogline commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use blogline_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Init => commands::init::execute(ctx.cli, ctx.root),
            Commands::Channel { command } => {
                let site = ctx.discover_or_open_site()?;
                commands::channel::execute(ctx.cli, &site, command)
            }
            Commands::Post { command } => {
                let site = ctx.discover_or_open_site()?;
                commands::post::execute(ctx.cli, &site, command)
            }
            Commands::Nav { post, strategy } => {
                let site = ctx.discover_or_open_site()?;
                commands::nav::execute(ctx.cli, &site, *post, *strategy)
            }
            Commands::Children { channel } => {
                let site = ctx.discover_or_open_site()?;
                commands::children::execute(ctx.cli, &site, *channel)
            }
            Commands::Reconcile { channel } => {
                let site = ctx.discover_or_open_site()?;
                commands::reconcile::execute(ctx.cli, &site, *channel)
            }
        };
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
