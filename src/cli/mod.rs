//! CLI argument parsing for blogline
//!
//! Supports global flags: --root, --site, --format, --quiet, --verbose

pub mod channel;
pub mod output;
pub mod parse;
pub mod paths;
pub mod post;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use blogline_core::config::NavigationStrategy;
use blogline_core::content::ContentId;
pub use channel::ChannelCommands;
pub use output::OutputFormat;
use parse::{parse_content_id, parse_strategy};
pub use post::PostCommands;

/// Blogline - channel and post maintenance for a blog site
#[derive(Parser, Debug)]
#[command(name = "blogline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the site
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit site directory path
    #[arg(long, global = true)]
    pub site: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init,

    /// Manage channels
    Channel {
        #[command(subcommand)]
        command: ChannelCommands,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },

    /// Show the previous/next links for a post
    Nav {
        /// Post ID
        #[arg(value_parser = parse_content_id)]
        post: ContentId,

        /// Override the configured navigation strategy (by-date, list-order)
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<NavigationStrategy>,
    },

    /// List the visible posts of a channel in display order
    Children {
        /// Channel ID
        #[arg(value_parser = parse_content_id)]
        channel: ContentId,
    },

    /// Re-derive channel child lists from post parent references
    Reconcile {
        /// Only reconcile this channel
        #[arg(long, value_parser = parse_content_id)]
        channel: Option<ContentId>,
    },
}
