//! Channel subcommands

use super::parse::parse_content_id;
use blogline_core::content::ContentId;
use clap::Subcommand;

/// Channel subcommands
#[derive(Subcommand, Debug)]
pub enum ChannelCommands {
    /// Create a channel
    Create {
        /// Channel title
        title: String,

        /// Language code (defaults to the site's default_language)
        #[arg(long, short)]
        language: Option<String>,
    },

    /// List channels
    List,

    /// Show a channel and its child references
    Show {
        /// Channel ID
        #[arg(value_parser = parse_content_id)]
        id: ContentId,
    },
}
