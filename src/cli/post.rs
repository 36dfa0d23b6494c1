//! Post subcommands

use super::parse::{parse_content_id, parse_date};
use blogline_core::content::ContentId;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Post subcommands
#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Create a post
    Create(PostCreateArgs),

    /// Move a post to another channel
    Move {
        /// Post ID
        #[arg(value_parser = parse_content_id)]
        id: ContentId,

        /// Target channel ID
        #[arg(
            long,
            value_parser = parse_content_id,
            conflicts_with = "detach",
            required_unless_present = "detach"
        )]
        channel: Option<ContentId>,

        /// Remove the post from its channel
        #[arg(long)]
        detach: bool,
    },

    /// Publish a post
    Publish {
        /// Post ID
        #[arg(value_parser = parse_content_id)]
        id: ContentId,
    },

    /// Unpublish a post
    Unpublish {
        /// Post ID
        #[arg(value_parser = parse_content_id)]
        id: ContentId,
    },

    /// Delete a post
    Delete {
        /// Post ID
        #[arg(value_parser = parse_content_id)]
        id: ContentId,
    },

    /// Show a post
    Show {
        /// Post ID
        #[arg(value_parser = parse_content_id)]
        id: ContentId,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PostCreateArgs {
    /// Post title
    pub title: String,

    /// Parent channel ID (the only channel is used when omitted)
    #[arg(long, short, value_parser = parse_content_id)]
    pub channel: Option<ContentId>,

    /// Publish date (YYYY-MM-DD, defaults to today)
    #[arg(long, short, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Language code (defaults to the site's default_language)
    #[arg(long, short)]
    pub language: Option<String>,

    /// URL alias (defaults to /blog/<slug of title>)
    #[arg(long)]
    pub alias: Option<String>,

    /// Create the post unpublished
    #[arg(long)]
    pub unpublished: bool,
}
