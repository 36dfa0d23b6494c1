//! `blogline nav` command - previous/next links for a post

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{link_label, output_by_format_result, print_json};
use blogline_core::config::NavigationStrategy;
use blogline_core::content::{Content, ContentId};
use blogline_core::display::{block_access, NavigationBlock};
use blogline_core::error::Result;
use blogline_core::site::Site;

pub fn execute(
    cli: &Cli,
    site: &Site,
    id: ContentId,
    strategy: Option<NavigationStrategy>,
) -> Result<()> {
    let content = Content::Post(site.require_post(id)?);

    let mut config = site.config().navigation.clone();
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }

    let access = block_access(site.db(), &content)?;
    let navigator = site.navigator();
    let block = NavigationBlock::build(&navigator, &content, &config)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "post": id,
            "strategy": config.strategy,
            "visible": access,
            "navigation": block,
        })),
        human => {
            if !access {
                if !cli.quiet {
                    println!("Post {} is not in a channel", id);
                }
            } else {
                if block.show_title && !block.channel_title.is_empty() {
                    println!("{}", block.channel_title);
                }
                println!("Previous: {}", link_label(&block.previous_title, &block.previous_url));
                println!("Next: {}", link_label(&block.next_title, &block.next_url));
            }
        }
    )
}
