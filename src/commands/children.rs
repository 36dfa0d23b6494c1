//! `blogline children` command - a channel's visible posts in display order

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json};
use blogline_core::content::{Content, ContentId};
use blogline_core::display::ChildListBlock;
use blogline_core::error::Result;
use blogline_core::site::Site;

pub fn execute(cli: &Cli, site: &Site, id: ContentId) -> Result<()> {
    let channel = site.require_channel(id)?;
    let navigator = site.navigator();
    let block = ChildListBlock::build(&navigator, &Content::Channel(channel))?;

    output_by_format_result!(cli.format,
        json => print_json(&block),
        human => {
            if site.config().navigation.show_title {
                println!("{}", block.channel_title);
            }
            if block.items.is_empty() {
                if !cli.quiet {
                    println!("No visible posts");
                }
            } else {
                for (position, item) in block.items.iter().enumerate() {
                    println!("{:>3}. {} {} <{}>", position + 1, item.id, item.title, item.url);
                }
            }
        }
    )
}
