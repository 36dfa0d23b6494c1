//! `blogline channel` commands

use serde_json::json;

use crate::cli::{ChannelCommands, Cli};
use crate::commands::format::{output_by_format_result, print_json};
use blogline_core::content::{Channel, Content, ContentKind};
use blogline_core::display::block_access;
use blogline_core::error::Result;
use blogline_core::site::Site;

pub fn execute(cli: &Cli, site: &Site, command: &ChannelCommands) -> Result<()> {
    match command {
        ChannelCommands::Create { title, language } => {
            create(cli, site, title, language.as_deref())
        }
        ChannelCommands::List => list(cli, site),
        ChannelCommands::Show { id } => {
            let channel = site.require_channel(*id)?;
            show(cli, site, channel)
        }
    }
}

fn create(cli: &Cli, site: &Site, title: &str, language: Option<&str>) -> Result<()> {
    let channel = site.create_channel(title, language)?;

    output_by_format_result!(cli.format,
        json => print_json(&channel),
        human => {
            if cli.quiet {
                println!("{}", channel.id);
            } else {
                println!("Created channel {}: {}", channel.id, channel.title);
            }
        }
    )
}

fn list(cli: &Cli, site: &Site) -> Result<()> {
    let channels = site.list_channels()?;

    output_by_format_result!(cli.format,
        json => {
            let output: Vec<_> = channels
                .iter()
                .map(|c| {
                    json!({
                        "id": c.id,
                        "title": c.title,
                        "language": c.language,
                        "status": c.status,
                        "children": c.child_refs.len(),
                    })
                })
                .collect();
            print_json(&output)
        },
        human => {
            if channels.is_empty() && !cli.quiet {
                println!("No channels");
            }
            for channel in &channels {
                println!(
                    "{}  {} [{}] ({} posts)",
                    channel.id,
                    channel.title,
                    channel.language,
                    channel.child_refs.len()
                );
            }
        }
    )
}

fn show(cli: &Cli, site: &Site, channel: Channel) -> Result<()> {
    let access = block_access(site.db(), &Content::Channel(channel.clone()))?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "channel": channel,
            "shows_page_header": ContentKind::Channel.shows_page_header(),
            "blocks_visible": access,
        })),
        human => {
            println!("{}: {}", channel.id, channel.title);
            println!("  language: {}", channel.language);
            println!("  status: {}", channel.status);
            if channel.child_refs.is_empty() {
                println!("  children: (none)");
            } else {
                println!("  children:");
                for child in &channel.child_refs {
                    let pin = if child.pinned { " (pinned)" } else { "" };
                    println!("    - {}{}", child.target, pin);
                }
            }
        }
    )
}
