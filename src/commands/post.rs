//! `blogline post` commands
//!
//! Every write goes through the site's save hook, so channel child lists are
//! updated in the same command.

use serde_json::json;

use crate::cli::post::PostCreateArgs;
use crate::cli::{Cli, PostCommands};
use crate::commands::format::{output_by_format_result, print_json};
use blogline_core::content::{ContentId, ContentKind, PostDraft, PublishStatus};
use blogline_core::error::Result;
use blogline_core::site::{PostDeletion, PostSave, Site};

pub fn execute(cli: &Cli, site: &Site, command: &PostCommands) -> Result<()> {
    match command {
        PostCommands::Create(args) => create(cli, site, args),
        PostCommands::Move {
            id,
            channel,
            detach,
        } => {
            let target = if *detach { None } else { *channel };
            let saved = site.set_post_channel(*id, target)?;
            print_save(cli, "Moved", &saved)
        }
        PostCommands::Publish { id } => {
            let saved = site.set_post_status(*id, PublishStatus::Published)?;
            print_save(cli, "Published", &saved)
        }
        PostCommands::Unpublish { id } => {
            let saved = site.set_post_status(*id, PublishStatus::Unpublished)?;
            print_save(cli, "Unpublished", &saved)
        }
        PostCommands::Delete { id } => {
            let deletion = site.delete_post(*id)?;
            print_deletion(cli, &deletion)
        }
        PostCommands::Show { id } => show(cli, site, *id),
    }
}

fn create(cli: &Cli, site: &Site, args: &PostCreateArgs) -> Result<()> {
    let channel = match args.channel {
        Some(id) => Some(site.require_channel(id)?),
        None => site.default_channel_for_new_post()?,
    };

    let language = args
        .language
        .clone()
        .unwrap_or_else(|| site.config().default_language.clone());
    let mut draft = PostDraft::new(args.title.clone(), language);
    draft.parent_channel = channel.map(|c| c.id);
    if let Some(date) = args.date {
        draft.publish_date = date;
    }
    if let Some(alias) = &args.alias {
        if !alias.starts_with('/') {
            blogline_core::bail_usage!(format!("url alias must start with '/': {}", alias));
        }
        draft.url_alias = Some(alias.clone());
    }
    if args.unpublished {
        draft.status = PublishStatus::Unpublished;
    }

    let saved = site.create_post(draft)?;
    print_save(cli, "Created", &saved)
}

fn print_save(cli: &Cli, verb: &str, saved: &PostSave) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "post": saved.post,
            "url": saved.post.url(),
            "written": saved.written,
            "cache_tags": saved.cache_tags,
        })),
        human => {
            if cli.quiet {
                println!("{}", saved.post.id);
            } else {
                println!("{} post {}: {}", verb, saved.post.id, saved.post.title);
                for channel in &saved.written {
                    println!("  updated channel {}", channel);
                }
            }
        }
    )
}

fn print_deletion(cli: &Cli, deletion: &PostDeletion) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(deletion),
        human => {
            if !cli.quiet {
                println!("Deleted post {}: {}", deletion.post.id, deletion.post.title);
                if let Some(sweep) = &deletion.parent_sweep {
                    println!("  updated channel {}", sweep.channel);
                }
            }
        }
    )
}

fn show(cli: &Cli, site: &Site, id: ContentId) -> Result<()> {
    let post = site.require_post(id)?;
    let channel = site.navigator().parent_channel(&post)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "post": post,
            "url": post.url(),
            "channel_title": channel.as_ref().map(|c| c.title.as_str()),
            "shows_page_header": ContentKind::Post.shows_page_header(),
        })),
        human => {
            println!("{}: {}", post.id, post.title);
            match (&post.parent_channel, &channel) {
                (Some(_), Some(channel)) => {
                    println!("  channel: {} ({})", channel.id, channel.title)
                }
                (Some(missing), None) => println!("  channel: {} (missing)", missing),
                (None, _) => println!("  channel: (none)"),
            }
            println!("  published: {}", post.publish_date);
            println!("  created: {}", post.created.to_rfc3339());
            println!("  language: {}", post.language);
            println!("  status: {}", post.status);
            println!("  url: {}", post.url());
        }
    )
}
