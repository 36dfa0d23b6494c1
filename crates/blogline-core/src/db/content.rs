use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{params, OptionalExtension};

use crate::content::{
    Channel, ChildRef, ChildRefs, Content, ContentId, ContentKind, Post, PostDraft, PublishStatus,
};
use crate::error::{BloglineError, Result};
use crate::map_db_err;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed-width UTC timestamps so that text ordering matches time ordering
pub(super) fn format_created(created: &DateTime<Utc>) -> String {
    created.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(super) fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_created(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| BloglineError::db_operation("parse created timestamp", e))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| BloglineError::db_operation("parse publish date", e))
}

struct ContentRow {
    id: i64,
    kind: String,
    title: String,
    language: String,
    status: i64,
    created: String,
    publish_date: Option<String>,
    parent_channel: Option<i64>,
    url_alias: Option<String>,
}

impl super::Database {
    /// Store a new channel with an empty child list
    pub fn insert_channel(
        &self,
        title: &str,
        language: &str,
        status: PublishStatus,
    ) -> Result<Channel> {
        self.conn
            .execute(
                "INSERT INTO content (kind, title, language, status, created) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    ContentKind::Channel.as_str(),
                    title,
                    language,
                    status.as_flag(),
                    format_created(&Utc::now()),
                ],
            )
            .map_err(|e| map_db_err!("insert channel", e))?;

        let id = ContentId::new(self.conn.last_insert_rowid());
        tracing::debug!(channel_id = %id, "channel_inserted");

        Ok(Channel {
            id,
            title: title.to_string(),
            language: language.to_string(),
            status,
            child_refs: ChildRefs::new(),
        })
    }

    /// Store a new post. Does not touch any channel's child list.
    pub fn insert_post(&self, draft: PostDraft) -> Result<Post> {
        self.conn
            .execute(
                "INSERT INTO content (kind, title, language, status, created, publish_date, parent_channel, url_alias) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    ContentKind::Post.as_str(),
                    draft.title,
                    draft.language,
                    draft.status.as_flag(),
                    format_created(&draft.created),
                    format_date(&draft.publish_date),
                    draft.parent_channel.map(ContentId::get),
                    draft.url_alias,
                ],
            )
            .map_err(|e| map_db_err!("insert post", e))?;

        let id = ContentId::new(self.conn.last_insert_rowid());
        tracing::debug!(post_id = %id, "post_inserted");

        Ok(draft.into_post(id))
    }

    pub(super) fn load_content(&self, id: ContentId) -> Result<Option<Content>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, kind, title, language, status, created, publish_date, parent_channel, url_alias FROM content WHERE id = ?1",
                params![id.get()],
                |row| {
                    Ok(ContentRow {
                        id: row.get(0)?,
                        kind: row.get(1)?,
                        title: row.get(2)?,
                        language: row.get(3)?,
                        status: row.get(4)?,
                        created: row.get(5)?,
                        publish_date: row.get(6)?,
                        parent_channel: row.get(7)?,
                        url_alias: row.get(8)?,
                    })
                },
            )
            .optional()
            .map_err(|e| map_db_err!("load content", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id = ContentId::new(row.id);
        let content = match row.kind.parse::<ContentKind>()? {
            ContentKind::Channel => Content::Channel(Channel {
                id,
                title: row.title,
                language: row.language,
                status: PublishStatus::from_flag(row.status),
                child_refs: self.load_child_refs(id)?,
            }),
            ContentKind::Post => {
                let publish_date = row.publish_date.ok_or_else(|| {
                    BloglineError::db_operation("load post", format!("post {} has no date", id))
                })?;
                Content::Post(Post {
                    id,
                    title: row.title,
                    parent_channel: row.parent_channel.map(ContentId::new),
                    publish_date: parse_date(&publish_date)?,
                    language: row.language,
                    created: parse_created(&row.created)?,
                    status: PublishStatus::from_flag(row.status),
                    url_alias: row.url_alias,
                })
            }
        };

        Ok(Some(content))
    }

    fn load_child_refs(&self, channel: ContentId) -> Result<ChildRefs> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT target_id, pinned FROM channel_children WHERE channel_id = ?1 ORDER BY position",
            )
            .map_err(|e| map_db_err!("prepare child query", e))?;

        let refs = stmt
            .query_map(params![channel.get()], |row| {
                let target: i64 = row.get(0)?;
                let pinned: i64 = row.get(1)?;
                Ok(ChildRef {
                    target: ContentId::new(target),
                    pinned: pinned != 0,
                })
            })
            .map_err(|e| map_db_err!("query child refs", e))?
            .collect::<rusqlite::Result<ChildRefs>>()
            .map_err(|e| map_db_err!("read child ref", e))?;

        Ok(refs)
    }

    /// Update an existing entity. A channel's child rows are rewritten in order.
    pub(super) fn save_content(&self, content: &Content) -> Result<()> {
        let id = content.id();
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| BloglineError::storage_write(id, e))?;

        let updated = match content {
            Content::Channel(channel) => {
                let updated = tx
                    .execute(
                        "UPDATE content SET title = ?2, language = ?3, status = ?4 WHERE id = ?1 AND kind = 'channel'",
                        params![
                            id.get(),
                            channel.title,
                            channel.language,
                            channel.status.as_flag()
                        ],
                    )
                    .map_err(|e| BloglineError::storage_write(id, e))?;

                tx.execute(
                    "DELETE FROM channel_children WHERE channel_id = ?1",
                    params![id.get()],
                )
                .map_err(|e| BloglineError::storage_write(id, e))?;

                for (position, child) in channel.child_refs.iter().enumerate() {
                    tx.execute(
                        "INSERT INTO channel_children (channel_id, position, target_id, pinned) VALUES (?1, ?2, ?3, ?4)",
                        params![
                            id.get(),
                            position as i64,
                            child.target.get(),
                            child.pinned as i64
                        ],
                    )
                    .map_err(|e| BloglineError::storage_write(id, e))?;
                }
                updated
            }
            Content::Post(post) => tx
                .execute(
                    "UPDATE content SET title = ?2, language = ?3, status = ?4, created = ?5, publish_date = ?6, parent_channel = ?7, url_alias = ?8 WHERE id = ?1 AND kind = 'post'",
                    params![
                        id.get(),
                        post.title,
                        post.language,
                        post.status.as_flag(),
                        format_created(&post.created),
                        format_date(&post.publish_date),
                        post.parent_channel.map(ContentId::get),
                        post.url_alias,
                    ],
                )
                .map_err(|e| BloglineError::storage_write(id, e))?,
        };

        if updated == 0 {
            return Err(BloglineError::storage_write(
                id,
                format!("no stored {} with this id", content.kind()),
            ));
        }

        tx.commit().map_err(|e| BloglineError::storage_write(id, e))?;
        tracing::debug!(content_id = %id, kind = %content.kind(), "content_saved");
        Ok(())
    }

    /// Remove an entity row (and its child rows when it is a channel)
    pub fn delete(&self, id: ContentId) -> Result<bool> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| BloglineError::storage_write(id, e))?;
        tx.execute(
            "DELETE FROM channel_children WHERE channel_id = ?1",
            params![id.get()],
        )
        .map_err(|e| BloglineError::storage_write(id, e))?;
        let removed = tx
            .execute("DELETE FROM content WHERE id = ?1", params![id.get()])
            .map_err(|e| BloglineError::storage_write(id, e))?;
        tx.commit().map_err(|e| BloglineError::storage_write(id, e))?;
        Ok(removed > 0)
    }
}
