use rusqlite::types::Value;

use crate::content::{Content, ContentId};
use crate::error::Result;
use crate::map_db_err;
use crate::storage::{ContentQuery, ContentRepository, DateBound, SortDirection, SortField};

use super::content::format_date;

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::PublishDate => "publish_date",
        SortField::Created => "created",
        SortField::Id => "id",
        SortField::Title => "title",
    }
}

/// Translate a query into parameterised SQL
pub(super) fn build_query_sql(query: &ContentQuery) -> (String, Vec<Value>) {
    let mut sql = String::from("SELECT id FROM content WHERE kind = ?");
    let mut values = vec![Value::Text(query.kind.as_str().to_string())];

    if let Some(parent) = query.parent {
        sql.push_str(" AND parent_channel = ?");
        values.push(Value::Integer(parent.get()));
    }

    if let Some(language) = &query.language {
        sql.push_str(" AND language = ?");
        values.push(Value::Text(language.clone()));
    }

    if let Some(status) = query.status {
        sql.push_str(" AND status = ?");
        values.push(Value::Integer(status.as_flag()));
    }

    match query.publish_date {
        Some(DateBound::OnOrAfter(date)) => {
            sql.push_str(" AND publish_date >= ?");
            values.push(Value::Text(format_date(&date)));
        }
        Some(DateBound::OnOrBefore(date)) => {
            sql.push_str(" AND publish_date <= ?");
            values.push(Value::Text(format_date(&date)));
        }
        None => {}
    }

    if !query.sort.is_empty() {
        let order: Vec<String> = query
            .sort
            .iter()
            .map(|(field, direction)| {
                let dir = match direction {
                    SortDirection::Asc => "ASC",
                    SortDirection::Desc => "DESC",
                };
                format!("{} {}", sort_column(*field), dir)
            })
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&order.join(", "));
    }

    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        values.push(Value::Integer(limit as i64));
    }

    (sql, values)
}

impl ContentRepository for super::Database {
    fn query_ids(&self, query: &ContentQuery) -> Result<Vec<ContentId>> {
        let (sql, values) = build_query_sql(query);

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| map_db_err!("prepare content query", e))?;

        let ids = stmt
            .query_map(rusqlite::params_from_iter(values.iter()), |row| {
                row.get::<_, i64>(0)
            })
            .map_err(|e| map_db_err!("execute content query", e))?
            .map(|r| r.map(ContentId::new))
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read content id", e))?;

        Ok(ids)
    }

    fn load(&self, id: ContentId) -> Result<Option<Content>> {
        self.load_content(id)
    }

    fn save(&self, content: &Content) -> Result<()> {
        self.save_content(content)
    }
}
