use crate::db::connection::Database;
use crate::db::rows::{flag, list, text, text_or_empty, timestamp};
use crate::domain::post::BlogPost;
use crate::errors::ServerError;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

const POST_COLUMNS: &str = "id, slug, title, category, excerpt, body, image_urls, tags, \
     location_slug, is_guide, published, reading_time, created_at";

/// Options for blog and guide listings. Newest first.
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub limit: i64,
    pub offset: i64,
    pub category: Option<String>,
    /// Applied after the read, against normalized tags.
    pub tag: Option<String>,
    pub location_slug: Option<String>,
    pub published_only: bool,
    pub guides_only: bool,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            category: None,
            tag: None,
            location_slug: None,
            published_only: true,
            guides_only: false,
        }
    }
}

fn post_from_row(row: &Row) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: text_or_empty(row, "id")?,
        slug: text_or_empty(row, "slug")?,
        title: text_or_empty(row, "title")?,
        category: text(row, "category")?,
        excerpt: text_or_empty(row, "excerpt")?,
        body: text_or_empty(row, "body")?,
        images: list(row, "image_urls")?,
        tags: list(row, "tags")?,
        location_slug: text(row, "location_slug")?,
        is_guide: flag(row, "is_guide")?,
        published: flag(row, "published")?,
        reading_time: text(row, "reading_time")?,
        created_at: timestamp(row, "created_at")?,
    })
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn select_posts(
    db: &Database,
    clauses: &[String],
    values: Vec<SqlValue>,
    page: Option<(i64, i64)>,
) -> Result<Vec<BlogPost>, ServerError> {
    let filter = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };
    let paging = match page {
        Some((limit, offset)) => format!("LIMIT {limit} OFFSET {offset}"),
        None => String::new(),
    };
    let sql = format!("SELECT {POST_COLUMNS} FROM blog_posts {filter} ORDER BY created_at DESC {paging}");

    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), post_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    })
}

pub fn list_posts(db: &Database, query: &PostQuery) -> Result<Vec<BlogPost>, ServerError> {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if query.published_only {
        clauses.push("published = 1".to_string());
    }
    if query.guides_only {
        clauses.push("is_guide = 1".to_string());
    }
    if let Some(category) = non_blank(&query.category) {
        clauses.push("category = ?".to_string());
        values.push(SqlValue::Text(category.to_string()));
    }
    if let Some(slug) = non_blank(&query.location_slug) {
        clauses.push("(location_slug = ? OR instr(casefold(location_slug), casefold(?)) > 0)".to_string());
        values.push(SqlValue::Text(slug.to_string()));
        values.push(SqlValue::Text(slug.to_string()));
    }

    let limit = query.limit.max(0);
    let offset = query.offset.max(0);

    match non_blank(&query.tag) {
        // Tags are filtered in memory, so paging has to wait until afterwards.
        Some(tag) => {
            let all = select_posts(db, &clauses, values, None)?;
            Ok(all
                .into_iter()
                .filter(|p| p.has_tag(tag))
                .skip(offset as usize)
                .take(limit as usize)
                .collect())
        }
        None => select_posts(db, &clauses, values, Some((limit, offset))),
    }
}

pub fn post_by_slug(db: &Database, slug: &str) -> Result<Option<BlogPost>, ServerError> {
    let sql = format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = ?1");
    db.with_conn(|conn| {
        Ok(conn
            .query_row(&sql, params![slug.trim()], post_from_row)
            .optional()?)
    })
}

/// Same location first, then posts sharing the first tag, then the most
/// recent. Never includes `post` itself or the same post twice.
pub fn related_posts(db: &Database, post: &BlogPost, limit: usize) -> Result<Vec<BlogPost>, ServerError> {
    let base = vec!["published = 1".to_string(), "id <> ?".to_string()];
    let mut related: Vec<BlogPost> = Vec::with_capacity(limit);

    let push_new = |related: &mut Vec<BlogPost>, candidates: Vec<BlogPost>| {
        for c in candidates {
            if related.len() >= limit {
                break;
            }
            if !related.iter().any(|r| r.id == c.id) {
                related.push(c);
            }
        }
    };

    if let Some(location) = post.location_slug.as_deref() {
        let mut clauses = base.clone();
        clauses.push("location_slug = ?".to_string());
        let same_place = select_posts(
            db,
            &clauses,
            vec![SqlValue::Text(post.id.clone()), SqlValue::Text(location.to_string())],
            Some((limit as i64, 0)),
        )?;
        push_new(&mut related, same_place);
    }

    if related.len() < limit {
        if let Some(first_tag) = post.tags.first() {
            let pool = select_posts(
                db,
                &base,
                vec![SqlValue::Text(post.id.clone())],
                Some((limit as i64 * 3, 0)),
            )?;
            let sharing = pool.into_iter().filter(|p| p.has_tag(first_tag)).collect();
            push_new(&mut related, sharing);
        }
    }

    if related.len() < limit {
        // Over-fetch so already chosen posts can be skipped.
        let recent = select_posts(
            db,
            &base,
            vec![SqlValue::Text(post.id.clone())],
            Some(((limit * 2) as i64, 0)),
        )?;
        push_new(&mut related, recent);
    }

    Ok(related)
}

/// Distinct categories of published guides, sorted.
pub fn guide_categories(db: &Database) -> Result<Vec<String>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT DISTINCT trim(category) FROM blog_posts
             WHERE published = 1 AND is_guide = 1 AND category IS NOT NULL AND trim(category) <> ''
             ORDER BY 1",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    })
}
