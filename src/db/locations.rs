use crate::db::connection::Database;
use crate::db::rows::{int, list, text, text_or_empty};
use crate::domain::location::Location;
use crate::errors::ServerError;
use rusqlite::{params, OptionalExtension, Row};

const LOCATION_COLUMNS: &str = "id, slug, name, description, region, image_urls, lifestyle_tags, \
     display_priority, parent_id, famous_for, climate, population";

#[derive(Debug, Clone, Copy)]
pub struct LocationQuery {
    pub limit: i64,
    /// Only top-level locations.
    pub parent_only: bool,
    /// When `parent_only` is set, also return the children of those parents.
    pub include_children: bool,
}

impl Default for LocationQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            parent_only: false,
            include_children: false,
        }
    }
}

fn location_from_row(row: &Row) -> rusqlite::Result<Location> {
    Ok(Location {
        id: text_or_empty(row, "id")?,
        slug: text_or_empty(row, "slug")?,
        name: text_or_empty(row, "name")?,
        description: text_or_empty(row, "description")?,
        region: text(row, "region")?,
        parent_id: text(row, "parent_id")?,
        images: list(row, "image_urls")?,
        lifestyle_tags: list(row, "lifestyle_tags")?,
        display_priority: int(row, "display_priority")?.unwrap_or(0),
        famous_for: text(row, "famous_for")?,
        climate: text(row, "climate")?,
        population: text(row, "population")?,
    })
}

/// Locations ordered by display priority, highest first.
pub fn list_locations(db: &Database, query: LocationQuery) -> Result<Vec<Location>, ServerError> {
    let filter = if query.parent_only && !query.include_children {
        "WHERE parent_id IS NULL OR trim(parent_id) = ''"
    } else {
        ""
    };
    let sql = format!(
        "SELECT {LOCATION_COLUMNS} FROM locations {filter}
         ORDER BY display_priority DESC, name ASC
         LIMIT ?1"
    );

    let all = db.with_conn(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![query.limit], location_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    })?;

    if query.parent_only && query.include_children {
        // Keep parents, plus children whose parent made the cut.
        let parent_ids: Vec<String> = all
            .iter()
            .filter(|l| l.is_parent())
            .map(|l| l.id.clone())
            .collect();
        return Ok(all
            .into_iter()
            .filter(|l| match &l.parent_id {
                None => true,
                Some(p) => parent_ids.contains(p),
            })
            .collect());
    }
    Ok(all)
}

/// Exact slug first, then a case-insensitive match.
pub fn location_by_slug(db: &Database, slug: &str) -> Result<Option<Location>, ServerError> {
    let slug = slug.trim();
    db.with_conn(|conn| {
        let exact = conn
            .query_row(
                &format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE slug = ?1"),
                params![slug],
                location_from_row,
            )
            .optional()?;
        if exact.is_some() {
            return Ok(exact);
        }
        Ok(conn
            .query_row(
                &format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE casefold(slug) = casefold(?1) LIMIT 1"),
                params![slug],
                location_from_row,
            )
            .optional()?)
    })
}

pub fn child_locations(db: &Database, parent_id: &str) -> Result<Vec<Location>, ServerError> {
    let sql = format!(
        "SELECT {LOCATION_COLUMNS} FROM locations WHERE parent_id = ?1
         ORDER BY display_priority DESC, name ASC"
    );
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![parent_id], location_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    })
}
