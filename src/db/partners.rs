use crate::db::connection::Database;
use crate::db::rows::{flag, list, text, text_or_empty};
use crate::domain::partner::{partner_slug, Partner};
use crate::errors::ServerError;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

const PARTNER_COLUMNS: &str = "id, partner_name, partner_type, contact_name, country_name, \
     flag_emoji, region, city, email, phone, website_url, profile_image_url, description, \
     specialties, languages_spoken, years_experience, notable_projects, social_links, featured, badge";

#[derive(Debug, Clone)]
pub struct PartnerQuery {
    pub limit: i64,
    pub country: Option<String>,
    pub featured_only: bool,
}

impl Default for PartnerQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            country: None,
            featured_only: false,
        }
    }
}

fn partner_from_row(row: &Row) -> rusqlite::Result<Partner> {
    Ok(Partner {
        id: text_or_empty(row, "id")?,
        partner_name: text_or_empty(row, "partner_name")?,
        partner_type: text(row, "partner_type")?,
        contact_name: text_or_empty(row, "contact_name")?,
        country_name: text_or_empty(row, "country_name")?,
        flag_emoji: text(row, "flag_emoji")?,
        region: text(row, "region")?,
        city: text(row, "city")?,
        email: text(row, "email")?,
        phone: text(row, "phone")?,
        website_url: text(row, "website_url")?,
        profile_image_url: text(row, "profile_image_url")?,
        description: text_or_empty(row, "description")?,
        specialties: list(row, "specialties")?,
        languages_spoken: list(row, "languages_spoken")?,
        notable_projects: list(row, "notable_projects")?,
        social_links: list(row, "social_links")?,
        years_experience: text(row, "years_experience")?,
        featured: flag(row, "featured")?,
        badge: text(row, "badge")?,
    })
}

/// Active partners, featured first then newest.
pub fn list_partners(db: &Database, query: &PartnerQuery) -> Result<Vec<Partner>, ServerError> {
    let mut clauses = vec!["status = 'Active'".to_string()];
    let mut values = Vec::new();

    if let Some(country) = query.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        clauses.push("country_name = ?".to_string());
        values.push(SqlValue::Text(country.to_string()));
    }
    if query.featured_only {
        clauses.push("featured = 1".to_string());
    }
    values.push(SqlValue::Integer(query.limit.max(0)));

    let sql = format!(
        "SELECT {PARTNER_COLUMNS} FROM international_partners
         WHERE {}
         ORDER BY featured DESC, created_at DESC
         LIMIT ?",
        clauses.join(" AND ")
    );

    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), partner_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    })
}

pub fn partner_by_id(db: &Database, id: &str) -> Result<Option<Partner>, ServerError> {
    let sql = format!("SELECT {PARTNER_COLUMNS} FROM international_partners WHERE id = ?1");
    db.with_conn(|conn| {
        Ok(conn
            .query_row(&sql, params![id.trim()], partner_from_row)
            .optional()?)
    })
}

/// Slugs are derived from names, so the lookup scans the active directory.
pub fn partner_by_slug(db: &Database, slug: &str) -> Result<Option<Partner>, ServerError> {
    let wanted = partner_slug(slug);
    let all = list_partners(db, &PartnerQuery::default())?;
    Ok(all.into_iter().find(|p| p.slug() == wanted))
}
