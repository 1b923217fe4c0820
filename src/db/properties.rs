use crate::db::connection::Database;
use crate::db::rows::{flag, int, list, text, text_or_empty, timestamp};
use crate::domain::location::Location;
use crate::domain::property::{merge_images, Property};
use crate::domain::search::{PropertySearch, ACTIVE_STATUS};
use crate::domain::tier::InvestmentTier;
use crate::errors::ServerError;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};

const PROPERTY_COLUMNS: &str = "id, custom_id, slug, title, description, price, currency, \
     bedrooms, bathrooms, area_sqm, plot_sqm, property_type, city, province, features, images, \
     hero_image_url, investment_tier, listing_status, transaction_type, development_type, \
     availability_status, is_featured, investment_note, created_at";

fn property_from_row(row: &Row) -> rusqlite::Result<Property> {
    let price = int(row, "price")?.unwrap_or(0);
    let stored_tier = text(row, "investment_tier")?;

    Ok(Property {
        id: text_or_empty(row, "id")?,
        custom_id: text(row, "custom_id")?,
        slug: text_or_empty(row, "slug")?,
        title: text_or_empty(row, "title")?,
        description: text_or_empty(row, "description")?,
        price,
        currency: text(row, "currency")?.unwrap_or_else(|| "EUR".to_string()),
        bedrooms: int(row, "bedrooms")?.unwrap_or(0),
        bathrooms: int(row, "bathrooms")?.unwrap_or(0),
        area_sqm: int(row, "area_sqm")?,
        plot_sqm: int(row, "plot_sqm")?,
        property_type: text_or_empty(row, "property_type")?,
        city: text_or_empty(row, "city")?,
        province: text_or_empty(row, "province")?,
        features: list(row, "features")?,
        images: merge_images(list(row, "hero_image_url")?, list(row, "images")?),
        tier: InvestmentTier::resolve(stored_tier.as_deref(), price),
        listing_status: text(row, "listing_status")?.unwrap_or_else(|| ACTIVE_STATUS.to_string()),
        transaction_type: text(row, "transaction_type")?,
        development_type: text(row, "development_type")?,
        availability_status: text(row, "availability_status")?,
        is_featured: flag(row, "is_featured")?,
        investment_note: text(row, "investment_note")?,
        created_at: timestamp(row, "created_at")?,
    })
}

/// Active listings matching `search`, sorted and paginated in one read.
pub fn list_properties(db: &Database, search: &PropertySearch) -> Result<Vec<Property>, ServerError> {
    let (sql, values) = search.plan().to_sql(PROPERTY_COLUMNS);
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), property_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    })
}

pub fn property_by_slug(db: &Database, slug: &str) -> Result<Option<Property>, ServerError> {
    let sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE slug = ?1");
    db.with_conn(|conn| {
        Ok(conn
            .query_row(&sql, params![slug.trim()], property_from_row)
            .optional()?)
    })
}

/// Other active listings of the same type in the same city.
pub fn similar_properties(
    db: &Database,
    property: &Property,
    limit: i64,
) -> Result<Vec<Property>, ServerError> {
    let sql = format!(
        "SELECT {PROPERTY_COLUMNS} FROM properties
         WHERE listing_status = ?1 AND property_type = ?2 AND city = ?3 AND id <> ?4
         ORDER BY price DESC
         LIMIT ?5"
    );
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![
                ACTIVE_STATUS,
                property.property_type,
                property.city,
                property.id,
                limit
            ],
            property_from_row,
        )?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    })
}

/// Active listings whose city or province mentions the location's name.
pub fn properties_for_location(
    db: &Database,
    location: &Location,
    limit: i64,
) -> Result<Vec<Property>, ServerError> {
    let search = PropertySearch {
        location: Some(location.name.clone()),
        limit: Some(limit),
        ..Default::default()
    };
    list_properties(db, &search)
}
