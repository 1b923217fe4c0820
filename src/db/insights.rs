use crate::db::connection::Database;
use crate::db::rows::{real, text, text_or_empty, timestamp};
use crate::domain::insight::MarketInsight;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSIGHT_COLUMNS: &str = "location_id, average_price_per_sqm, rental_yield, \
     capital_growth_5yr, demand_level, currency, note, updated_at";

fn insight_from_row(row: &Row) -> rusqlite::Result<MarketInsight> {
    Ok(MarketInsight {
        location_id: text_or_empty(row, "location_id")?,
        average_price_per_sqm: real(row, "average_price_per_sqm")?,
        rental_yield: real(row, "rental_yield")?,
        capital_growth_5yr: real(row, "capital_growth_5yr")?,
        demand_level: text(row, "demand_level")?,
        currency: text(row, "currency")?,
        note: text(row, "note")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

fn insight_by_location_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<MarketInsight>> {
    conn.query_row(
        &format!("SELECT {INSIGHT_COLUMNS} FROM market_insights WHERE location_id = ?1"),
        params![id],
        insight_from_row,
    )
    .optional()
}

/// Figures for a location, looked up by id first. Without an id, or when
/// the id has no row, the location is resolved by name ignoring case.
pub fn insights_for_location(
    db: &Database,
    location_id: Option<&str>,
    location_name: &str,
) -> Result<Option<MarketInsight>, ServerError> {
    db.with_conn(|conn| {
        if let Some(id) = location_id.map(str::trim).filter(|id| !id.is_empty()) {
            if let Some(found) = insight_by_location_id(conn, id)? {
                return Ok(Some(found));
            }
        }

        let name = location_name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let resolved: Option<String> = conn
            .query_row(
                "SELECT id FROM locations WHERE casefold(name) = casefold(?1) LIMIT 1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        match resolved {
            Some(id) => Ok(insight_by_location_id(conn, &id)?),
            None => Ok(None),
        }
    })
}
