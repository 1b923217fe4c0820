use crate::db::connection::Database;
use crate::db::rows::{flag, text, text_or_empty, timestamp};
use crate::domain::inquiry::{Inquiry, NewInquiry, DEFAULT_SOURCE};
use crate::errors::{InquiryError, ServerError};
use chrono::Utc;
use rusqlite::params;

/// Validates and stores a lead. Nothing is written unless validation passes,
/// and storage failures come back as [`InquiryError::Persistence`].
pub fn create_inquiry(db: &Database, form: NewInquiry) -> Result<Inquiry, InquiryError> {
    let form = form.validate()?;
    let now = Utc::now().naive_utc();
    let source = form.source.clone().unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let stored = db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO inquiries (
                property_id, property_custom_id, name, email, phone, message,
                source, status, reveal, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'new', 0, ?8)
            "#,
            params![
                form.property_id,
                form.property_custom_id,
                form.name,
                form.email,
                form.phone,
                form.message,
                source,
                now,
            ],
        )?;
        let id = conn.last_insert_rowid();

        conn.query_row(
            "SELECT id, name, email, phone, message, property_id, property_custom_id,
                    source, status, reveal, created_at
             FROM inquiries WHERE id = ?1",
            params![id],
            |row| {
                Ok(Inquiry {
                    id: row.get("id")?,
                    name: text_or_empty(row, "name")?,
                    email: text_or_empty(row, "email")?,
                    phone: text(row, "phone")?,
                    message: text_or_empty(row, "message")?,
                    property_id: text(row, "property_id")?,
                    property_custom_id: text(row, "property_custom_id")?,
                    source: text_or_empty(row, "source")?,
                    status: text_or_empty(row, "status")?,
                    reveal: flag(row, "reveal")?,
                    created_at: timestamp(row, "created_at")?.unwrap_or(now),
                })
            },
        )
        .map_err(ServerError::from)
    });

    stored.map_err(|e: ServerError| {
        tracing::error!(error = %e, email = %form.email, "failed to store inquiry");
        InquiryError::Persistence(e.to_string())
    })
}

pub fn count_inquiries(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM inquiries", [], |r| r.get(0))?))
}
