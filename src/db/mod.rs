pub mod connection;
pub mod inquiries;
pub mod insights;
pub mod locations;
pub mod partners;
pub mod posts;
pub mod properties;
pub mod rows;

pub use connection::Database;

use crate::errors::ServerError;

/// Downgrades a failed read to an empty result. Pages render "nothing
/// found" instead of an error when the store misbehaves.
pub fn or_empty<T: Default>(operation: &str, result: Result<T, ServerError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(operation, error = %e, "read failed, rendering empty result");
        T::default()
    })
}
