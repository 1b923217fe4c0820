// src/domain/property.rs

use crate::domain::images::{pick_from, ImageCategory, ImagePick};
use crate::domain::tier::InvestmentTier;
use chrono::NaiveDateTime;

/// A listing as read from the `properties` table, with every loosely encoded
/// column already normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub custom_id: Option<String>,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub currency: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub area_sqm: Option<i64>,
    pub plot_sqm: Option<i64>,
    pub property_type: String,
    pub city: String,
    pub province: String,
    pub features: Vec<String>,
    /// Hero image candidates first, then the gallery.
    pub images: Vec<String>,
    pub tier: InvestmentTier,
    pub listing_status: String,
    pub transaction_type: Option<String>,
    pub development_type: Option<String>,
    pub availability_status: Option<String>,
    pub is_featured: bool,
    pub investment_note: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Property {
    /// "City, Province" without dangling separators when one side is blank.
    pub fn location_label(&self) -> String {
        [self.city.trim(), self.province.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn cover_image(&self, pick: ImagePick) -> String {
        pick_from(&self.images, ImageCategory::Property, pick, &self.id)
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price, &self.currency)
    }

    pub fn display_type(&self) -> &str {
        if self.property_type.trim().is_empty() {
            "Property"
        } else {
            &self.property_type
        }
    }
}

/// Joins hero and gallery candidates, dropping repeats.
pub fn merge_images(hero: Vec<String>, gallery: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(hero.len() + gallery.len());
    for url in hero.into_iter().chain(gallery) {
        if !out.contains(&url) {
            out.push(url);
        }
    }
    out
}

/// Formats a whole-unit price with a currency symbol and thousands separators.
pub fn format_price(amount: i64, currency: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };

    match currency.trim().to_ascii_uppercase().as_str() {
        "" | "EUR" => format!("{sign}€{grouped}"),
        "USD" => format!("{sign}${grouped}"),
        "GBP" => format!("{sign}£{grouped}"),
        other => format!("{sign}{other} {grouped}"),
    }
}
