// src/query.rs

//! Query-string and form-body parsing for the page routes.

use crate::domain::search::{PropertySearch, SortKey};
use astra::Request;
use url::form_urlencoded;

/// Decoded `key=value` pairs in their original order. Keys may repeat.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(raw: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes()).into_owned().collect(),
        }
    }

    pub fn from_request(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or(""))
    }

    /// First non-blank value for `key`, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Whole number, or `None` when absent or unparseable.
    pub fn number(&self, key: &str) -> Option<i64> {
        let raw = self.get(key)?;
        raw.parse::<i64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some("1" | "true" | "on" | "yes"))
    }

    /// Every value of a repeatable key, with comma separated values split.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .flat_map(|(_, v)| v.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Re-encodes every pair except `key`, for building pagination links.
    pub fn without(&self, key: &str) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.pairs.iter().filter(|(k, _)| k != key) {
            out.append_pair(k, v);
        }
        out.finish()
    }

    /// 1-based page number; anything below 1 is the first page.
    pub fn page(&self) -> i64 {
        self.number("page").filter(|p| *p >= 1).unwrap_or(1)
    }
}

/// Percent-encodes a single query value.
pub fn url_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Builds the listing search from the investments and search page filters.
pub fn property_search(params: &QueryParams, per_page: i64) -> PropertySearch {
    PropertySearch {
        location: params.text("location"),
        keyword: params.text("q"),
        property_type: params.text("propertyType"),
        min_price: params.number("minPrice"),
        max_price: params.number("maxPrice"),
        min_bedrooms: params.number("bedrooms"),
        min_bathrooms: params.number("bathrooms"),
        min_area: params.number("minArea"),
        max_area: params.number("maxArea"),
        min_plot: params.number("minPlot"),
        max_plot: params.number("maxPlot"),
        features: params.list("features"),
        transaction_type: params.text("transactionType"),
        development_type: params.text("developmentType"),
        availability: params.text("availability"),
        investment_tier: params.text("investmentTier"),
        featured_only: params.flag("featured"),
        sort: params
            .get("sortBy")
            .map(SortKey::from_param)
            .unwrap_or_default(),
        limit: Some(per_page),
        offset: Some((params.page() - 1).saturating_mul(per_page)),
    }
}
