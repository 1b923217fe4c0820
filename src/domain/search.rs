// src/domain/search.rs

//! Composition of the listing search into a single parameterized read.
//!
//! Options are turned into a [`QueryPlan`]: a list of independent filters
//! plus ordering and paging. The plan is pure data so it can be inspected in
//! tests; [`QueryPlan::to_sql`] renders it for SQLite.

use crate::domain::tier::{InvestmentTier, SQL_TRIM_CHARS};
use rusqlite::types::Value as SqlValue;

pub const ACTIVE_STATUS: &str = "Active";
pub const DEFAULT_LIMIT: i64 = 10;

/// Filters accepted by the listings search. Every field is optional; an
/// absent bound leaves that side unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySearch {
    /// Substring of city or province.
    pub location: Option<String>,
    /// Substring of title or description.
    pub keyword: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_bedrooms: Option<i64>,
    pub min_bathrooms: Option<i64>,
    pub min_area: Option<i64>,
    pub max_area: Option<i64>,
    pub min_plot: Option<i64>,
    pub max_plot: Option<i64>,
    /// Each entry must appear in the stored features text.
    pub features: Vec<String>,
    pub transaction_type: Option<String>,
    pub development_type: Option<String>,
    pub availability: Option<String>,
    pub investment_tier: Option<String>,
    pub featured_only: bool,
    pub sort: SortKey,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    PriceDesc,
    PriceAsc,
    Newest,
    SizeDesc,
    BedroomsDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::PriceDesc,
        SortKey::PriceAsc,
        SortKey::Newest,
        SortKey::SizeDesc,
        SortKey::BedroomsDesc,
    ];

    /// Unknown keys sort by price, highest first.
    pub fn from_param(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.param() == key.trim())
            .unwrap_or_default()
    }

    pub fn param(self) -> &'static str {
        match self {
            SortKey::PriceDesc => "price-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::Newest => "newest",
            SortKey::SizeDesc => "size-desc",
            SortKey::BedroomsDesc => "bedrooms-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::PriceDesc => "Price: high to low",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::Newest => "Newest",
            SortKey::SizeDesc => "Largest",
            SortKey::BedroomsDesc => "Most bedrooms",
        }
    }

    fn order_by(self) -> &'static str {
        match self {
            SortKey::PriceDesc => "price DESC",
            SortKey::PriceAsc => "price ASC",
            SortKey::Newest => "created_at DESC",
            SortKey::SizeDesc => "area_sqm DESC",
            SortKey::BedroomsDesc => "bedrooms DESC",
        }
    }
}

/// One constraint of the plan. Columns are fixed identifiers, never user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(&'static str, SqlValue),
    AtLeast(&'static str, i64),
    AtMost(&'static str, i64),
    /// Case-insensitive substring match on any of the columns.
    Contains(&'static [&'static str], String),
    /// Listings whose displayed tier is this one: stored under that name,
    /// or carrying no recognised tier and priced inside the band.
    Tier(InvestmentTier),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub filters: Vec<Filter>,
    pub sort: SortKey,
    pub limit: i64,
    pub offset: i64,
}

impl PropertySearch {
    pub fn plan(&self) -> QueryPlan {
        let mut filters = Vec::new();

        if let Some(loc) = non_blank(&self.location) {
            filters.push(Filter::Contains(&["city", "province"], loc));
        }
        if let Some(kw) = non_blank(&self.keyword) {
            filters.push(Filter::Contains(&["title", "description"], kw));
        }
        if let Some(t) = non_blank(&self.property_type) {
            filters.push(Filter::Eq("property_type", SqlValue::Text(t)));
        }

        let bounds = [
            ("price", self.min_price, self.max_price),
            ("bedrooms", self.min_bedrooms, None),
            ("bathrooms", self.min_bathrooms, None),
            ("area_sqm", self.min_area, self.max_area),
            ("plot_sqm", self.min_plot, self.max_plot),
        ];
        for (column, min, max) in bounds {
            if let Some(v) = min {
                filters.push(Filter::AtLeast(column, v));
            }
            if let Some(v) = max {
                filters.push(Filter::AtMost(column, v));
            }
        }

        for feature in self.features.iter().map(|f| f.trim()).filter(|f| !f.is_empty()) {
            filters.push(Filter::Contains(&["features"], feature.to_string()));
        }

        if self.featured_only {
            filters.push(Filter::Eq("is_featured", SqlValue::Integer(1)));
        }
        if let Some(tier) = non_blank(&self.investment_tier) {
            filters.push(match InvestmentTier::parse(&tier) {
                Some(known) => Filter::Tier(known),
                None => Filter::Eq("investment_tier", SqlValue::Text(tier)),
            });
        }
        if let Some(t) = non_blank(&self.transaction_type) {
            filters.push(Filter::Eq("transaction_type", SqlValue::Text(t)));
        }
        if let Some(t) = non_blank(&self.development_type) {
            filters.push(Filter::Eq("development_type", SqlValue::Text(t)));
        }
        if let Some(a) = non_blank(&self.availability) {
            filters.push(Filter::Eq("availability_status", SqlValue::Text(a)));
        }

        QueryPlan {
            filters,
            sort: self.sort,
            limit: self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT),
            offset: self.offset.filter(|o| *o >= 0).unwrap_or(0),
        }
    }
}

fn non_blank(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `%` and `_` in user text match literally.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl QueryPlan {
    /// Renders the plan against `properties`, always restricted to active listings.
    pub fn to_sql(&self, select: &str) -> (String, Vec<SqlValue>) {
        let mut clauses = vec!["listing_status = ?".to_string()];
        let mut params = vec![SqlValue::Text(ACTIVE_STATUS.to_string())];

        for filter in &self.filters {
            match filter {
                Filter::Eq(col, v) => {
                    clauses.push(format!("{col} = ?"));
                    params.push(v.clone());
                }
                Filter::AtLeast(col, v) => {
                    clauses.push(format!("{col} >= ?"));
                    params.push(SqlValue::Integer(*v));
                }
                Filter::AtMost(col, v) => {
                    clauses.push(format!("{col} <= ?"));
                    params.push(SqlValue::Integer(*v));
                }
                Filter::Contains(cols, needle) => {
                    let pattern = like_pattern(needle);
                    let any = cols
                        .iter()
                        .map(|c| format!("casefold({c}) LIKE ? ESCAPE '\\'"))
                        .collect::<Vec<_>>()
                        .join(" OR ");
                    clauses.push(format!("({any})"));
                    params.extend(cols.iter().map(|_| SqlValue::Text(pattern.clone())));
                }
                Filter::Tier(tier) => {
                    let known = InvestmentTier::ALL
                        .iter()
                        .map(|_| "?")
                        .collect::<Vec<_>>()
                        .join(", ");
                    let mut derived = vec![format!(
                        "coalesce(lower(trim(investment_tier, {SQL_TRIM_CHARS})), '') NOT IN ({known})"
                    )];
                    params.push(SqlValue::Text(tier.name().to_lowercase()));
                    params.extend(
                        InvestmentTier::ALL
                            .iter()
                            .map(|t| SqlValue::Text(t.name().to_lowercase())),
                    );
                    let (lower, upper) = tier.price_bounds();
                    if let Some(lo) = lower {
                        derived.push("price >= ?".to_string());
                        params.push(SqlValue::Integer(lo));
                    }
                    if let Some(hi) = upper {
                        derived.push("price <= ?".to_string());
                        params.push(SqlValue::Integer(hi));
                    }
                    clauses.push(format!(
                        "(lower(trim(investment_tier, {SQL_TRIM_CHARS})) = ? OR ({}))",
                        derived.join(" AND ")
                    ));
                }
            }
        }

        let sql = format!(
            "SELECT {select} FROM properties WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
            clauses.join(" AND "),
            self.sort.order_by()
        );
        params.push(SqlValue::Integer(self.limit));
        params.push(SqlValue::Integer(self.offset));
        (sql, params)
    }
}
