// src/domain/insight.rs

use crate::domain::property::format_price;
use chrono::NaiveDateTime;

pub const DEFAULT_PRICE_PER_SQM: f64 = 6500.0;
pub const DEFAULT_RENTAL_YIELD: f64 = 5.2;
pub const DEFAULT_CAPITAL_GROWTH: f64 = 28.0;
pub const DEFAULT_CURRENCY: &str = "EUR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DemandLevel {
    pub fn parse(level: &str) -> Option<Self> {
        let words: Vec<String> = level
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        match words.join(" ").as_str() {
            "low" => Some(DemandLevel::Low),
            "medium" => Some(DemandLevel::Medium),
            "high" => Some(DemandLevel::High),
            "very high" => Some(DemandLevel::VeryHigh),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DemandLevel::Low => "Low",
            DemandLevel::Medium => "Medium",
            DemandLevel::High => "High",
            DemandLevel::VeryHigh => "Very High",
        }
    }

    /// Fill of the demand meter, in percent.
    pub fn percentage(self) -> u8 {
        match self {
            DemandLevel::Low => 25,
            DemandLevel::Medium => 50,
            DemandLevel::High => 75,
            DemandLevel::VeryHigh => 95,
        }
    }
}

/// Headline market figures for one location. Every figure is optional;
/// the accessors substitute regional defaults for missing ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketInsight {
    pub location_id: String,
    pub average_price_per_sqm: Option<f64>,
    pub rental_yield: Option<f64>,
    pub capital_growth_5yr: Option<f64>,
    pub demand_level: Option<String>,
    pub currency: Option<String>,
    pub note: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

impl MarketInsight {
    pub fn price_per_sqm_label(&self) -> String {
        let price = self.average_price_per_sqm.unwrap_or(DEFAULT_PRICE_PER_SQM);
        let currency = self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
        format!("{}/m²", format_price(price.round() as i64, currency))
    }

    pub fn rental_yield(&self) -> f64 {
        self.rental_yield.unwrap_or(DEFAULT_RENTAL_YIELD)
    }

    pub fn capital_growth(&self) -> f64 {
        self.capital_growth_5yr.unwrap_or(DEFAULT_CAPITAL_GROWTH)
    }

    /// Unrecognised levels are shown as stored but meter as High.
    pub fn demand_label(&self) -> String {
        match self.demand_level.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            Some(level) => DemandLevel::parse(level)
                .map(|d| d.label().to_string())
                .unwrap_or_else(|| level.to_string()),
            None => DemandLevel::High.label().to_string(),
        }
    }

    pub fn demand_percentage(&self) -> u8 {
        self.demand_level
            .as_deref()
            .and_then(DemandLevel::parse)
            .unwrap_or(DemandLevel::High)
            .percentage()
    }

    /// Meter fill for the yield, where 10% fills the bar.
    pub fn yield_percentage(&self) -> u8 {
        meter(self.rental_yield(), 10.0)
    }

    /// Meter fill for five-year growth, where 50% fills the bar.
    pub fn growth_percentage(&self) -> u8 {
        meter(self.capital_growth(), 50.0)
    }

    pub fn yield_is_strong(&self) -> bool {
        self.rental_yield() > 4.5
    }

    pub fn growth_is_strong(&self) -> bool {
        self.capital_growth() > 20.0
    }

    pub fn updated_on(&self) -> Option<String> {
        self.updated_at.map(|d| d.format("%b %Y").to_string())
    }
}

fn meter(value: f64, full: f64) -> u8 {
    (value / full * 100.0).clamp(0.0, 100.0).round() as u8
}

/// `5.2` → `"5.2%"`, `28.0` → `"28%"`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Growth carries an explicit sign.
pub fn format_growth(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_percent(value))
    } else {
        format_percent(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demand_levels_map_to_meter_fill() {
        assert_eq!(DemandLevel::Low.percentage(), 25);
        assert_eq!(DemandLevel::Medium.percentage(), 50);
        assert_eq!(DemandLevel::High.percentage(), 75);
        assert_eq!(DemandLevel::VeryHigh.percentage(), 95);
    }

    #[test]
    fn stored_demand_text_is_parsed_loosely() {
        assert_eq!(DemandLevel::parse("very_high"), Some(DemandLevel::VeryHigh));
        assert_eq!(DemandLevel::parse(" Very  High "), Some(DemandLevel::VeryHigh));
        assert_eq!(DemandLevel::parse("MEDIUM"), Some(DemandLevel::Medium));
        assert_eq!(DemandLevel::parse("booming"), None);
    }

    #[test]
    fn unknown_or_missing_demand_meters_as_high() {
        let mut insight = MarketInsight {
            demand_level: Some("booming".into()),
            ..Default::default()
        };
        assert_eq!(insight.demand_label(), "booming");
        assert_eq!(insight.demand_percentage(), 75);

        insight.demand_level = None;
        assert_eq!(insight.demand_label(), "High");
        assert_eq!(insight.demand_percentage(), 75);
    }

    #[test]
    fn missing_figures_use_regional_defaults() {
        let insight = MarketInsight::default();
        assert_eq!(insight.price_per_sqm_label(), "€6,500/m²");
        assert_eq!(format_percent(insight.rental_yield()), "5.2%");
        assert_eq!(format_growth(insight.capital_growth()), "+28%");
        assert_eq!(insight.yield_percentage(), 52);
        assert_eq!(insight.growth_percentage(), 56);
        assert_eq!(insight.updated_on(), None);
    }

    #[test]
    fn meters_are_clamped() {
        let insight = MarketInsight {
            rental_yield: Some(14.0),
            capital_growth_5yr: Some(-3.5),
            currency: Some("GBP".into()),
            average_price_per_sqm: Some(4210.4),
            ..Default::default()
        };
        assert_eq!(insight.yield_percentage(), 100);
        assert_eq!(insight.growth_percentage(), 0);
        assert_eq!(format_growth(insight.capital_growth()), "-3.5%");
        assert!(!insight.growth_is_strong());
        assert_eq!(insight.price_per_sqm_label(), "£4,210/m²");
    }
}
