use crate::domain::insight::{format_growth, format_percent, MarketInsight};
use crate::query::url_encode;
use maud::{html, Markup};

/// What the market card needs: the place it describes and its stored
/// figures, if there are any.
#[derive(Debug, Clone)]
pub struct InsightsVm {
    pub location_name: String,
    pub location_slug: String,
    pub insight: Option<MarketInsight>,
}

fn figure(label: &str, value: &str, strong: Option<bool>, fill: u8) -> Markup {
    html! {
        div class="insight-figure" {
            div class="insight-row" {
                span class="muted" { (label) }
                span class="insight-value" {
                    (value)
                    @match strong {
                        Some(true) => { span class="trend up" { "↑" } }
                        Some(false) => { span class="trend down" { "↓" } }
                        None => {}
                    }
                }
            }
            div class="meter" {
                div class="meter-fill" style=(format!("width: {fill}%")) {}
            }
        }
    }
}

/// Price, yield, growth and demand for a location. Without stored figures
/// the card shows regional defaults and says so.
pub fn market_insights_card(vm: &InsightsVm) -> Markup {
    let fallback = MarketInsight::default();
    let data = vm.insight.as_ref().unwrap_or(&fallback);

    html! {
        section class="card market-insights" {
            h2 { "Market Insights: " (vm.location_name) }
            @if vm.insight.is_none() {
                p class="muted indicative" { "Indicative regional figures. Local data is being prepared." }
            }
            (figure("Average price (per m²)", &data.price_per_sqm_label(), None, 75))
            (figure("Rental yield", &format_percent(data.rental_yield()), Some(data.yield_is_strong()), data.yield_percentage()))
            (figure("Capital growth (5yr)", &format_growth(data.capital_growth()), Some(data.growth_is_strong()), data.growth_percentage()))
            (figure("Demand level", &data.demand_label(), None, data.demand_percentage()))

            @if let Some(note) = &data.note {
                blockquote class="insight-note" { (note) }
            }
            @if let Some(updated) = data.updated_on() {
                p class="muted insight-updated" { "Updated: " (updated) }
            }
            a href=(format!("/blog?locationSlug={}", url_encode(&vm.location_slug))) class="button" {
                "View Market Reports"
            }
        }
    }
}
