use crate::domain::location::LocationGroup;
use crate::domain::search::{PropertySearch, SortKey};
use crate::domain::tier::InvestmentTier;
use maud::{html, Markup};

pub const PROPERTY_TYPES: [&str; 6] = ["Apartment", "Penthouse", "Townhouse", "Villa", "Finca", "Plot"];

pub const FEATURES: [&str; 8] = [
    "Pool",
    "Sea views",
    "Terrace",
    "Garden",
    "Golf views",
    "Air conditioning",
    "Gated community",
    "Staff quarters",
];

fn number_input(name: &str, label: &str, value: Option<i64>) -> Markup {
    html! {
        label {
            (label)
            input type="number" name=(name) min="0" value=[value];
        }
    }
}

/// GET form driving `/investments`. Every field mirrors a query parameter.
pub fn investment_filters(search: &PropertySearch, locations: &[LocationGroup]) -> Markup {
    let selected_location = search.location.as_deref().unwrap_or("");
    let selected_type = search.property_type.as_deref().unwrap_or("");
    let selected_tier = search.investment_tier.as_deref().unwrap_or("");

    html! {
        form class="filters" method="get" action="/investments" {
            label {
                "Location"
                select name="location" {
                    option value="" { "Anywhere" }
                    @for group in locations {
                        option value=(group.parent.name) selected[selected_location == group.parent.name] { (group.parent.name) }
                        @for child in &group.children {
                            option value=(child.name) selected[selected_location == child.name] { "— " (child.name) }
                        }
                    }
                }
            }
            label {
                "Property type"
                select name="propertyType" {
                    option value="" { "Any" }
                    @for t in PROPERTY_TYPES {
                        option value=(t) selected[selected_type == t] { (t) }
                    }
                }
            }
            (number_input("minPrice", "Min price", search.min_price))
            (number_input("maxPrice", "Max price", search.max_price))
            (number_input("bedrooms", "Bedrooms", search.min_bedrooms))
            (number_input("bathrooms", "Bathrooms", search.min_bathrooms))
            (number_input("minArea", "Min area (m²)", search.min_area))
            (number_input("maxArea", "Max area (m²)", search.max_area))
            (number_input("minPlot", "Min plot (m²)", search.min_plot))
            (number_input("maxPlot", "Max plot (m²)", search.max_plot))
            label {
                "Investment tier"
                select name="investmentTier" {
                    option value="" { "All tiers" }
                    @for tier in InvestmentTier::ALL {
                        option value=(tier.name()) selected[selected_tier.eq_ignore_ascii_case(tier.name())] { (tier.name()) }
                    }
                }
            }
            fieldset {
                legend { "Features" }
                @for f in FEATURES {
                    label class="checkbox" {
                        input type="checkbox" name="features" value=(f)
                            checked[search.features.iter().any(|s| s.eq_ignore_ascii_case(f))];
                        (f)
                    }
                }
            }
            label {
                "Sort by"
                select name="sortBy" {
                    @for key in SortKey::ALL {
                        option value=(key.param()) selected[search.sort == key] { (key.label()) }
                    }
                }
            }
            button type="submit" class="primary" { "Apply filters" }
            a href="/investments" class="button" { "Reset" }
        }
    }
}
