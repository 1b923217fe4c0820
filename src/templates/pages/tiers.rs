use crate::domain::tier::InvestmentTier;
use crate::query::url_encode;
use crate::templates::components::tier_badge;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn tiers_page() -> Markup {
    desktop_layout(
        "Investment Tiers",
        html! {
            h1 { "Investment tiers" }
            p { "Every listing is placed in a tier by price so you can compare like with like." }
            table class="tiers" {
                thead {
                    tr { th { "Tier" } th { "Price range" } th { "What to expect" } th {} }
                }
                tbody {
                    @for tier in InvestmentTier::ALL {
                        tr {
                            td { (tier_badge(tier)) }
                            td { (tier.range_label()) }
                            td { (tier.description()) }
                            td {
                                a href=(format!("/investments?investmentTier={}", url_encode(tier.name()))) {
                                    "Browse"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
