use crate::domain::images::{ImageCategory, ImagePick};
use crate::domain::location::{Location, LocationGroup};
use crate::domain::post::BlogPost;
use crate::domain::property::Property;
use crate::query::url_encode;
use crate::templates::components::{
    card_grid, location_card, market_insights_card, post_card, property_card, safe_image, InsightsVm,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn locations_page(groups: &[LocationGroup], pick: ImagePick) -> Markup {
    desktop_layout(
        "Locations",
        html! {
            h1 { "Locations" }
            p { "Regions and towns where we source investment opportunities." }
            @if groups.is_empty() {
                p class="empty" { "Location guides are coming soon." }
            }
            @for group in groups {
                section class="location-group" {
                    (location_card(&group.parent, pick))
                    @if !group.children.is_empty() {
                        h3 { "Areas in " (group.parent.name) }
                        (card_grid(group.children.iter().map(|c| location_card(c, pick)).collect(), ""))
                    }
                }
            }
        },
    )
}

pub struct LocationVm {
    pub location: Location,
    pub children: Vec<Location>,
    pub properties: Vec<Property>,
    pub posts: Vec<BlogPost>,
    pub insights: InsightsVm,
    pub pick: ImagePick,
}

pub fn location_page(vm: &LocationVm) -> Markup {
    let loc = &vm.location;
    let facts = [
        ("Region", loc.region.as_deref()),
        ("Famous for", loc.famous_for.as_deref()),
        ("Climate", loc.climate.as_deref()),
        ("Population", loc.population.as_deref()),
    ];

    desktop_layout(
        &loc.name,
        html! {
            article class="location" {
                (safe_image(&loc.cover_image(vm.pick), &loc.name, ImageCategory::Location, "hero-image"))
                h1 { (loc.name) }
                p { (loc.description) }

                dl class="facts" {
                    @for (label, value) in facts {
                        @if let Some(v) = value {
                            dt { (label) } dd { (v) }
                        }
                    }
                }

                @if !loc.lifestyle_tags.is_empty() {
                    h2 { "Lifestyle" }
                    ul class="tags" {
                        @for tag in &loc.lifestyle_tags { li class="tag" { (tag) } }
                    }
                }
            }

            (market_insights_card(&vm.insights))

            @if !vm.children.is_empty() {
                section id="areas" {
                    h2 { "Areas in " (loc.name) }
                    (card_grid(vm.children.iter().map(|c| location_card(c, vm.pick)).collect(), ""))
                }
            }

            section id="properties" {
                h2 { "Properties in " (loc.name) }
                (card_grid(
                    vm.properties.iter().map(|p| property_card(p, vm.pick)).collect(),
                    "No listings here yet.",
                ))
                a href=(format!("/investments?location={}", url_encode(&loc.name))) class="button" { "See all" }
            }

            @if !vm.posts.is_empty() {
                section id="related-posts" {
                    h2 { "Reading about " (loc.name) }
                    (card_grid(vm.posts.iter().map(|p| post_card(p, vm.pick)).collect(), ""))
                }
            }
        },
    )
}

/// Shown for slugs with no location yet, including when the lookup failed.
pub fn location_coming_soon() -> Markup {
    desktop_layout(
        "Location Coming Soon",
        html! {
            section class="coming-soon" {
                h1 { "Location Coming Soon" }
                p {
                    "We're currently preparing information about this location. "
                    "Please check back soon or explore our other locations."
                }
                div class="actions" {
                    a href="/locations" class="button primary" { "View All Locations" }
                    a href="/investments" class="button" { "Browse Properties" }
                }
            }
        },
    )
}
