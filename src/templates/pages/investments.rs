use crate::domain::images::{usable_urls, ImageCategory, ImagePick};
use crate::domain::location::LocationGroup;
use crate::domain::post::BlogPost;
use crate::domain::property::Property;
use crate::domain::search::PropertySearch;
use crate::templates::components::{
    card_grid, investment_filters, market_insights_card, pagination, post_card, property_card,
    property_inquiry_form, safe_image, tier_badge, InsightsVm, Pager,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct InvestmentsVm {
    pub search: PropertySearch,
    pub properties: Vec<Property>,
    pub locations: Vec<LocationGroup>,
    pub pager: Pager,
    pub pick: ImagePick,
}

pub fn investments_page(vm: &InvestmentsVm) -> Markup {
    desktop_layout(
        "Investments",
        html! {
            h1 { "Investment properties" }
            div class="listing-layout" {
                aside { (investment_filters(&vm.search, &vm.locations)) }
                section id="results" {
                    p class="muted" { (vm.properties.len()) " properties on this page" }
                    (card_grid(
                        vm.properties.iter().map(|p| property_card(p, vm.pick)).collect(),
                        "No properties match these filters. Try widening your search.",
                    ))
                    (pagination(&vm.pager, vm.properties.len()))
                }
            }
        },
    )
}

pub struct SearchVm {
    pub search: PropertySearch,
    pub properties: Vec<Property>,
    pub pick: ImagePick,
}

pub fn search_page(vm: &SearchVm) -> Markup {
    let keyword = vm.search.keyword.as_deref().unwrap_or("");
    desktop_layout(
        "Search",
        html! {
            h1 { "Search properties" }
            form method="get" action="/search" class="filters inline" {
                input type="search" name="q" value=(keyword) placeholder="Keyword";
                input type="text" name="location" value=(vm.search.location.as_deref().unwrap_or("")) placeholder="Location";
                input type="text" name="propertyType" value=(vm.search.property_type.as_deref().unwrap_or("")) placeholder="Property type";
                input type="number" name="minPrice" min="0" value=[vm.search.min_price] placeholder="Min price";
                input type="number" name="maxPrice" min="0" value=[vm.search.max_price] placeholder="Max price";
                input type="number" name="bedrooms" min="0" value=[vm.search.min_bedrooms] placeholder="Bedrooms";
                button type="submit" class="primary" { "Search" }
            }
            @if !keyword.is_empty() {
                h2 { "Results for “" (keyword) "”" }
            }
            (card_grid(
                vm.properties.iter().map(|p| property_card(p, vm.pick)).collect(),
                "No properties found.",
            ))
        },
    )
}

pub struct PropertyVm {
    pub property: Property,
    pub similar: Vec<Property>,
    pub related_posts: Vec<BlogPost>,
    pub insights: InsightsVm,
    pub pick: ImagePick,
}

pub fn property_page(vm: &PropertyVm) -> Markup {
    let p = &vm.property;
    let gallery: Vec<&str> = usable_urls(&p.images).into_iter().skip(1).collect();

    desktop_layout(
        &p.title,
        html! {
            article class="property" {
                (safe_image(&p.cover_image(ImagePick::First), &p.title, ImageCategory::Property, "hero-image"))
                header {
                    (tier_badge(p.tier))
                    h1 { (p.title) }
                    p class="muted" { (p.location_label()) }
                    p class="price" { (p.formatted_price()) }
                    @if let Some(id) = &p.custom_id {
                        p class="muted" { "Ref. " (id) }
                    }
                }

                dl class="facts" {
                    dt { "Type" } dd { (p.display_type()) }
                    dt { "Bedrooms" } dd { (p.bedrooms) }
                    dt { "Bathrooms" } dd { (p.bathrooms) }
                    @if let Some(area) = p.area_sqm { dt { "Living area" } dd { (area) " m²" } }
                    @if let Some(plot) = p.plot_sqm { dt { "Plot" } dd { (plot) " m²" } }
                    @if let Some(t) = &p.transaction_type { dt { "Transaction" } dd { (t) } }
                    @if let Some(d) = &p.development_type { dt { "Development" } dd { (d) } }
                    @if let Some(a) = &p.availability_status { dt { "Availability" } dd { (a) } }
                    dt { "Investment tier" } dd { (p.tier.name()) " (" (p.tier.range_label()) ")" }
                }

                p { (p.description) }

                @if let Some(note) = &p.investment_note {
                    aside class="investment-note" { strong { "Investment note: " } (note) }
                }

                @if !p.features.is_empty() {
                    h2 { "Features" }
                    ul class="tags" {
                        @for f in &p.features { li class="tag" { (f) } }
                    }
                }

                @if !gallery.is_empty() {
                    h2 { "Gallery" }
                    div class="gallery" {
                        @for url in gallery {
                            (safe_image(url, &p.title, ImageCategory::Property, "gallery-image"))
                        }
                    }
                }

                (market_insights_card(&vm.insights))

                section id="inquire" {
                    h2 { "Interested in this property?" }
                    (property_inquiry_form(&p.id, p.custom_id.as_deref()))
                }
            }

            section id="similar" {
                h2 { "Similar properties" }
                (card_grid(
                    vm.similar.iter().map(|s| property_card(s, vm.pick)).collect(),
                    "No similar properties right now.",
                ))
            }

            @if !vm.related_posts.is_empty() {
                section id="related-posts" {
                    h2 { "About " (p.city) }
                    (card_grid(vm.related_posts.iter().map(|b| post_card(b, vm.pick)).collect(), ""))
                }
            }
        },
    )
}
