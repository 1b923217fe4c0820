use crate::domain::images::{ImageCategory, ImagePick};
use crate::domain::location::Location;
use crate::domain::partner::Partner;
use crate::domain::post::{format_category, BlogPost};
use crate::domain::property::Property;
use crate::domain::tier::InvestmentTier;
use crate::templates::components::image::safe_image;
use maud::{html, Markup};

pub fn tier_badge(tier: InvestmentTier) -> Markup {
    html! {
        span class=(tier.badge_class()) title=(tier.range_label()) { (tier.name()) }
    }
}

pub fn property_card(property: &Property, pick: ImagePick) -> Markup {
    let href = format!("/investments/{}", property.slug);
    html! {
        article class="card property-card" {
            a href=(href) {
                (safe_image(&property.cover_image(pick), &property.title, ImageCategory::Property, "card-image"))
            }
            div class="card-body" {
                (tier_badge(property.tier))
                @if property.is_featured {
                    span class="badge badge-featured" { "Featured" }
                }
                h3 { a href=(href) { (property.title) } }
                p class="muted" { (property.location_label()) }
                p class="price" { (property.formatted_price()) }
                ul class="facts" {
                    li { (property.bedrooms) " bd" }
                    li { (property.bathrooms) " ba" }
                    @if let Some(area) = property.area_sqm {
                        li { (area) " m²" }
                    }
                    li { (property.display_type()) }
                }
            }
        }
    }
}

pub fn location_card(location: &Location, pick: ImagePick) -> Markup {
    let href = format!("/locations/{}", location.slug);
    html! {
        article class="card location-card" {
            a href=(href) {
                (safe_image(&location.cover_image(pick), &location.name, ImageCategory::Location, "card-image"))
            }
            div class="card-body" {
                h3 { a href=(href) { (location.name) } }
                @if let Some(region) = &location.region {
                    p class="muted" { (region) }
                }
                p { (location.description) }
                @if !location.lifestyle_tags.is_empty() {
                    ul class="tags" {
                        @for tag in &location.lifestyle_tags {
                            li class="tag" { (tag) }
                        }
                    }
                }
            }
        }
    }
}

pub fn post_card(post: &BlogPost, pick: ImagePick) -> Markup {
    let href = post.path();
    html! {
        article class="card post-card" {
            a href=(href) {
                (safe_image(&post.cover_image(pick), &post.title, ImageCategory::Blog, "card-image"))
            }
            div class="card-body" {
                @if let Some(category) = &post.category {
                    span class="badge" { (format_category(category)) }
                }
                h3 { a href=(href) { (post.title) } }
                p { (post.excerpt) }
                p class="muted" {
                    @if let Some(date) = post.published_on() { (date) }
                    @if let Some(minutes) = &post.reading_time { " · " (minutes) }
                }
            }
        }
    }
}

pub fn partner_card(partner: &Partner) -> Markup {
    let href = format!("/partners/{}", partner.slug());
    html! {
        article class="card partner-card" {
            (safe_image(&partner.profile_image(), &partner.partner_name, ImageCategory::General, "avatar"))
            div class="card-body" {
                @if let Some(badge) = &partner.badge {
                    span class="badge badge-amber" { (badge) }
                }
                h3 { a href=(href) { (partner.partner_name) } }
                p class="muted" {
                    @if let Some(flag) = &partner.flag_emoji { (flag) " " }
                    (partner.country_name)
                    @if let Some(city) = &partner.city { ", " (city) }
                }
                @if !partner.specialties.is_empty() {
                    ul class="tags" {
                        @for s in &partner.specialties {
                            li class="tag" { (s) }
                        }
                    }
                }
            }
        }
    }
}

/// Grid wrapper with an empty state, used by every listing section.
pub fn card_grid(cards: Vec<Markup>, empty: &str) -> Markup {
    html! {
        @if cards.is_empty() {
            p class="empty" { (empty) }
        } @else {
            div class="grid" {
                @for card in cards { (card) }
            }
        }
    }
}
