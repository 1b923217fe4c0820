use crate::domain::images::{ImageCategory, ImagePick};
use crate::domain::inquiry::NewInquiry;
use crate::domain::post::{format_category, BlogPost};
use crate::query::url_encode;
use crate::templates::components::{
    card_grid, inquiry_form, market_insights_card, pagination, post_card, safe_image, InsightsVm, Pager,
};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

/// Active filters shown above a post listing.
#[derive(Debug, Default)]
pub struct PostFilters {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub location_slug: Option<String>,
}

fn active_filters(base: &str, filters: &PostFilters) -> Markup {
    html! {
        @if filters.category.is_some() || filters.tag.is_some() || filters.location_slug.is_some() {
            p class="active-filters" {
                "Showing "
                @if let Some(c) = &filters.category { span class="badge" { (format_category(c)) } " " }
                @if let Some(t) = &filters.tag { span class="badge" { "#" (t) } " " }
                @if let Some(l) = &filters.location_slug { span class="badge" { (l) } " " }
                a href=(base) { "Clear" }
            }
        }
    }
}

pub fn blog_page(posts: &[BlogPost], filters: &PostFilters, pager: &Pager, pick: ImagePick) -> Markup {
    desktop_layout(
        "Blog",
        html! {
            h1 { "Market insights" }
            (active_filters("/blog", filters))
            (card_grid(
                posts.iter().map(|p| post_card(p, pick)).collect(),
                "No articles found. Check back soon.",
            ))
            (pagination(pager, posts.len()))
        },
    )
}

pub fn guides_page(
    guides: &[BlogPost],
    categories: &[String],
    filters: &PostFilters,
    pick: ImagePick,
) -> Markup {
    desktop_layout(
        "Guides",
        html! {
            h1 { "Investment guides" }
            @if !categories.is_empty() {
                nav class="category-nav" {
                    a href="/guides" { "All" }
                    @for c in categories {
                        a href=(format!("/guides?category={}", url_encode(c)))
                          class=[filters.category.as_deref().filter(|s| *s == c.as_str()).map(|_| "active")]
                        { (format_category(c)) }
                    }
                }
            }
            (active_filters("/guides", filters))
            (card_grid(
                guides.iter().map(|g| post_card(g, pick)).collect(),
                "No guides found. Check back soon.",
            ))
        },
    )
}

/// Article or guide detail. The body is stored as HTML and rendered verbatim.
pub fn post_page(
    post: &BlogPost,
    related: &[BlogPost],
    insights: Option<&InsightsVm>,
    pick: ImagePick,
) -> Markup {
    let (section_href, section_label) = if post.is_guide {
        ("/guides", "Guides")
    } else {
        ("/blog", "Blog")
    };
    let contact = NewInquiry {
        source: Some(if post.is_guide { "guide" } else { "blog" }.to_string()),
        ..Default::default()
    };

    desktop_layout(
        &post.title,
        html! {
            article class="post" {
                p class="breadcrumbs" { a href=(section_href) { (section_label) } " / " (post.title) }
                (safe_image(&post.cover_image(pick), &post.title, ImageCategory::Blog, "hero-image"))
                h1 { (post.title) }
                p class="muted" {
                    @if let Some(date) = post.published_on() { (date) }
                    @if let Some(rt) = &post.reading_time { " · " (rt) " read" }
                }
                @if !post.tags.is_empty() {
                    ul class="tags" {
                        @for tag in &post.tags {
                            li class="tag" {
                                a href=(format!("{section_href}?tag={}", url_encode(tag))) { (tag) }
                            }
                        }
                    }
                }
                div class="post-body" { (PreEscaped(&post.body)) }
            }

            @if let Some(insights) = insights {
                (market_insights_card(insights))
            }

            section id="related-posts" {
                h2 { "Related reading" }
                (card_grid(related.iter().map(|p| post_card(p, pick)).collect(), "More articles coming soon."))
            }

            section id="contact" {
                h2 { "Talk to an advisor" }
                (inquiry_form(&contact, None))
            }
        },
    )
}
