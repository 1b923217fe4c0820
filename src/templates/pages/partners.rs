use crate::domain::inquiry::NewInquiry;
use crate::domain::partner::Partner;
use crate::domain::images::ImageCategory;
use crate::templates::components::{card_grid, inquiry_form, partner_card, safe_image};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn partners_page(regions: &[(String, Vec<Partner>)]) -> Markup {
    desktop_layout(
        "International Partners",
        html! {
            h1 { "International partners" }
            p { "Trusted agencies and advisors who introduce buyers from their home markets." }
            @if regions.is_empty() {
                p class="empty" { "Our partner directory is coming soon." }
            }
            @for (region, partners) in regions {
                section class="partner-region" {
                    h2 { (region) }
                    (card_grid(partners.iter().map(partner_card).collect(), ""))
                }
            }
        },
    )
}

fn list_section(title: &str, items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            h2 { (title) }
            ul class="tags" {
                @for item in items { li class="tag" { (item) } }
            }
        }
    }
}

pub fn partner_page(partner: &Partner) -> Markup {
    let contact = NewInquiry {
        source: Some(format!("partner:{}", partner.slug())),
        ..Default::default()
    };

    desktop_layout(
        &partner.partner_name,
        html! {
            article class="partner" {
                (safe_image(&partner.profile_image(), &partner.partner_name, ImageCategory::General, "avatar-large"))
                h1 { (partner.partner_name) }
                p class="muted" {
                    @if let Some(flag) = &partner.flag_emoji { (flag) " " }
                    (partner.country_name)
                    @if let Some(city) = &partner.city { ", " (city) }
                    @if let Some(kind) = &partner.partner_type { " · " (kind) }
                }
                @if let Some(badge) = &partner.badge {
                    span class="badge badge-amber" { (badge) }
                }
                p { (partner.description) }

                dl class="facts" {
                    @if !partner.contact_name.is_empty() { dt { "Contact" } dd { (partner.contact_name) } }
                    @if let Some(years) = &partner.years_experience { dt { "Experience" } dd { (years) " years" } }
                    @if let Some(email) = &partner.email {
                        dt { "Email" } dd { a href=(format!("mailto:{email}")) { (email) } }
                    }
                    @if let Some(phone) = &partner.phone { dt { "Phone" } dd { (phone) } }
                    @if let Some(site) = &partner.website_url {
                        dt { "Website" } dd { a href=(site) rel="noopener" target="_blank" { (site) } }
                    }
                }

                (list_section("Specialties", &partner.specialties))
                (list_section("Languages", &partner.languages_spoken))
                (list_section("Notable projects", &partner.notable_projects))

                @if !partner.social_links.is_empty() {
                    h2 { "Elsewhere" }
                    ul {
                        @for link in &partner.social_links {
                            li { a href=(link) rel="noopener" target="_blank" { (link) } }
                        }
                    }
                }
            }

            section id="contact" {
                h2 { "Get introduced" }
                (inquiry_form(&contact, None))
            }
        },
    )
}
