// templates/pages/home.rs

use crate::domain::images::ImagePick;
use crate::domain::location::Location;
use crate::domain::post::BlogPost;
use crate::domain::property::Property;
use crate::templates::components::{card_grid, location_card, post_card, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HomeVm {
    pub featured: Vec<Property>,
    pub ultra_prime: Vec<Property>,
    pub locations: Vec<Location>,
    pub posts: Vec<BlogPost>,
    pub pick: ImagePick,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Invest in Spanish real estate with confidence" }
                p { "Curated listings, local expertise and partners in every market." }
                form method="get" action="/search" class="hero-search" {
                    input type="search" name="q" placeholder="Search villas, apartments, towns…";
                    button type="submit" class="primary" { "Search" }
                }
            }

            section id="featured" {
                h2 { "Featured investments" }
                (card_grid(
                    vm.featured.iter().map(|p| property_card(p, vm.pick)).collect(),
                    "Featured properties are coming soon.",
                ))
                a href="/investments?featured=1" class="button" { "View all featured" }
            }

            @if !vm.ultra_prime.is_empty() {
                section id="ultra-prime" {
                    h2 { "Ultra Prime collection" }
                    (card_grid(vm.ultra_prime.iter().map(|p| property_card(p, vm.pick)).collect(), ""))
                }
            }

            section id="locations" {
                h2 { "Explore locations" }
                (card_grid(
                    vm.locations.iter().map(|l| location_card(l, vm.pick)).collect(),
                    "Location guides are coming soon.",
                ))
            }

            section id="insights" {
                h2 { "Latest insights" }
                (card_grid(
                    vm.posts.iter().map(|p| post_card(p, vm.pick)).collect(),
                    "New articles are coming soon.",
                ))
            }
        },
    )
}
