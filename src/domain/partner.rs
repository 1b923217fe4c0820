// src/domain/partner.rs

use crate::domain::images::{pick_from, ImageCategory, ImagePick};

/// An international partner agency listed in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Partner {
    pub id: String,
    pub partner_name: String,
    pub partner_type: Option<String>,
    pub contact_name: String,
    pub country_name: String,
    pub flag_emoji: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub description: String,
    pub specialties: Vec<String>,
    pub languages_spoken: Vec<String>,
    pub notable_projects: Vec<String>,
    pub social_links: Vec<String>,
    pub years_experience: Option<String>,
    pub featured: bool,
    pub badge: Option<String>,
}

impl Partner {
    pub fn slug(&self) -> String {
        partner_slug(&self.partner_name)
    }

    pub fn region_or_other(&self) -> &str {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or("Other")
    }

    /// The stored portrait when it is a usable URL, otherwise a general placeholder.
    pub fn profile_image(&self) -> String {
        let stored: Vec<String> = self.profile_image_url.iter().cloned().collect();
        pick_from(&stored, ImageCategory::General, ImagePick::First, &self.id)
    }
}

/// Partners have no stored slug; it is derived from the name.
pub fn partner_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Partners bucketed by region, regions in first-seen order.
pub fn group_by_region(partners: Vec<Partner>) -> Vec<(String, Vec<Partner>)> {
    let mut groups: Vec<(String, Vec<Partner>)> = Vec::new();
    for p in partners {
        let region = p.region_or_other().to_string();
        match groups.iter_mut().find(|(r, _)| *r == region) {
            Some((_, list)) => list.push(p),
            None => groups.push((region, vec![p])),
        }
    }
    groups
}
