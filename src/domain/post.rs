// src/domain/post.rs

use crate::domain::images::{pick_from, ImageCategory, ImagePick};
use chrono::NaiveDateTime;

/// Blog articles and investment guides share one table; `is_guide` tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: Option<String>,
    pub excerpt: String,
    /// Raw HTML, rendered as-is.
    pub body: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub location_slug: Option<String>,
    pub is_guide: bool,
    pub published: bool,
    pub reading_time: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl BlogPost {
    pub fn cover_image(&self, pick: ImagePick) -> String {
        pick_from(&self.images, ImageCategory::Blog, pick, &self.id)
    }

    /// Case-insensitive substring match of `tag` against any of the post's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    pub fn path(&self) -> String {
        if self.is_guide {
            format!("/guides/{}", self.slug)
        } else {
            format!("/blog/{}", self.slug)
        }
    }

    pub fn published_on(&self) -> Option<String> {
        self.created_at.map(|d| d.format("%B %-d, %Y").to_string())
    }
}

/// "market-trends" -> "Market Trends"
pub fn format_category(category: &str) -> String {
    category
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
