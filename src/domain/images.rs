// src/domain/images.rs

use crate::domain::normalize::normalize_list;
use rand::Rng;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Which placeholder rotation to fall back to when an entity has no usable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Property,
    Location,
    Blog,
    General,
}

const PROPERTY_FALLBACKS: &[&str] = &[
    "/placeholder.svg?height=600&width=800",
    "/placeholder.svg?height=600&width=800&text=Investment+Property",
];
const LOCATION_FALLBACKS: &[&str] = &[
    "/placeholder.svg?height=500&width=800&text=Beautiful+Location",
    "/placeholder.svg?height=500&width=800&text=Explore+the+Region",
];
const BLOG_FALLBACKS: &[&str] = &[
    "/placeholder.svg?height=400&width=800&text=Market+Insights",
    "/placeholder.svg?height=400&width=800&text=Investment+Guide",
];
const GENERAL_FALLBACKS: &[&str] = &[
    "/placeholder.svg?height=600&width=800",
    "/placeholder.svg?height=400&width=600",
];

impl ImageCategory {
    pub fn fallbacks(self) -> &'static [&'static str] {
        match self {
            ImageCategory::Property => PROPERTY_FALLBACKS,
            ImageCategory::Location => LOCATION_FALLBACKS,
            ImageCategory::Blog => BLOG_FALLBACKS,
            ImageCategory::General => GENERAL_FALLBACKS,
        }
    }

    /// Placeholder at `index`, wrapping around the rotation.
    pub fn fallback(self, index: usize) -> &'static str {
        let list = self.fallbacks();
        list[index % list.len()]
    }
}

/// How one image is chosen out of several candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePick {
    First,
    /// Uniformly random on every render.
    Random,
    /// Stable per entity: the same key always yields the same image.
    Seeded,
}

impl ImagePick {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Some(ImagePick::First),
            "random" => Some(ImagePick::Random),
            "seeded" => Some(ImagePick::Seeded),
            _ => None,
        }
    }
}

/// Candidates worth handing to a browser: absolute URLs or site-relative paths.
pub fn usable_urls(urls: &[String]) -> Vec<&str> {
    urls.iter()
        .map(|u| u.trim())
        .filter(|u| u.starts_with("http://") || u.starts_with("https://") || u.starts_with('/'))
        .collect()
}

/// Returns exactly one URL for a heterogeneous stored field.
///
/// `seed_key` is only consulted for [`ImagePick::Seeded`]; pass the entity id.
pub fn pick_image(value: &Value, category: ImageCategory, pick: ImagePick, seed_key: &str) -> String {
    pick_from(&normalize_list(value), category, pick, seed_key)
}

/// Same as [`pick_image`] over an already normalized list.
pub fn pick_from(urls: &[String], category: ImageCategory, pick: ImagePick, seed_key: &str) -> String {
    let candidates = usable_urls(urls);
    if candidates.is_empty() {
        return category.fallback(0).to_string();
    }

    let index = match pick {
        ImagePick::First => 0,
        ImagePick::Random => rand::thread_rng().gen_range(0..candidates.len()),
        ImagePick::Seeded => seeded_index(seed_key, candidates.len()),
    };
    candidates[index].to_string()
}

fn seeded_index(key: &str, len: usize) -> usize {
    let digest = Sha256::digest(key.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(head) % len as u64) as usize
}

/// Substitutes placeholders after image load failures.
///
/// Each failure advances to the next entry of the category rotation, starting
/// after `start`. Once every entry has been tried, no further substitution
/// is offered.
#[derive(Debug, Clone)]
pub struct FallbackCycle {
    category: ImageCategory,
    start: usize,
    attempts: usize,
}

impl FallbackCycle {
    pub fn new(category: ImageCategory, start: usize) -> Self {
        Self {
            category,
            start,
            attempts: 0,
        }
    }

    /// The placeholder to try after the current image failed to load.
    pub fn on_error(&mut self) -> Option<&'static str> {
        let list = self.category.fallbacks();
        if self.attempts >= list.len() {
            return None;
        }
        self.attempts += 1;
        Some(self.category.fallback(self.start + self.attempts))
    }

    /// Every substitution this cycle would make, in order.
    pub fn remaining(mut self) -> Vec<&'static str> {
        std::iter::from_fn(|| self.on_error()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_uses_category_placeholder() {
        for (value, category) in [
            (Value::Null, ImageCategory::Property),
            (json!(""), ImageCategory::Location),
            (json!("[]"), ImageCategory::Blog),
            (json!({}), ImageCategory::General),
        ] {
            let url = pick_image(&value, category, ImagePick::Random, "id");
            assert!(!url.is_empty());
            assert!(category.fallbacks().contains(&url.as_str()));
        }
    }

    #[test]
    fn first_pick_takes_first_usable_url() {
        let value = json!(r#"["not a url", "https://a/1.jpg", "/img/2.jpg"]"#);
        assert_eq!(
            pick_image(&value, ImageCategory::Property, ImagePick::First, "p1"),
            "https://a/1.jpg"
        );
    }

    #[test]
    fn random_pick_stays_within_candidates() {
        let urls = vec!["https://a/1.jpg".to_string(), "https://a/2.jpg".to_string()];
        for _ in 0..20 {
            let url = pick_from(&urls, ImageCategory::Property, ImagePick::Random, "");
            assert!(urls.contains(&url));
        }
    }

    #[test]
    fn seeded_pick_is_stable_per_key() {
        let urls: Vec<String> = (0..7).map(|i| format!("https://a/{i}.jpg")).collect();
        let a = pick_from(&urls, ImageCategory::Property, ImagePick::Seeded, "villa-42");
        let b = pick_from(&urls, ImageCategory::Property, ImagePick::Seeded, "villa-42");
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_cycle_stops_after_rotation_is_exhausted() {
        let mut cycle = FallbackCycle::new(ImageCategory::Blog, 0);
        assert_eq!(cycle.on_error(), Some(BLOG_FALLBACKS[1]));
        assert_eq!(cycle.on_error(), Some(BLOG_FALLBACKS[0]));
        assert_eq!(cycle.on_error(), None);
        assert_eq!(cycle.on_error(), None);
    }

    #[test]
    fn remaining_lists_every_substitution() {
        let cycle = FallbackCycle::new(ImageCategory::Location, 1);
        assert_eq!(
            cycle.remaining(),
            vec![LOCATION_FALLBACKS[0], LOCATION_FALLBACKS[1]]
        );
    }

    #[test]
    fn image_pick_parses_config_values() {
        assert_eq!(ImagePick::parse("Seeded"), Some(ImagePick::Seeded));
        assert_eq!(ImagePick::parse(" first "), Some(ImagePick::First));
        assert_eq!(ImagePick::parse("sometimes"), None);
    }
}
