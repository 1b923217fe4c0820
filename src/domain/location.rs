// src/domain/location.rs

use crate::domain::images::{pick_from, ImageCategory, ImagePick};

/// A destination guide entry. Locations nest one level deep through `parent_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub region: Option<String>,
    pub parent_id: Option<String>,
    pub images: Vec<String>,
    pub lifestyle_tags: Vec<String>,
    pub display_priority: i64,
    pub famous_for: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
}

impl Location {
    pub fn is_parent(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn cover_image(&self, pick: ImagePick) -> String {
        pick_from(&self.images, ImageCategory::Location, pick, &self.id)
    }
}

/// A top-level location together with the children listed under it.
#[derive(Debug, Clone)]
pub struct LocationGroup {
    pub parent: Location,
    pub children: Vec<Location>,
}

/// Groups a flat list into parents with their children, keeping the input
/// order. Children whose parent is not in the list are dropped.
pub fn group_locations(all: Vec<Location>) -> Vec<LocationGroup> {
    let (parents, children): (Vec<_>, Vec<_>) = all.into_iter().partition(Location::is_parent);

    parents
        .into_iter()
        .map(|parent| {
            let kids = children
                .iter()
                .filter(|c| c.parent_id.as_deref() == Some(parent.id.as_str()))
                .cloned()
                .collect();
            LocationGroup {
                parent,
                children: kids,
            }
        })
        .collect()
}
