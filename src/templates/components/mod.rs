pub mod cards;
pub mod error;
pub mod filters;
pub mod image;
pub mod inquiry_form;
pub mod insights;
pub mod pagination;

pub use cards::{card_grid, location_card, partner_card, post_card, property_card, tier_badge};
pub use error::error_page;
pub use filters::investment_filters;
pub use image::{placeholder_svg, safe_image};
pub use inquiry_form::{inquiry_form, inquiry_success, property_inquiry_form};
pub use insights::{market_insights_card, InsightsVm};
pub use pagination::{pagination, Pager};
