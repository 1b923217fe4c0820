pub mod blog;
pub mod home;
pub mod inquiry;
pub mod investments;
pub mod locations;
pub mod partners;
pub mod tiers;

pub use blog::{blog_page, guides_page, post_page, PostFilters};
pub use home::{home_page, HomeVm};
pub use inquiry::inquiry_result_page;
pub use investments::{investments_page, property_page, search_page, InvestmentsVm, PropertyVm, SearchVm};
pub use locations::{location_coming_soon, location_page, locations_page, LocationVm};
pub use partners::{partner_page, partners_page};
pub use tiers::tiers_page;
