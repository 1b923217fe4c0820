pub mod images;
pub mod inquiry;
pub mod insight;
pub mod location;
pub mod normalize;
pub mod partner;
pub mod post;
pub mod property;
pub mod search;
pub mod tier;
