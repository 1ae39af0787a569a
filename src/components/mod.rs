//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chef_card;
pub mod header;
pub mod loading;
pub mod protected;
pub mod rating;
pub mod toast;

pub use chef_card::ChefCard;
pub use header::Header;
pub use loading::{CardSkeleton, Loading};
pub use protected::Protected;
pub use rating::StarRating;
pub use toast::Toast;
