//! UI Components
//!
//! Reusable Leptos components for the Coinnect pages.

pub mod loading;
pub mod nav;
pub mod popular_skills;
pub mod toast;
pub mod user_card;

pub use loading::{CardSkeleton, ListSkeleton};
pub use nav::Nav;
pub use popular_skills::PopularSkills;
pub use toast::Toast;
pub use user_card::UserCard;
