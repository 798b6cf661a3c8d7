//! Pages
//!
//! Top-level page components for each route.

pub mod community;
pub mod home;
pub mod register;
pub mod settings;

pub use community::Community;
pub use home::Home;
pub use register::Register;
pub use settings::Settings;
