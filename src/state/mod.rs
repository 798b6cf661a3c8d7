//! State Management
//!
//! Global application state and shared domain types.

pub mod global;

pub use global::{provide_global_state, GlobalState, PopularSkill, SkillInfo, UserProfile};
