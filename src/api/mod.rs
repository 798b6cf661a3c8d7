//! API Client
//!
//! HTTP communication with the Coinnect backend.

pub mod client;

pub use client::*;
