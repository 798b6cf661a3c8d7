//! Coinnect Web UI
//!
//! Browser client for the Coinnect skill-sharing platform, built with Leptos (WASM).
//!
//! # Features
//!
//! - Popular skills ranking on the home page
//! - Community directory with trust scores and SkillCoins balances
//! - Member registration with offered and requested skills
//! - Configurable API endpoint
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Coinnect API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
