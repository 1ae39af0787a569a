//! CookSup Web
//!
//! Browser front end for the CookSup chef-booking marketplace, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Chef search with filters and ratings
//! - Public chef profiles with portfolios and reviews
//! - Booking requests and lifecycle management
//! - Role-specific dashboards for chefs and clients
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic lives in the CookSup REST API; this crate
//! is presentation and client-side session state only.

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
