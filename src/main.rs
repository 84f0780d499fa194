//! BadgeUp UI
//!
//! Collectible sticker album frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Album browsing and sticker unlocking via photo matching
//! - Friends, chat and live notifications over WebSocket
//! - Leaderboard, capture map and capture calendar
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the BadgeUp API via HTTP and WebSocket;
//! all non-trivial logic (photo matching, points, friendship state) lives
//! server-side.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;
mod validation;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
