//! Bidder UI Entry Point
//!
//! Client-side behaviors for the task pages: the schedule interval editor
//! and optimistic task toggles.

mod models;
mod config;
mod error;
mod diagnostics;
mod schedule;
mod toggle;
mod commands;
mod context;
mod components;
mod app;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
