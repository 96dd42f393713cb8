//! solidlens - a terminal dashboard for live code-quality analysis
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod debounce;
pub mod models;
pub mod scoring;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod websocket;
pub mod widgets;
