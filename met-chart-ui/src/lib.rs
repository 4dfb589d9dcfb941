//! Shared Dioxus components for the portal chart and map apps.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, SVG charts, the map
//!   viewer and its time slider)

pub mod components;
pub mod state;
