//! Shared Dioxus components and Plotly bridge for the climate index dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the choropleth map via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, map container, legend, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
