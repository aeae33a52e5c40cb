//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credential lookup
//! - The OpenWeather fetcher and its response validation
//! - Presentation mapping (icon variant, background, display rounding)
//! - The search controller that owns UI-facing state
//!
//! It is used by `cityweather-cli`, but any front end that can render
//! [`AppState`] can drive a [`SearchController`].

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod presentation;
pub mod provider;
mod schema;

pub use config::Config;
pub use controller::{AppState, Phase, SearchController};
pub use error::FetchError;
pub use model::{Condition, WeatherQuery, WeatherReport};
pub use presentation::{IconVariant, Presentation, ReportView, map_to_presentation};
pub use provider::{WeatherProvider, fetch};
