//! SentiForge dashboard service.
//!
//! Scores free text against a curated lexicon and a general-purpose
//! polarity estimator, exposed through a small Axum REST API.

pub mod api;
pub mod startup;

pub use api::{router, AppState};
pub use startup::{build_app, build_state, static_assets, StaticAsset, DASHBOARD_ASSETS};
