//! Startup wiring: lexicon loading, diagnostics, and router assembly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use sentiforge_config::DashboardConfig;
use sentiforge_core::{Lexicon, PolarityEstimator, Scorer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::api::{self, AppState};

/// Files the dashboard front end expects under `server.static_dir`.
pub const DASHBOARD_ASSETS: [&str; 3] = ["index.html", "style.css", "script.js"];

/// Presence of one expected dashboard asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAsset {
    pub path: PathBuf,
    pub present: bool,
}

/// Loads the configured lexicon and builds the shared application state.
///
/// Falls back to the built-in lexicon if the dataset can't be loaded, then
/// logs probe words, checks the static assets and runs the configured
/// self-test.
pub fn build_state(config: &DashboardConfig) -> AppState {
    let load = Lexicon::load(&config.lexicon.path);
    let state = AppState::new(Scorer::new(load.lexicon));
    log_probes(&state, &config.lexicon.probe_words);
    if let Some(dir) = &config.server.static_dir {
        log_static_assets(dir);
    }
    if let Some(text) = config.lexicon.self_test.as_deref() {
        run_self_test(&state, text);
    }
    state
}

/// Builds the full application: API routes, static assets and CORS.
pub fn build_app<E>(config: &DashboardConfig, state: Arc<AppState<E>>) -> Router
where
    E: PolarityEstimator + 'static,
{
    let mut app = api::router(state);

    if let Some(dir) = &config.server.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    if config.server.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

fn log_probes<E: PolarityEstimator>(state: &AppState<E>, words: &[String]) {
    for probe in state.scorer().lexicon().probe(words) {
        match probe.entry {
            Some(entry) => info!(
                event = "probe",
                word = %probe.word,
                present = true,
                sentiment = %entry.label,
                score = entry.score,
            ),
            None => info!(event = "probe", word = %probe.word, present = false),
        }
    }
}

/// Checks which of [`DASHBOARD_ASSETS`] exist under `dir`.
pub fn static_assets(dir: &Path) -> Vec<StaticAsset> {
    DASHBOARD_ASSETS
        .iter()
        .map(|name| {
            let path = dir.join(name);
            let present = path.is_file();
            StaticAsset { path, present }
        })
        .collect()
}

fn log_static_assets(dir: &Path) {
    for asset in static_assets(dir) {
        info!(
            event = "static_asset",
            path = %asset.path.display(),
            present = asset.present,
        );
    }
}

fn run_self_test<E: PolarityEstimator>(state: &AppState<E>, text: &str) {
    let result = state.scorer().analyze(text);
    info!(
        event = "self_test",
        text = %result.text,
        sentiment = %result.sentiment,
        polarity = result.polarity,
    );
}
