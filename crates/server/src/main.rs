mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::{delete, get, post};
use std::{path::PathBuf, sync::Arc, time::Instant};
use subway::{
    repository::Repository,
    snapshot::{Config, SnapshotReader},
};
use tracing::{error, info};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let snapshot_path = std::env::args().nth(1).map(PathBuf::from);
    let repository = match &snapshot_path {
        Some(path) if path.exists() => {
            info!("Loading snapshot {}...", path.display());
            let now = Instant::now();
            let loaded = SnapshotReader::new(Config::default())
                .load_from_zip(path)
                .and_then(|reader| Repository::new().load_snapshot(reader));
            match loaded {
                Ok(repository) => {
                    info!("Loading snapshot took {:?}", now.elapsed());
                    repository
                }
                Err(err) => {
                    error!("Failed to load snapshot: {err}");
                    std::process::exit(1);
                }
            }
        }
        _ => Repository::new(),
    };
    let state = Arc::new(AppState::new(repository, snapshot_path));

    let port = match std::env::var("PORT") {
        Ok(value) => match value.parse() {
            Ok(port) => port,
            Err(_) => {
                error!("Invalid PORT: {value}");
                std::process::exit(1);
            }
        },
        Err(_) => DEFAULT_PORT,
    };

    let app = axum::Router::new()
        .route("/stations", get(api::stations).post(api::create_station))
        .route("/stations/{id}", delete(api::delete_station))
        .route("/lines", get(api::lines).post(api::create_line))
        .route(
            "/lines/{id}",
            get(api::line)
                .put(api::update_line)
                .delete(api::delete_line),
        )
        .route(
            "/lines/{id}/sections",
            get(api::sections)
                .post(api::add_section)
                .delete(api::remove_section),
        )
        .route("/snapshot", post(api::save_snapshot))
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
