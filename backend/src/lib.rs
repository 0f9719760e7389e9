//! # Bookshelf Backend
//!
//! A REST API over a catalogue of books.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, error translation)
//!     ↓
//! Domain Layer (BookService, validation, BookError)
//!     ↓
//! Storage Layer (BookStorage: SQLite or in-memory)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
    validate_request::ValidateRequestHeaderLayer,
};
use tracing::info;

use crate::config::Config;
use crate::domain::BookService;

/// Main application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub book_service: BookService,
    pub app_name: String,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up storage");
    let storage = storage::connect(&config.database_url, config.max_connections).await?;

    info!("Setting up application state");
    Ok(AppState {
        book_service: BookService::new(storage),
        app_name: config.app_name.clone(),
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let mut api_routes = Router::new().nest("/books", io::book_apis::router());

    if let Some((user, password)) = config.credentials()? {
        info!("Basic auth enabled for /api routes (user {})", user);
        api_routes = api_routes.layer(ValidateRequestHeaderLayer::basic(user, password));
    }

    let mut app = Router::new()
        .route("/", get(io::home_apis::home_page))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid CORS origin {:?}", origin))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);
        app = app.layer(cors);
    }

    Ok(app.with_state(app_state))
}
