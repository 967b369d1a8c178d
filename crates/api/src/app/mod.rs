//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: the injected store handle
//! - `routes/`: HTTP routes + endpoint functions (validation gate included)
//! - `users.rs`: users resource handlers (one store call each)
//! - `form.rs`: JSON / urlencoded body extraction
//! - `dto.rs`: response envelope and validation error body
//! - `errors.rs`: consistent error responses

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::{Config, DEFAULT_CURRENT_USERNAME, DEFAULT_PUBLIC_DIR};
use crate::middleware::{self, IdentityState};

pub mod dto;
pub mod errors;
pub mod form;
pub mod routes;
pub mod services;
pub mod users;

pub use services::AppServices;

/// Router-level settings that do not involve the store.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub current_username: String,
    pub public_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            current_username: DEFAULT_CURRENT_USERNAME.to_string(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            current_username: config.current_username.clone(),
            public_dir: config.public_dir.clone(),
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: AppServices, options: AppOptions) -> Router {
    let identity = IdentityState::new(options.current_username);

    let api = routes::router()
        .layer(Extension(Arc::new(services)))
        .layer(axum::middleware::from_fn_with_state(
            identity,
            middleware::identity_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(api)
        .fallback_service(ServeDir::new(options.public_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
