use axum::{routing::get, Router};

pub mod common;
pub mod home;
pub mod system;
pub mod users;

/// Router for the home page and the users resource.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .nest("/users", users::router())
}
