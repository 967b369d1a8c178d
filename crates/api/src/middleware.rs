use std::sync::Arc;

use axum::{extract::State, middleware::Next, response::Response};

use crate::context::CurrentUser;

/// Source of the per-request identity.
///
/// There are no sessions, so every request resolves to the configured username.
#[derive(Clone)]
pub struct IdentityState {
    pub username: Arc<str>,
}

impl IdentityState {
    pub fn new(username: impl Into<Arc<str>>) -> Self {
        Self {
            username: username.into(),
        }
    }

    fn resolve(&self) -> CurrentUser {
        CurrentUser::new(self.username.clone())
    }
}

pub async fn identity_middleware(
    State(state): State<IdentityState>,
    mut req: axum::extract::Request,
    next: Next,
) -> Response {
    req.extensions_mut().insert(state.resolve());
    next.run(req).await
}
