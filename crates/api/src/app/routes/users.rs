use std::sync::Arc;

use axum::{
    extract::Extension,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use roster_core::user::{add_user_chain, update_about_chain, update_email_chain};

use crate::app::form::FormBody;
use crate::app::routes::{common, home};
use crate::app::services::AppServices;
use crate::app::users;
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(home::echo_body))
        .route("/add", post(add_user))
        .route("/update/email", post(update_email))
        .route("/update/about", post(update_about))
}

pub async fn add_user(
    Extension(services): Extension<Arc<AppServices>>,
    FormBody(fields): FormBody,
) -> Response {
    let matched = match common::gate(&add_user_chain(), &fields) {
        Ok(doc) => doc,
        Err(resp) => return resp,
    };

    users::add(services.store(), matched).await.into_response()
}

pub async fn update_email(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    FormBody(fields): FormBody,
) -> Response {
    let matched = match common::gate(&update_email_chain(), &fields) {
        Ok(doc) => doc,
        Err(resp) => return resp,
    };

    users::update_email(services.store(), &user, matched).await.into_response()
}

pub async fn update_about(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<CurrentUser>,
    FormBody(fields): FormBody,
) -> Response {
    let matched = match common::gate(&update_about_chain(), &fields) {
        Ok(doc) => doc,
        Err(resp) => return resp,
    };

    users::update_about(services.store(), &user, matched).await.into_response()
}
