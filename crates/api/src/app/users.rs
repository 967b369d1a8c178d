//! Users resource handlers.
//!
//! Each handler receives already-validated matched data, performs exactly one
//! write against the `users` collection and maps the outcome to an [`Envelope`].
//! A write only counts as a success when it is acknowledged and touched exactly
//! one document; any other write result, like any store error, produces the
//! failure envelope. Store error details are logged, never returned.

use roster_core::Document;
use roster_infra::{DocumentStore, StoreError, WriteResult};

use crate::app::dto::Envelope;
use crate::context::CurrentUser;

pub const USERS_COLLECTION: &str = "users";

struct Operation {
    name: &'static str,
    success: &'static str,
    failure: &'static str,
}

const ADD: Operation = Operation {
    name: "users.add",
    success: "Added the user",
    failure: "There was an error adding the user",
};

const UPDATE_EMAIL: Operation = Operation {
    name: "users.update_email",
    success: "Updated the user email",
    failure: "There was an error updating the email",
};

const UPDATE_ABOUT: Operation = Operation {
    name: "users.update_about",
    success: "Updated the about message",
    failure: "There was an error updating the about message",
};

const REMOVE: Operation = Operation {
    name: "users.remove",
    success: "Removed the user",
    failure: "There was an error removing the user",
};

fn finish(op: &Operation, result: Result<WriteResult, StoreError>) -> Envelope {
    match result {
        Ok(write) if write.is_single() => Envelope::succeeded(op.success),
        Ok(write) => {
            tracing::warn!(
                operation = op.name,
                n = write.n,
                ok = write.ok,
                "unexpected write result"
            );
            Envelope::failed(op.failure)
        }
        Err(e) => {
            tracing::error!(operation = op.name, "{e}");
            Envelope::failed(op.failure)
        }
    }
}

/// Insert a new user built from exactly the matched fields.
pub async fn add(store: &dyn DocumentStore, matched: Document) -> Envelope {
    finish(&ADD, store.insert_one(USERS_COLLECTION, matched).await)
}

/// Overwrite the current user's email with the matched value.
pub async fn update_email(
    store: &dyn DocumentStore,
    user: &CurrentUser,
    matched: Document,
) -> Envelope {
    finish(
        &UPDATE_EMAIL,
        store.update_one(USERS_COLLECTION, &user.selector(), matched).await,
    )
}

/// Overwrite the current user's about message with the matched value.
pub async fn update_about(
    store: &dyn DocumentStore,
    user: &CurrentUser,
    matched: Document,
) -> Envelope {
    finish(
        &UPDATE_ABOUT,
        store.update_one(USERS_COLLECTION, &user.selector(), matched).await,
    )
}

/// Delete one user matching the selector.
///
/// Not mounted on any route; available to callers embedding the router.
pub async fn remove(store: &dyn DocumentStore, selector: &Document) -> Envelope {
    finish(&REMOVE, store.delete_one(USERS_COLLECTION, selector).await)
}
