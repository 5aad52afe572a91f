//! Contact Router
//!
//! Routes are relative; the composition root nests them under `/api/contacts`.

use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;

use crate::domain::repository::ContactRepository;
use crate::infra::postgres::PgContactRepository;
use crate::presentation::handlers::{self, ContactAppState};

/// Create the contact router with PostgreSQL repository
pub fn contact_router(repo: PgContactRepository) -> Router {
    contact_router_generic(repo)
}

/// Create a generic contact router for any repository implementation
pub fn contact_router_generic<R>(repo: R) -> Router
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let state = ContactAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_contacts::<R>).post(handlers::create_contact::<R>),
        )
        .route("/{id}", delete(handlers::delete_contact::<R>))
        .with_state(state)
}
