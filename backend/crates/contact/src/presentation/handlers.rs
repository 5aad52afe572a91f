//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{CreateContactUseCase, DeleteContactUseCase, ListContactsUseCase};
use crate::domain::repository::ContactRepository;
use crate::error::{ContactError, ContactResult};
use crate::presentation::dto::{
    ContactResponse, CreateContactRequest, DELETED_MESSAGE, DeleteContactResponse,
};

/// Shared state for contact handlers
#[derive(Clone)]
pub struct ContactAppState<R>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/contacts
pub async fn list_contacts<R>(
    State(state): State<ContactAppState<R>>,
) -> ContactResult<Json<Vec<ContactResponse>>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListContactsUseCase::new(state.repo.clone());

    let contacts = use_case.execute().await?;

    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

/// POST /api/contacts
pub async fn create_contact<R>(
    State(state): State<ContactAppState<R>>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> ContactResult<(StatusCode, Json<ContactResponse>)>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    // An unreadable body carries no usable name/email
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(rejection = %rejection.body_text(), "Unreadable contact body");
        ContactError::MissingFields
    })?;

    let use_case = CreateContactUseCase::new(state.repo.clone());

    let contact = use_case.execute(req.into_input()).await?;

    Ok((StatusCode::CREATED, Json(contact.into())))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact<R>(
    State(state): State<ContactAppState<R>>,
    Path(id): Path<String>,
) -> ContactResult<Json<DeleteContactResponse>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteContactUseCase::new(state.repo.clone());

    let contact = use_case.execute(&id).await?;

    Ok(Json(DeleteContactResponse {
        message: DELETED_MESSAGE,
        contact: contact.into(),
    }))
}
