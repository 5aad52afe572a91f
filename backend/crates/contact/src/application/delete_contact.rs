//! Delete Contact Use Case

use std::sync::Arc;

use crate::domain::entity::Contact;
use crate::domain::repository::ContactRepository;
use crate::error::{ContactError, ContactResult};

/// Delete Contact Use Case
pub struct DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    contact_repo: Arc<R>,
}

impl<R> DeleteContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: Arc<R>) -> Self {
        Self { contact_repo }
    }

    /// Delete the contact addressed by the raw path identifier
    pub async fn execute(&self, id: &str) -> ContactResult<Contact> {
        let contact = self
            .contact_repo
            .delete(id)
            .await?
            .ok_or(ContactError::NotFound)?;

        tracing::info!(contact_id = %contact.id, "Contact deleted");

        Ok(contact)
    }
}
