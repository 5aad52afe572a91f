//! Create Contact Use Case
//!
//! Presence checks run before the store is touched.

use std::sync::Arc;

use crate::domain::entity::{Contact, NewContact};
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;

/// Create contact input
pub struct CreateContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Create Contact Use Case
pub struct CreateContactUseCase<R>
where
    R: ContactRepository,
{
    contact_repo: Arc<R>,
}

impl<R> CreateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: Arc<R>) -> Self {
        Self { contact_repo }
    }

    pub async fn execute(&self, input: CreateContactInput) -> ContactResult<Contact> {
        let new_contact = NewContact::new(input.name, input.email, input.phone)?;

        let contact = self.contact_repo.create(&new_contact).await?;

        tracing::info!(contact_id = %contact.id, "Contact created");

        Ok(contact)
    }
}
