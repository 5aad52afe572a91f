//! List Contacts Use Case

use std::sync::Arc;

use crate::domain::entity::Contact;
use crate::domain::repository::ContactRepository;
use crate::error::ContactResult;

/// List Contacts Use Case
pub struct ListContactsUseCase<R>
where
    R: ContactRepository,
{
    contact_repo: Arc<R>,
}

impl<R> ListContactsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: Arc<R>) -> Self {
        Self { contact_repo }
    }

    pub async fn execute(&self) -> ContactResult<Vec<Contact>> {
        self.contact_repo.list().await
    }
}
