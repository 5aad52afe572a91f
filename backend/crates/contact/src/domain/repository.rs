//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{Contact, NewContact};
use crate::error::ContactResult;

/// Contact repository trait
///
/// Every method is a single statement against the store; there is no
/// transaction spanning calls.
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    /// All contacts ordered by ascending id
    async fn list(&self) -> ContactResult<Vec<Contact>>;

    /// Insert a contact and return it with its assigned id
    async fn create(&self, contact: &NewContact) -> ContactResult<Contact>;

    /// Delete by the raw path identifier, returning the removed row if any
    ///
    /// The identifier is handed to the store uncoerced; a value the store
    /// cannot interpret as an id is a store failure, not a miss.
    async fn delete(&self, id: &str) -> ContactResult<Option<Contact>>;
}
