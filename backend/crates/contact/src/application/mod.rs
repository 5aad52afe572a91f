//! Application Layer - Use Cases
//!
//! Each use case issues exactly one repository call.

pub mod create_contact;
pub mod delete_contact;
pub mod list_contacts;

// Re-exports
pub use create_contact::{CreateContactInput, CreateContactUseCase};
pub use delete_contact::DeleteContactUseCase;
pub use list_contacts::ListContactsUseCase;
