//! Contact Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Contact entity, validated creation input, repository trait
//! - `application/` - Use cases (list, create, delete)
//! - `infra/` - PostgreSQL repository and schema initializer
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Contract
//! - `GET /` lists every contact ordered by id
//! - `POST /` creates a contact from `{name, email, phone?}`
//! - `DELETE /{id}` removes a contact and echoes it back
//!
//! Store failures surface as a generic 500 body; the cause is only logged.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::{Contact, NewContact};
pub use domain::repository::ContactRepository;
pub use error::{ContactError, ContactResult};
pub use infra::postgres::PgContactRepository;
pub use presentation::router::{contact_router, contact_router_generic};

// Re-export kernel types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::id::ContactId;
