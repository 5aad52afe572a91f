//! Domain Entities

use kernel::id::ContactId;

use crate::error::{ContactError, ContactResult};

/// Contact entity - a stored name/email/phone record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Assigned by the store on insert, never changed afterwards
    pub id: ContactId,
    pub name: String,
    pub email: String,
    /// `None` is stored as SQL `NULL`
    pub phone: Option<String>,
}

/// Creation input that has passed the presence checks
///
/// Fields are private so a repository can only ever receive validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    phone: Option<String>,
}

impl NewContact {
    /// Validate raw request fields
    ///
    /// `name` and `email` must be present and non-empty. No format checks are
    /// applied. An empty `phone` is treated the same as an absent one.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> ContactResult<Self> {
        match (non_empty(name), non_empty(email)) {
            (Some(name), Some(email)) => Ok(Self {
                name,
                email,
                phone: non_empty(phone),
            }),
            _ => Err(ContactError::MissingFields),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Attach the id the store assigned
    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
