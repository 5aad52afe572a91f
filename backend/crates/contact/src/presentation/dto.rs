//! API DTOs (Data Transfer Objects)

use kernel::id::ContactId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::CreateContactInput;
use crate::domain::entity::Contact;

pub const DELETED_MESSAGE: &str = "Contact deleted successfully";

/// Request for POST /api/contacts
///
/// Fields accept any JSON type. Falsy values (`null`, `false`, `0`, `""`)
/// count as absent; everything else is stored as its text form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateContactRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
}

impl CreateContactRequest {
    pub fn into_input(self) -> CreateContactInput {
        CreateContactInput {
            name: self.name.and_then(truthy_text),
            email: self.email.and_then(truthy_text),
            phone: self.phone.and_then(truthy_text),
        }
    }
}

/// Text form of a truthy JSON value, `None` for a falsy one
pub fn truthy_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) => Some(array_literal(&items)),
        other => Some(scalar_text(&other)),
    }
}

/// Strings verbatim, objects as JSON, other scalars via their display form
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Arrays become a PostgreSQL array literal with every element quoted, e.g. `{"a","1",NULL}`
fn array_literal(items: &[Value]) -> String {
    let elements: Vec<String> = items
        .iter()
        .map(|item| match item {
            Value::Null => "NULL".to_string(),
            Value::Array(nested) => array_literal(nested),
            other => {
                let escaped = scalar_text(other).replace('\\', "\\\\").replace('"', "\\\"");
                format!("\"{escaped}\"")
            }
        })
        .collect();
    format!("{{{}}}", elements.join(","))
}

/// A contact as returned by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    /// Serialized as `null` when absent
    pub phone: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

/// Response for DELETE /api/contacts/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DeleteContactResponse {
    pub message: &'static str,
    pub contact: ContactResponse,
}
