//! PostgreSQL Repository Implementation

use kernel::id::ContactId;
use sqlx::PgPool;

use crate::domain::entity::{Contact, NewContact};
use crate::domain::repository::ContactRepository;
use crate::error::{ContactError, ContactResult};

/// Idempotent; safe on every startup
const CREATE_CONTACTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT
    )
"#;

/// PostgreSQL-backed repository
///
/// Cloning shares the underlying pool.
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensure the contacts table exists
    pub async fn initialize_schema(&self) -> ContactResult<()> {
        sqlx::query(CREATE_CONTACTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(ContactError::SchemaInit)?;

        tracing::info!("Contacts table initialized");

        Ok(())
    }
}

impl ContactRepository for PgContactRepository {
    async fn list(&self) -> ContactResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, phone FROM contacts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(ContactError::ListFailed)?;

        Ok(rows.into_iter().map(ContactRow::into_contact).collect())
    }

    async fn create(&self, contact: &NewContact) -> ContactResult<Contact> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(contact.name())
        .bind(contact.email())
        .bind(contact.phone())
        .fetch_one(&self.pool)
        .await
        .map_err(ContactError::CreateFailed)?;

        Ok(row.into_contact())
    }

    async fn delete(&self, id: &str) -> ContactResult<Option<Contact>> {
        // Bound as text; the cast happens in the store so a bad id is a store error
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            DELETE FROM contacts
            WHERE id = CAST($1 AS INTEGER)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(ContactError::DeleteFailed)?;

        Ok(row.map(ContactRow::into_contact))
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ContactRow {
    id: ContactId,
    name: String,
    email: String,
    phone: Option<String>,
}

impl ContactRow {
    fn into_contact(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}
