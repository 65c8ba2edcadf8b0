use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID, assigned by the store
    pub email: String,              // unique, stored lowercase
    #[serde(skip_serializing)]
    pub password_hash: String,      // Argon2 hash, not exposed in JSON
    pub role: String,               // seeker / employer, opaque here
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime, // creation timestamp
}
