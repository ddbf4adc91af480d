use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Role required by the admin gate.
pub const ADMIN_ROLE: &str = "admin";

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                           // unique user ID
    pub name: String,                       // display name
    pub email: String,                      // login key, unique
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,      // Argon2 hash; NULL blocks password login
    pub phone: Option<String>,
    pub role: String,                       // "user" | "admin"
    pub created_at: OffsetDateTime,         // creation timestamp
}

/// Fields supplied on insert; `id`, `role` and `created_at` come from column defaults.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
}
