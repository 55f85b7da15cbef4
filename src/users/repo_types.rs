use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                         // store-assigned, immutable
    pub username: String,                // unique login name
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Option<String>,           // free-form, e.g. "user"
    pub social_provider: Option<String>, // e.g. "google", "facebook"
    pub social_id: Option<String>,       // provider-side id, unique when set
    pub profile_picture_url: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Field set for a user that has not been persisted yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roles: Option<String>,
    pub social_provider: Option<String>,
    pub social_id: Option<String>,
    pub profile_picture_url: Option<String>,
}
