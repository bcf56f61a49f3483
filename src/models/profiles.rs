use serde::Serialize;
use uuid::Uuid;

/*
id UUID PRIMARY KEY REFERENCES auth_users(id) ON DELETE CASCADE,
first_name TEXT NOT NULL,
last_name TEXT NOT NULL,
 */
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}
