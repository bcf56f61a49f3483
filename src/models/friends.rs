use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "friend_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    Requested,
    Accepted,
    Declined,
}

/*
id SERIAL PRIMARY KEY,
requester UUID NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
requestee UUID NOT NULL REFERENCES profiles(id) ON DELETE CASCADE,
status friend_status NOT NULL DEFAULT 'requested',
created_at TIMESTAMPTZ NOT NULL DEFAULT now(),

CREATE UNIQUE INDEX friends_pair_key
    ON friends (LEAST(requester, requestee), GREATEST(requester, requestee));
 */
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FriendLink {
    pub id: i32,
    pub requester: Uuid,
    pub requestee: Uuid,
    pub status: FriendStatus,
    pub created_at: DateTime<Utc>,
}
