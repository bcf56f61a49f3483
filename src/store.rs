#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::friends::FriendLink;
use crate::models::profiles::Profile;

/// Resolves a caller credential under the caller's own access rights.
#[async_trait]
pub trait IdentityRepo: Send + Sync {
    async fn resolve_token(&self, token: &str) -> AppResult<Option<Uuid>>;
}

/// Elevated-privilege access to the profiles and friends tables.
#[async_trait]
pub trait FriendRepo: Send + Sync {
    async fn find_profile(&self, profile_id: Uuid) -> AppResult<Option<Profile>>;

    /// True if any link already connects the two ids, in either direction.
    async fn friendship_exists(&self, user_a: Uuid, user_b: Uuid) -> AppResult<bool>;

    /// Insert-if-absent: a link that would duplicate an existing pair
    /// must come back as the friend-exists error, not as a new row.
    async fn create_friend_request(
        &self,
        requester: Uuid,
        requestee: Uuid,
    ) -> AppResult<FriendLink>;
}
