use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, AppResult, ErrorId};
use crate::models::friends::{FriendLink, FriendStatus};
use crate::models::profiles::Profile;
use crate::store::{FriendRepo, IdentityRepo};

/// In-memory stand-in for the hosted database, used by handler tests.
#[derive(Default)]
pub struct MemoryRepo {
    profiles: Mutex<HashMap<Uuid, Profile>>,
    tokens: Mutex<HashMap<String, Uuid>>,
    links: Mutex<Vec<FriendLink>>,
}

impl MemoryRepo {
    pub fn add_profile(&self, first_name: &str, last_name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.profiles.lock().unwrap().insert(
            id,
            Profile {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
        );
        id
    }

    pub fn add_token(&self, token: &str, user_id: Uuid) {
        self.tokens.lock().unwrap().insert(token.to_string(), user_id);
    }

    pub fn links(&self) -> Vec<FriendLink> {
        self.links.lock().unwrap().clone()
    }

    fn pair_linked(links: &[FriendLink], user_a: Uuid, user_b: Uuid) -> bool {
        links.iter().any(|link| {
            (link.requester == user_a || link.requester == user_b)
                && (link.requestee == user_a || link.requestee == user_b)
        })
    }
}

#[async_trait]
impl IdentityRepo for MemoryRepo {
    async fn resolve_token(&self, token: &str) -> AppResult<Option<Uuid>> {
        Ok(self.tokens.lock().unwrap().get(token).copied())
    }
}

#[async_trait]
impl FriendRepo for MemoryRepo {
    async fn find_profile(&self, profile_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().get(&profile_id).cloned())
    }

    async fn friendship_exists(&self, user_a: Uuid, user_b: Uuid) -> AppResult<bool> {
        let links = self.links.lock().unwrap();
        Ok(Self::pair_linked(&links, user_a, user_b))
    }

    async fn create_friend_request(
        &self,
        requester: Uuid,
        requestee: Uuid,
    ) -> AppResult<FriendLink> {
        // Check and insert under one lock, matching the conflict behavior
        // of the unique index in the real store.
        let mut links = self.links.lock().unwrap();
        if Self::pair_linked(&links, requester, requestee) {
            return Err(AppError::BadRequest(
                anyhow!("A matching friend connection already exists"),
                ErrorId::FriendExists,
            ));
        }

        let link = FriendLink {
            id: links.len() as i32 + 1,
            requester,
            requestee,
            status: FriendStatus::Requested,
            created_at: Utc::now(),
        };
        links.push(link.clone());
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_is_insert_if_absent() {
        let repo = MemoryRepo::default();
        let alice = repo.add_profile("Alice", "Example");
        let bob = repo.add_profile("Bob", "Example");

        repo.create_friend_request(alice, bob).await.unwrap();

        // Same pair again, reversed direction: conflict, not a second row.
        let err = repo.create_friend_request(bob, alice).await.unwrap_err();
        match err {
            AppError::BadRequest(_, id) => assert_eq!(id, ErrorId::FriendExists),
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(repo.links().len(), 1);
    }
}
