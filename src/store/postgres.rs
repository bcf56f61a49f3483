use anyhow::{anyhow, Context};
use async_trait::async_trait;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use uuid::Uuid;

use crate::error::{AppError, AppResult, ErrorId};
use crate::models::friends::{FriendLink, FriendStatus};
use crate::models::profiles::Profile;
use crate::store::{FriendRepo, IdentityRepo};

/// Postgres-backed implementation of both store capabilities.
#[derive(Clone)]
pub struct PgRepo {
    pool: PgPool,
}

impl PgRepo {
    pub async fn connect() -> anyhow::Result<Self> {
        dotenv().ok();
        let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let pool = PgPoolOptions::new()
            .max_connections(20) // 20 concurrent connections
            .connect(&db_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl IdentityRepo for PgRepo {
    async fn resolve_token(&self, token: &str) -> AppResult<Option<Uuid>> {
        let user_id = sqlx::query_scalar::<_, Uuid>(
            "SELECT user_id FROM auth_tokens WHERE token = $1 AND expires_at > now()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("database query error (resolve_token): {:?}", e);
            AppError::InternalServerError(anyhow!("Database error resolving caller token"))
        })?;

        Ok(user_id)
    }
}

#[async_trait]
impl FriendRepo for PgRepo {
    async fn find_profile(&self, profile_id: Uuid) -> AppResult<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, first_name, last_name FROM profiles WHERE id = $1",
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("database query error (find_profile): {:?}", e);
            AppError::InternalServerError(anyhow!("Database error fetching profile"))
        })?;

        Ok(profile)
    }

    async fn friendship_exists(&self, user_a: Uuid, user_b: Uuid) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM friends
                WHERE requester IN ($1, $2) AND requestee IN ($1, $2)
            )",
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("database query error (friendship_exists): {:?}", e);
            AppError::InternalServerError(anyhow!("Database error checking for existing friendship"))
        })?;

        Ok(exists)
    }

    async fn create_friend_request(
        &self,
        requester: Uuid,
        requestee: Uuid,
    ) -> AppResult<FriendLink> {
        let link = sqlx::query_as::<_, FriendLink>(
            "INSERT INTO friends (requester, requestee, status)
             VALUES ($1, $2, $3)
             RETURNING id, requester, requestee, status, created_at",
        )
        .bind(requester)
        .bind(requestee)
        .bind(FriendStatus::Requested)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Two concurrent requests for the same pair can both pass the
            // existence check; the friends_pair_key index turns the loser
            // into a conflict rather than a duplicate row.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::BadRequest(
                        anyhow!("A matching friend connection already exists"),
                        ErrorId::FriendExists,
                    );
                }
            }
            tracing::error!("database insert error (create_friend_request): {:?}", e);
            AppError::InternalServerError(anyhow!("Database error creating friend request"))
        })?;

        Ok(link)
    }
}
