use std::sync::Arc;

use crate::store::{FriendRepo, IdentityRepo};

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityRepo>,
    pub friends: Arc<dyn FriendRepo>,
}
