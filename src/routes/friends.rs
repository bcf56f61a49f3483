use crate::app_state::AppState;
use crate::handlers::friends;
use axum::routing::post;
use axum::Router;

pub fn friends_routes() -> Router<AppState> {
    Router::new().route("/friend-request", post(friends::send_friend_request))
}
