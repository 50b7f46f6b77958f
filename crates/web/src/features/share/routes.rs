use axum::{Router, routing::get};

use super::handlers::{get_share_links, share_page};
use crate::state::AppState;

/// Mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/contests/:contest_id/share", get(get_share_links))
}

/// Mounted at the root, these are the links people actually post
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/contest/:contest_id", get(share_page))
}
