use axum::{Router, routing::get};

use super::handlers::get_contest;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/contests/:contest_id", get(get_contest))
}
