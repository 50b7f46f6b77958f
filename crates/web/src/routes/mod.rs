use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::features::{battle_cards, contests, share};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .merge(battle_cards::routes::routes())
        .merge(contests::routes::routes())
        .merge(share::routes::api_routes());

    Router::new()
        .nest("/api", api)
        .merge(share::routes::page_routes())
        .layer(cors)
        .with_state(state)
}
