use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{ensure_battle_card, get_battle_card, get_battle_card_image};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/battle-cards", post(ensure_battle_card))
        .route("/battle-cards/:card_id", get(get_battle_card))
        .route("/battle-card", get(get_battle_card_image))
}
