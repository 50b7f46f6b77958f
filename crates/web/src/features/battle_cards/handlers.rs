use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    dto::battle_card::{BattleCardData, EnsureBattleCardRequest},
    models::Requester,
};
use utoipa::IntoParams;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BattleCardImageQuery {
    /// Contest to print the card for
    pub contest_id: Option<String>,
    /// Requester the card is issued to; omitted for anonymous cards
    pub user_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/battle-cards",
    request_body = EnsureBattleCardRequest,
    responses(
        (status = 200, description = "Existing or newly created battle card", body = BattleCardData),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Contest not found"),
        (status = 422, description = "Contest does not have exactly two participants")
    ),
    tag = "battle-cards"
)]
pub async fn ensure_battle_card(
    State(state): State<AppState>,
    Json(req): Json<EnsureBattleCardRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let card = services::ensure_battle_card(&state, &req.contest_id, &req.requester()).await?;

    Ok(Json(card).into_response())
}

#[utoipa::path(
    get,
    path = "/api/battle-cards/{card_id}",
    params(
        ("card_id" = String, Path, description = "Battle card ID")
    ),
    responses(
        (status = 200, description = "Battle card found", body = BattleCardData),
        (status = 404, description = "Battle card not found")
    ),
    tag = "battle-cards"
)]
pub async fn get_battle_card(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Result<Response, WebError> {
    let card = services::get_battle_card(&state, &card_id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(card).into_response())
}

#[utoipa::path(
    get,
    path = "/api/battle-card",
    params(BattleCardImageQuery),
    responses(
        (status = 200, description = "Battle card image", body = Vec<u8>, content_type = "image/png"),
        (status = 400, description = "contestId parameter is required"),
        (status = 404, description = "Contest or battle card image not found"),
        (status = 422, description = "Contest does not have exactly two participants")
    ),
    tag = "battle-cards"
)]
pub async fn get_battle_card_image(
    State(state): State<AppState>,
    Query(query): Query<BattleCardImageQuery>,
) -> Result<Response, WebError> {
    let contest_id = query
        .contest_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| WebError::BadRequest("contestId parameter is required".to_string()))?;
    let requester = Requester::from_optional(query.user_id);

    let card = services::ensure_battle_card(&state, &contest_id, &requester).await?;
    let image = services::render_battle_card(&state, &card).await?;

    Ok((
        [
            (header::CONTENT_TYPE, image.content_type),
            (header::CACHE_CONTROL, IMAGE_CACHE_CONTROL),
        ],
        image.bytes,
    )
        .into_response())
}
