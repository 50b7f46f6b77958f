use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::contest::ContestResponse;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/contests/{contest_id}",
    params(
        ("contest_id" = String, Path, description = "Contest ID")
    ),
    responses(
        (status = 200, description = "Contest with its participants", body = ContestResponse),
        (status = 404, description = "Contest not found")
    ),
    tag = "contests"
)]
pub async fn get_contest(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
) -> Result<Response, WebError> {
    let contest = services::get_contest(&state, &contest_id).await?;

    Ok(Json(ContestResponse::from(contest)).into_response())
}
