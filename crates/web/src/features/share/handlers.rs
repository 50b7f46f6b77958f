use axum::{
    Json,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use storage::models::Requester;
use utoipa::IntoParams;

use crate::error::WebError;
use crate::features::contests::services::find_contest;
use crate::state::AppState;

use super::{
    page,
    services::{self, ShareLinks},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShareQuery {
    /// Requester whose battle card the image link should point at
    pub user_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/contests/{contest_id}/share",
    params(
        ("contest_id" = String, Path, description = "Contest ID"),
        ShareQuery
    ),
    responses(
        (status = 200, description = "Share links for the contest's battle card", body = ShareLinks)
    ),
    tag = "share"
)]
pub async fn get_share_links(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
    Query(query): Query<ShareQuery>,
) -> Result<Response, WebError> {
    let contest = find_contest(&state, &contest_id).await?;
    let requester = Requester::from_optional(query.user_id);

    let links = services::build_share_links(
        &state.public_base_url,
        &contest_id,
        contest.as_ref(),
        &requester,
    );

    Ok(Json(links).into_response())
}

pub async fn share_page(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
) -> Html<String> {
    Html(page::render_share_page(&state.public_base_url, &contest_id))
}
