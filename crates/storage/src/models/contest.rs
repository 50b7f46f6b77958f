use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::ContestParticipant;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Contest {
    pub contest_id: String,
    pub name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub battle_start_time: Option<NaiveDateTime>,
    pub battle_end_time: Option<NaiveDateTime>,
    pub content_deadline: Option<NaiveDateTime>,
}

/// A contest together with its participants in stored order.
#[derive(Debug, Clone)]
pub struct ContestWithParticipants {
    pub contest: Contest,
    pub participants: Vec<ContestParticipant>,
}
