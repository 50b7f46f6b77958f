use chrono::NaiveDateTime;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::battle_card::BattleCardData;

/// Stored battle card row. The snapshot in `battle_data` is written once and
/// never re-derived from the contest.
#[derive(Debug, Clone, FromRow)]
pub struct BattleCard {
    pub id: Uuid,
    pub card_number: i64,
    pub contest_id: String,
    pub created_by: Option<String>,
    pub battle_data: Json<BattleCardData>,
    pub created_at: NaiveDateTime,
}

impl BattleCard {
    pub fn into_data(self) -> BattleCardData {
        self.battle_data.0
    }
}
