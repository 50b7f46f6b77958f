use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ContestParticipant, Requester};

/// Snapshot of a battle as printed on a battle card.
///
/// This is what gets stored in `battle_cards.battle_data` and what every read
/// returns; it is never rebuilt from live contest data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BattleCardData {
    /// Contest the card was derived from
    pub battle_id: String,
    pub creator_one: CreatorSnapshot,
    pub creator_two: CreatorSnapshot,
    pub card_number: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSnapshot {
    pub username: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub handle: String,
}

impl From<&ContestParticipant> for CreatorSnapshot {
    fn from(participant: &ContestParticipant) -> Self {
        Self {
            username: participant.handle.clone(),
            display_name: participant.display_name().to_string(),
            avatar: participant.avatar().map(str::to_string),
            handle: participant.handle.clone(),
        }
    }
}

/// Everything needed to insert a card except its number, which the store
/// allocates inside the insert transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBattleCard {
    pub contest_id: String,
    pub requester: Requester,
    pub creator_one: CreatorSnapshot,
    pub creator_two: CreatorSnapshot,
}

impl NewBattleCard {
    pub fn snapshot(&self, card_number: i64) -> BattleCardData {
        BattleCardData {
            battle_id: self.contest_id.clone(),
            creator_one: self.creator_one.clone(),
            creator_two: self.creator_two.clone(),
            card_number,
        }
    }
}

/// Request payload for fetching or creating a battle card
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnsureBattleCardRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "contestId must be between 1 and 255 characters"
    ))]
    pub contest_id: String,

    #[validate(length(max = 255))]
    pub created_by: Option<String>,
}

impl EnsureBattleCardRequest {
    pub fn requester(&self) -> Requester {
        Requester::from_optional(self.created_by.clone())
    }
}
