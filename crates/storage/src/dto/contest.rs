use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{ContestParticipant, ContestWithParticipants, ProfileData};

/// Response containing a contest and its participants in stored order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContestResponse {
    pub contest_id: String,
    pub name: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub battle_start_time: Option<NaiveDateTime>,
    pub battle_end_time: Option<NaiveDateTime>,
    pub content_deadline: Option<NaiveDateTime>,
    pub participants: Vec<ParticipantResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub participant_id: Uuid,
    pub handle: String,
    pub wallet_address: Option<String>,
    pub zora_profile: Option<String>,
    pub zora_profile_data: Option<ProfileData>,
}

impl From<ContestParticipant> for ParticipantResponse {
    fn from(participant: ContestParticipant) -> Self {
        Self {
            participant_id: participant.participant_id,
            handle: participant.handle,
            wallet_address: participant.wallet_address,
            zora_profile: participant.zora_profile,
            zora_profile_data: participant.zora_profile_data.map(|json| json.0),
        }
    }
}

impl From<ContestWithParticipants> for ContestResponse {
    fn from(value: ContestWithParticipants) -> Self {
        let contest = value.contest;
        Self {
            contest_id: contest.contest_id,
            name: contest.name,
            status: contest.status,
            created_at: contest.created_at,
            battle_start_time: contest.battle_start_time,
            battle_end_time: contest.battle_end_time,
            content_deadline: contest.content_deadline,
            participants: value
                .participants
                .into_iter()
                .map(ParticipantResponse::from)
                .collect(),
        }
    }
}
