use uuid::Uuid;

use crate::dto::battle_card::{BattleCardData, CreatorSnapshot, NewBattleCard};
use crate::error::{Result, StorageError};
use crate::models::{ContestWithParticipants, Requester};
use crate::store::{BattleCardStore, InsertOutcome};

/// Number of participants a contest needs before a card can be printed.
pub const PARTICIPANTS_PER_BATTLE: usize = 2;

/// Hands out battle cards: one per (contest, requester), each with a fresh
/// card number.
pub struct BattleCardAllocator<S> {
    store: S,
}

impl<S: BattleCardStore> BattleCardAllocator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return the card for `(contest_id, requester)`, creating it on first use.
    ///
    /// An existing card is returned as stored, without looking at the contest
    /// again, so later profile changes never alter a printed card.
    #[tracing::instrument(skip(self, requester), fields(requester = %requester))]
    pub async fn ensure_battle_card(
        &self,
        contest_id: &str,
        requester: &Requester,
    ) -> Result<BattleCardData> {
        if contest_id.trim().is_empty() {
            return Err(StorageError::InvalidArgument(
                "contestId must not be empty".to_string(),
            ));
        }

        if let Some(existing) = self.store.find_card_by_key(contest_id, requester).await? {
            tracing::debug!(card_number = existing.card_number, "Returning existing battle card");
            return Ok(existing.into_data());
        }

        let contest = self.store.find_contest_with_participants(contest_id).await?;
        let new_card = build_new_card(&contest, requester)?;

        match self.store.insert_card(&new_card).await? {
            InsertOutcome::Created(card) => {
                tracing::info!(
                    card_id = %card.id,
                    card_number = card.card_number,
                    "Battle card created"
                );
                Ok(card.into_data())
            }
            InsertOutcome::Conflict => {
                tracing::warn!(
                    "Concurrent battle card insert detected, returning the stored card"
                );
                self.store
                    .find_card_by_key(contest_id, requester)
                    .await?
                    .map(|card| card.into_data())
                    .ok_or_else(|| {
                        StorageError::ConstraintViolation(
                            "Battle card conflict but no stored card found".to_string(),
                        )
                    })
            }
        }
    }

    /// Look a card up by its id. Unknown or malformed ids yield `None`.
    pub async fn get_battle_card(&self, card_id: &str) -> Result<Option<BattleCardData>> {
        let Ok(id) = Uuid::parse_str(card_id) else {
            return Ok(None);
        };

        let card = self.store.find_card_by_id(id).await?;
        Ok(card.map(|card| card.into_data()))
    }

    pub async fn get_contest(&self, contest_id: &str) -> Result<ContestWithParticipants> {
        self.store.find_contest_with_participants(contest_id).await
    }
}

fn build_new_card(
    contest: &ContestWithParticipants,
    requester: &Requester,
) -> Result<NewBattleCard> {
    let [creator_one, creator_two] = contest.participants.as_slice() else {
        return Err(StorageError::InvalidState(format!(
            "Battle must have exactly {} participants, contest {} has {}",
            PARTICIPANTS_PER_BATTLE,
            contest.contest.contest_id,
            contest.participants.len()
        )));
    };

    Ok(NewBattleCard {
        contest_id: contest.contest.contest_id.clone(),
        requester: requester.clone(),
        creator_one: CreatorSnapshot::from(creator_one),
        creator_two: CreatorSnapshot::from(creator_two),
    })
}
