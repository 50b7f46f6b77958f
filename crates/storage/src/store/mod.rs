//! Storage handle used by the battle card allocator.
//!
//! The allocator only talks to a [`BattleCardStore`]; [`Database`] is the
//! Postgres implementation and `memory::InMemoryStore` the test double.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::Database;
use crate::dto::battle_card::NewBattleCard;
use crate::error::Result;
use crate::models::{BattleCard, ContestWithParticipants, Requester};
use crate::repository::battle_card::BattleCardRepository;
use crate::repository::contest::ContestRepository;

#[cfg(any(test, feature = "test-util"))]
pub mod memory;

/// Result of trying to insert a new card.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    Created(BattleCard),
    /// Another card already holds the (contest, requester) key.
    Conflict,
}

#[async_trait]
pub trait BattleCardStore: Send + Sync {
    async fn find_card_by_key(
        &self,
        contest_id: &str,
        requester: &Requester,
    ) -> Result<Option<BattleCard>>;

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<BattleCard>>;

    /// Fails with `StorageError::NotFound` when the contest does not exist.
    async fn find_contest_with_participants(
        &self,
        contest_id: &str,
    ) -> Result<ContestWithParticipants>;

    /// Allocates the next card number and inserts atomically.
    async fn insert_card(&self, new_card: &NewBattleCard) -> Result<InsertOutcome>;
}

#[async_trait]
impl BattleCardStore for Database {
    async fn find_card_by_key(
        &self,
        contest_id: &str,
        requester: &Requester,
    ) -> Result<Option<BattleCard>> {
        BattleCardRepository::new(self.pool())
            .find_by_key(contest_id, requester)
            .await
    }

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<BattleCard>> {
        BattleCardRepository::new(self.pool()).find_by_id(id).await
    }

    async fn find_contest_with_participants(
        &self,
        contest_id: &str,
    ) -> Result<ContestWithParticipants> {
        ContestRepository::new(self.pool())
            .find_with_participants(contest_id)
            .await
    }

    async fn insert_card(&self, new_card: &NewBattleCard) -> Result<InsertOutcome> {
        let inserted = BattleCardRepository::new(self.pool())
            .insert_next(new_card)
            .await?;

        Ok(match inserted {
            Some(card) => InsertOutcome::Created(card),
            None => InsertOutcome::Conflict,
        })
    }
}

#[async_trait]
impl<S> BattleCardStore for Arc<S>
where
    S: BattleCardStore + ?Sized,
{
    async fn find_card_by_key(
        &self,
        contest_id: &str,
        requester: &Requester,
    ) -> Result<Option<BattleCard>> {
        (**self).find_card_by_key(contest_id, requester).await
    }

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<BattleCard>> {
        (**self).find_card_by_id(id).await
    }

    async fn find_contest_with_participants(
        &self,
        contest_id: &str,
    ) -> Result<ContestWithParticipants> {
        (**self).find_contest_with_participants(contest_id).await
    }

    async fn insert_card(&self, new_card: &NewBattleCard) -> Result<InsertOutcome> {
        (**self).insert_card(new_card).await
    }
}
