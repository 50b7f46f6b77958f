//! In-memory [`BattleCardStore`] for tests.
//!
//! Keeps the same guarantees the Postgres schema gives: one card per
//! (contest, requester) and a counter that only advances on a successful
//! insert.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use uuid::Uuid;

use super::{BattleCardStore, InsertOutcome};
use crate::dto::battle_card::NewBattleCard;
use crate::error::{Result, StorageError};
use crate::models::{
    BattleCard, Contest, ContestParticipant, ContestWithParticipants, ProfileData, Requester,
};

#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    contests: HashMap<String, ContestWithParticipants>,
    cards: Vec<BattleCard>,
    last_number: i64,
    race_next_insert: bool,
    unavailable: bool,
}

impl Inner {
    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn find_by_key(&self, contest_id: &str, requester: &Requester) -> Option<&BattleCard> {
        self.cards.iter().find(|card| {
            card.contest_id == contest_id && card.created_by.as_deref() == requester.as_column()
        })
    }

    fn push_card(&mut self, new_card: &NewBattleCard) -> BattleCard {
        self.last_number += 1;
        let card = BattleCard {
            id: Uuid::new_v4(),
            card_number: self.last_number,
            contest_id: new_card.contest_id.clone(),
            created_by: new_card.requester.as_column().map(str::to_string),
            battle_data: Json(new_card.snapshot(self.last_number)),
            created_at: Utc::now().naive_utc(),
        };
        self.cards.push(card.clone());
        card
    }
}

/// Builds a participant row for seeding an [`InMemoryStore`].
pub fn participant(
    contest_id: &str,
    handle: &str,
    profile: Option<ProfileData>,
) -> ContestParticipant {
    ContestParticipant {
        participant_id: Uuid::new_v4(),
        contest_id: contest_id.to_string(),
        handle: handle.to_string(),
        wallet_address: None,
        zora_profile: None,
        zora_profile_data: profile.map(Json),
        position: 0,
        created_at: Utc::now().naive_utc(),
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds a contest whose participants keep the order given here.
    pub fn add_contest(
        &self,
        contest_id: &str,
        name: &str,
        participants: Vec<ContestParticipant>,
    ) {
        let participants = participants
            .into_iter()
            .enumerate()
            .map(|(position, mut p)| {
                p.contest_id = contest_id.to_string();
                p.position = position as i32;
                p
            })
            .collect();

        let contest = Contest {
            contest_id: contest_id.to_string(),
            name: name.to_string(),
            status: "PENDING".to_string(),
            created_at: Utc::now().naive_utc(),
            battle_start_time: None,
            battle_end_time: None,
            content_deadline: None,
        };

        self.lock().contests.insert(
            contest_id.to_string(),
            ContestWithParticipants {
                contest,
                participants,
            },
        );
    }

    /// Replaces a participant's profile, as the contest-management side would.
    pub fn set_profile(&self, contest_id: &str, handle: &str, profile: Option<ProfileData>) {
        let mut inner = self.lock();
        if let Some(contest) = inner.contests.get_mut(contest_id) {
            for p in contest.participants.iter_mut().filter(|p| p.handle == handle) {
                p.zora_profile_data = profile.clone().map(Json);
            }
        }
    }

    /// Makes the next `insert_card` lose a race: a competing card for the same
    /// key is stored first and the call reports a conflict.
    pub fn race_next_insert(&self) {
        self.lock().race_next_insert = true;
    }

    /// Every call fails with a database error while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    pub fn card_count(&self) -> usize {
        self.lock().cards.len()
    }

    pub fn cards(&self) -> Vec<BattleCard> {
        self.lock().cards.clone()
    }
}

#[async_trait]
impl BattleCardStore for InMemoryStore {
    async fn find_card_by_key(
        &self,
        contest_id: &str,
        requester: &Requester,
    ) -> Result<Option<BattleCard>> {
        let inner = self.lock();
        inner.check_available()?;
        Ok(inner.find_by_key(contest_id, requester).cloned())
    }

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<BattleCard>> {
        let inner = self.lock();
        inner.check_available()?;
        Ok(inner.cards.iter().find(|card| card.id == id).cloned())
    }

    async fn find_contest_with_participants(
        &self,
        contest_id: &str,
    ) -> Result<ContestWithParticipants> {
        let inner = self.lock();
        inner.check_available()?;
        inner
            .contests
            .get(contest_id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn insert_card(&self, new_card: &NewBattleCard) -> Result<InsertOutcome> {
        let mut inner = self.lock();
        inner.check_available()?;

        if !inner.contests.contains_key(&new_card.contest_id) {
            return Err(StorageError::NotFound);
        }

        if std::mem::take(&mut inner.race_next_insert) {
            let mut competitor = new_card.clone();
            competitor.creator_one.display_name =
                format!("{} (first)", competitor.creator_one.display_name);
            inner.push_card(&competitor);
        }

        if inner
            .find_by_key(&new_card.contest_id, &new_card.requester)
            .is_some()
        {
            return Ok(InsertOutcome::Conflict);
        }

        Ok(InsertOutcome::Created(inner.push_card(new_card)))
    }
}
