use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Contest, ContestParticipant, ContestWithParticipants};

/// Read-only repository for contests and their participants
pub struct ContestRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContestRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a contest by its identifier
    pub async fn find_by_id(&self, contest_id: &str) -> Result<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            SELECT contest_id, name, status, created_at,
                   battle_start_time, battle_end_time, content_deadline
            FROM contests
            WHERE contest_id = $1
            "#,
        )
        .bind(contest_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(contest)
    }

    /// Participants of a contest, first participant first
    pub async fn list_participants(&self, contest_id: &str) -> Result<Vec<ContestParticipant>> {
        let participants = sqlx::query_as::<_, ContestParticipant>(
            r#"
            SELECT participant_id, contest_id, handle, wallet_address,
                   zora_profile, zora_profile_data, position, created_at
            FROM contest_participants
            WHERE contest_id = $1
            ORDER BY position, created_at, participant_id
            "#,
        )
        .bind(contest_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Get a contest together with its ordered participants
    pub async fn find_with_participants(&self, contest_id: &str) -> Result<ContestWithParticipants> {
        let contest = self.find_by_id(contest_id).await?;
        let participants = self.list_participants(contest_id).await?;

        Ok(ContestWithParticipants {
            contest,
            participants,
        })
    }
}
