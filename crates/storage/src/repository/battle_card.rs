use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::battle_card::NewBattleCard;
use crate::error::{Result, StorageError};
use crate::models::{BattleCard, Requester};

/// Repository for battle card rows
pub struct BattleCardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BattleCardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the card issued for a (contest, requester) pair
    pub async fn find_by_key(
        &self,
        contest_id: &str,
        requester: &Requester,
    ) -> Result<Option<BattleCard>> {
        // IS NOT DISTINCT FROM so that the anonymous requester matches NULL
        let card = sqlx::query_as::<_, BattleCard>(
            r#"
            SELECT id, card_number, contest_id, created_by, battle_data, created_at
            FROM battle_cards
            WHERE contest_id = $1 AND created_by IS NOT DISTINCT FROM $2
            "#,
        )
        .bind(contest_id)
        .bind(requester.as_column())
        .fetch_optional(self.pool)
        .await?;

        Ok(card)
    }

    /// Find a card by its own id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BattleCard>> {
        let card = sqlx::query_as::<_, BattleCard>(
            r#"
            SELECT id, card_number, contest_id, created_by, battle_data, created_at
            FROM battle_cards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(card)
    }

    /// Allocate the next card number and insert the card in one transaction.
    ///
    /// Returns `None` when a card for the same (contest, requester) pair
    /// already exists; the transaction is rolled back so the number is not
    /// consumed.
    pub async fn insert_next(&self, new_card: &NewBattleCard) -> Result<Option<BattleCard>> {
        let mut tx = self.pool.begin().await?;

        // Row lock on the counter is held until commit/rollback, so concurrent
        // allocations queue up here instead of reading the same value.
        let card_number: i64 = sqlx::query_scalar(
            r#"
            UPDATE battle_card_counter
            SET last_number = last_number + 1
            WHERE id = 1
            RETURNING last_number
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let snapshot = new_card.snapshot(card_number);

        let inserted = sqlx::query_as::<_, BattleCard>(
            r#"
            INSERT INTO battle_cards (id, card_number, contest_id, created_by, battle_data)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT ON CONSTRAINT battle_cards_contest_requester_key DO NOTHING
            RETURNING id, card_number, contest_id, created_by, battle_data, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(card_number)
        .bind(&new_card.contest_id)
        .bind(new_card.requester.as_column())
        .bind(Json(&snapshot))
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::NotFound
            } else if err.is_unique_violation() {
                StorageError::ConstraintViolation("Card number already issued".to_string())
            } else {
                err
            }
        })?;

        match inserted {
            Some(card) => {
                tx.commit().await?;
                Ok(Some(card))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }
}
