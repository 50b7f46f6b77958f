use storage::{
    error::{Result, StorageError},
    models::ContestWithParticipants,
    services::battle_card_allocator::BattleCardAllocator,
};

use crate::state::AppState;

/// Get a contest with its participants
pub async fn get_contest(state: &AppState, contest_id: &str) -> Result<ContestWithParticipants> {
    let allocator = BattleCardAllocator::new(state.store.clone());
    allocator.get_contest(contest_id).await
}

/// Like [`get_contest`], but an unknown contest is `None` instead of an error
pub async fn find_contest(
    state: &AppState,
    contest_id: &str,
) -> Result<Option<ContestWithParticipants>> {
    match get_contest(state, contest_id).await {
        Ok(contest) => Ok(Some(contest)),
        Err(StorageError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
