use storage::{
    dto::battle_card::BattleCardData, error::Result, models::Requester,
    services::battle_card_allocator::BattleCardAllocator,
};

use crate::features::battle_cards::renderer::{RenderError, RenderedImage};
use crate::state::AppState;

/// Get or create the battle card for a contest and requester
pub async fn ensure_battle_card(
    state: &AppState,
    contest_id: &str,
    requester: &Requester,
) -> Result<BattleCardData> {
    let allocator = BattleCardAllocator::new(state.store.clone());
    allocator.ensure_battle_card(contest_id, requester).await
}

/// Get a battle card by id
pub async fn get_battle_card(state: &AppState, card_id: &str) -> Result<Option<BattleCardData>> {
    let allocator = BattleCardAllocator::new(state.store.clone());
    allocator.get_battle_card(card_id).await
}

/// Render the image for a battle card
pub async fn render_battle_card(
    state: &AppState,
    card: &BattleCardData,
) -> std::result::Result<RenderedImage, RenderError> {
    state.renderer.render(card).await
}
