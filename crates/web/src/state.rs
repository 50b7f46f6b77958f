use std::sync::Arc;

use storage::store::BattleCardStore;

use crate::features::battle_cards::renderer::CardRenderer;

/// Shared handles injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BattleCardStore>,
    pub renderer: Arc<dyn CardRenderer>,
    pub public_base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BattleCardStore>,
        renderer: Arc<dyn CardRenderer>,
        public_base_url: &str,
    ) -> Self {
        Self {
            store,
            renderer,
            public_base_url: Arc::from(public_base_url.trim_end_matches('/')),
        }
    }
}
