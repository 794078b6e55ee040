// ── Frame-data query facade ──
//
// The one call the chat layer makes. Every failure becomes reply text.

use tracing::debug;

use crate::error::LookupError;
use crate::registry::AliasRegistry;
use crate::resolve::ResolutionEngine;
use crate::store::DataStore;

/// Answers `(character, move, property)` questions from the live dataset.
pub struct FrameDataService {
    registry: AliasRegistry,
    store: DataStore,
    engine: ResolutionEngine,
}

impl FrameDataService {
    pub fn new(store: DataStore) -> Self {
        Self::with_parts(AliasRegistry::new(), store, ResolutionEngine::default())
    }

    pub fn with_parts(registry: AliasRegistry, store: DataStore, engine: ResolutionEngine) -> Self {
        Self {
            registry,
            store,
            engine,
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Resolve a question, keeping the failure reason typed.
    ///
    /// An unknown character short-circuits before any data is fetched.
    pub async fn lookup(
        &self,
        character: &str,
        move_query: &str,
        property: &str,
    ) -> Result<String, LookupError> {
        let Some(resolved) = self.registry.resolve(character) else {
            debug!(alias = character, "unknown character alias");
            return Err(LookupError::CharacterNotFound);
        };

        let records = self.store.current_dataset().await;
        debug!(
            character = resolved.code,
            query = move_query,
            property,
            records = records.len(),
            "resolving frame data"
        );
        self.engine.resolve(&records, resolved, move_query, property)
    }

    /// Resolve a question into reply text. Never fails.
    pub async fn answer(&self, character: &str, move_query: &str, property: &str) -> String {
        match self.lookup(character, move_query, property).await {
            Ok(reply) => reply,
            Err(e) => e.to_string(),
        }
    }
}
