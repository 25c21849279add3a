use std::sync::Arc;

use crate::assessment::narrative::NarrativeWriter;
use crate::assessment::trait_table::TraitTable;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend. Default: PgStore.
    pub store: Arc<dyn Store>,
    /// Narrative backend. Default: LlmNarrativeWriter.
    pub narrator: Arc<dyn NarrativeWriter>,
    /// Question/answer → trait lookup, fixed for the life of the process.
    pub traits: Arc<TraitTable>,
}
