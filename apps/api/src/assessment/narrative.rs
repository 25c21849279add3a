//! Narrative generation: turns a scored profile into personalised prose.
//!
//! `AppState` holds an `Arc<dyn NarrativeWriter>`; production uses
//! `LlmNarrativeWriter`, tests swap in a stub.

use async_trait::async_trait;

use crate::assessment::prompts::NARRATIVE_PROMPT;
use crate::assessment::scoring::Profile;
use crate::llm_client::prompts::SECOND_PERSON_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

#[async_trait]
pub trait NarrativeWriter: Send + Sync {
    /// Failures surface as `LlmError`; callers decide what to do with them.
    async fn write(&self, profile: &Profile) -> Result<String, LlmError>;
}

/// Narrative writer backed by the Mistral chat API.
pub struct LlmNarrativeWriter(pub LlmClient);

#[async_trait]
impl NarrativeWriter for LlmNarrativeWriter {
    async fn write(&self, profile: &Profile) -> Result<String, LlmError> {
        let prompt = build_prompt(profile);
        self.0.call_text(&prompt, SECOND_PERSON_SYSTEM).await
    }
}

pub fn build_prompt(profile: &Profile) -> String {
    let traits = profile
        .traits
        .iter()
        .enumerate()
        .map(|(i, t)| format!("- Question {}: {} ({})", i + 1, t.category, t.label))
        .collect::<Vec<_>>()
        .join("\n");

    NARRATIVE_PROMPT
        .replace("{dominant}", profile.dominant.as_str())
        .replace("{traits}", &traits)
}
