pub mod compose;
pub mod fallback;
pub mod intent;
pub mod scoring;

use crate::types::Intent;

/// Failure inside the scoring → classification → composition chain.
/// Never surfaced to visitors; the entry point swaps it for a fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("knowledge base is empty")]
    EmptyKnowledgeBase,
    #[error("no scored sections to answer {intent} query")]
    NoSections { intent: Intent },
}
