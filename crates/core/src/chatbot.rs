//! Query → reply pipeline: score, classify, compose.
//!
//! Any pipeline failure is logged and answered with the fallback reply, so
//! callers always get text back.

use std::sync::Arc;

use crate::cognition::PipelineError;
use crate::cognition::compose::{Composer, Draft};
use crate::cognition::fallback::FallbackComposer;
use crate::cognition::intent;
use crate::cognition::scoring::RelevanceScorer;
use crate::config::ChatbotCfg;
use crate::knowledge::{self, KnowledgeBase};
use crate::random::{self, RandomSource};
use crate::types::Intent;

/// One answered query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Classified intent. None when nothing scored or the pipeline failed.
    pub intent: Option<Intent>,
    /// Number of scored sections.
    pub matches: usize,
    /// True when the text came from the fallback path.
    pub fell_back: bool,
}

pub struct Chatbot {
    knowledge: Arc<KnowledgeBase>,
    scorer: RelevanceScorer,
    composer: Composer,
    rng: Box<dyn RandomSource>,
}

impl Chatbot {
    /// Built-in knowledge base with an OS-seeded generator.
    pub fn new(cfg: &ChatbotCfg) -> Self {
        Self::with_parts(
            cfg,
            Arc::new(KnowledgeBase::builtin()),
            Box::new(random::from_entropy()),
        )
    }

    pub fn with_parts(
        cfg: &ChatbotCfg,
        knowledge: Arc<KnowledgeBase>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let composer = Composer::new(Arc::clone(&knowledge), FallbackComposer::from_cfg(cfg));
        Self {
            knowledge,
            scorer: RelevanceScorer::from_cfg(cfg),
            composer,
            rng,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Answer `query`. Never fails.
    pub async fn generate_response(&mut self, query: &str) -> String {
        self.reply(query).text
    }

    /// Answer `query` and report how the answer was produced.
    pub fn reply(&mut self, query: &str) -> Reply {
        match self.run_pipeline(query) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "pipeline failed, using fallback reply");
                let draft = self.composer.fallback(query, self.rng.as_mut());
                Reply {
                    text: draft.text,
                    intent: None,
                    matches: 0,
                    fell_back: true,
                }
            }
        }
    }

    fn run_pipeline(&mut self, query: &str) -> Result<Reply, PipelineError> {
        if self.knowledge.is_empty() {
            return Err(PipelineError::EmptyKnowledgeBase);
        }

        let sections = self.scorer.score(query, self.knowledge.sections());
        let top_score = sections.first().map(|s| s.score).unwrap_or(0);

        if sections.is_empty() {
            tracing::debug!(matches = 0, "no relevant sections, using fallback reply");
            let Draft { text, fallback } = self.composer.fallback(query, self.rng.as_mut());
            return Ok(Reply {
                text,
                intent: None,
                matches: 0,
                fell_back: fallback,
            });
        }

        let intent = intent::classify(query);
        tracing::debug!(
            intent = intent.as_str(),
            matches = sections.len(),
            top_score,
            "query classified"
        );

        let facts = knowledge::company_facts();
        let draft = self
            .composer
            .compose(intent, query, &sections, &facts, self.rng.as_mut())?;

        Ok(Reply {
            text: draft.text,
            intent: Some(intent),
            matches: sections.len(),
            fell_back: draft.fallback,
        })
    }
}

impl std::fmt::Debug for Chatbot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chatbot")
            .field("sections", &self.knowledge.len())
            .field("scorer", &self.scorer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cognition::fallback::FALLBACK_PARAGRAPHS;
    use crate::random::ScriptedRandom;

    fn bot(values: Vec<f64>) -> Chatbot {
        Chatbot::with_parts(
            &ChatbotCfg::default(),
            Arc::new(KnowledgeBase::builtin()),
            Box::new(ScriptedRandom::new(values)),
        )
    }

    #[test]
    fn scored_query_reports_intent_and_matches() {
        let mut bot = bot(vec![0.0]);
        let reply = bot.reply("where is your office");
        assert_eq!(reply.intent, Some(Intent::Location));
        assert!(reply.matches > 0);
        assert!(!reply.fell_back);
    }

    #[test]
    fn nothing_scored_skips_classification() {
        let mut bot = bot(vec![0.0]);
        let reply = bot.reply("asdf qqqq");
        assert_eq!(reply.intent, None);
        assert_eq!(reply.matches, 0);
        assert!(reply.fell_back);
        assert!(FALLBACK_PARAGRAPHS.iter().any(|p| reply.text.contains(p)));
    }

    #[test]
    fn empty_knowledge_base_degrades_to_fallback() {
        let mut bot = Chatbot::with_parts(
            &ChatbotCfg::default(),
            Arc::new(KnowledgeBase::new(vec![])),
            Box::new(ScriptedRandom::constant(0.0)),
        );
        let reply = bot.reply("tell me about your services");
        assert!(reply.fell_back);
        assert_eq!(reply.intent, None);
        assert!(FALLBACK_PARAGRAPHS.iter().any(|p| reply.text.contains(p)));
    }

    #[test]
    fn section_miss_keeps_intent() {
        let mut bot = bot(vec![0.0]);
        // only open_positions scores, so careers has no why_work_with_us
        let reply = bot.reply("vacancies position");
        assert_eq!(reply.intent, Some(Intent::Careers));
        assert!(reply.fell_back);
    }

    #[tokio::test]
    async fn generate_response_returns_text() {
        let mut bot = bot(vec![0.0]);
        let text = bot.generate_response("how many clients do you have").await;
        assert_eq!(
            text,
            "👥 We have served 500+ satisfied clients across 25+ countries worldwide."
        );
    }
}
