//! Canned reply used when nothing relevant was found or the pipeline failed.

use crate::config::ChatbotCfg;
use crate::identity::personality::Personality;
use crate::random::{self, RandomSource};

pub const FALLBACK_PARAGRAPHS: [&str; 4] = [
    "Hmm, I don't have a specific answer for that one yet, but I'd love to help you find what you're looking for!",
    "That's an interesting question! I may not have the exact details on it, but there's plenty I can share about what we do.",
    "I'm still learning about that topic, though I can point you toward the things I know best.",
    "Great question! I couldn't find a precise match in what I know, so let me suggest a few places to start.",
];

pub const SUGGESTIONS: [&str; 10] = [
    "Our software development services",
    "Where our offices are located",
    "How to contact our team",
    "The technologies we work with",
    "Career opportunities at KNSOFT",
    "Our company history and experience",
    "Industries we serve",
    "Our AI and machine learning solutions",
    "How our development process works",
    "Why clients choose us",
];

pub const RESPONSE_VARIATIONS: [&str; 5] = [
    "What would you like to know more about?",
    "Just ask, and I'll share what I know!",
    "Which of these sounds most interesting to you?",
    "Feel free to rephrase your question, too!",
    "I'm here whenever you're ready!",
];

const SUGGESTION_HEADER: &str = "Here are a few things I can tell you about:";

/// Builds fallback replies. The result always goes through the personality layer.
#[derive(Debug, Clone, Copy)]
pub struct FallbackComposer {
    suggestion_count: usize,
    personality: Personality,
}

impl Default for FallbackComposer {
    fn default() -> Self {
        Self::from_cfg(&ChatbotCfg::default())
    }
}

impl FallbackComposer {
    pub fn from_cfg(cfg: &ChatbotCfg) -> Self {
        Self {
            suggestion_count: cfg.suggestion_count,
            personality: Personality::from_cfg(cfg),
        }
    }

    /// Draw order: paragraph, suggestions, closer, then the personality draws.
    pub fn compose(&self, query: &str, rng: &mut dyn RandomSource) -> String {
        let paragraph = random::choose(rng, &FALLBACK_PARAGRAPHS);
        let suggestions = random::sample_indices(rng, SUGGESTIONS.len(), self.suggestion_count)
            .into_iter()
            .map(|i| format!("• {}", SUGGESTIONS[i]))
            .collect::<Vec<_>>()
            .join("\n");
        let closer = random::choose(rng, &RESPONSE_VARIATIONS);

        let draft = format!("{paragraph}\n\n{SUGGESTION_HEADER}\n{suggestions}\n\n{closer}");
        self.personality.enhance(&draft, query, rng)
    }
}
