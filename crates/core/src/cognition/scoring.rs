//! Lexical relevance scoring over the knowledge base.
//!
//! Pure substring matching, no index: the knowledge base is a dozen
//! sections and every query scans all of them.

use crate::config::ChatbotCfg;
use crate::types::{KnowledgeSection, ScoredSection};

/// Scores knowledge sections against a free-text query.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer {
    max_results: usize,
    short_token_max: usize,
    keyword_weight: i32,
    content_weight: i32,
    context_weight: i32,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::from_cfg(&ChatbotCfg::default())
    }
}

impl RelevanceScorer {
    pub fn from_cfg(cfg: &ChatbotCfg) -> Self {
        Self {
            max_results: cfg.max_results,
            short_token_max: cfg.short_token_max,
            keyword_weight: cfg.keyword_weight,
            content_weight: cfg.content_weight,
            context_weight: cfg.context_weight,
        }
    }

    /// Lowercased whitespace tokens longer than `short_token_max` chars.
    pub fn tokenize(&self, query: &str) -> Vec<String> {
        query
            .to_lowercase()
            .split_whitespace()
            .filter(|t| t.chars().count() > self.short_token_max)
            .map(str::to_owned)
            .collect()
    }

    /// Top sections by score, highest first. Ties keep knowledge-base order.
    /// Sections scoring zero are dropped.
    pub fn score(&self, query: &str, sections: &[KnowledgeSection]) -> Vec<ScoredSection> {
        let tokens = self.tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredSection> = sections
            .iter()
            .map(|section| ScoredSection {
                section: *section,
                score: self.score_section(&tokens, section),
            })
            .filter(|s| s.score > 0)
            .collect();

        // sort_by is stable: equal scores stay in encounter order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.max_results);
        scored
    }

    fn score_section(&self, tokens: &[String], section: &KnowledgeSection) -> i32 {
        let mut score = 0;

        for keyword in section.keywords {
            let keyword = keyword.to_lowercase();
            if tokens
                .iter()
                .any(|t| keyword.contains(t.as_str()) || t.contains(keyword.as_str()))
            {
                score += self.keyword_weight;
            }
        }

        let content = section.content.to_lowercase();
        for token in tokens {
            if content.contains(token.as_str()) {
                score += self.content_weight;
            }
        }

        let context = section.context.to_lowercase();
        if tokens.iter().any(|t| context.contains(t.as_str())) {
            score += self.context_weight;
        }

        score
    }
}
