use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashMap;

/// All chatbot tunables. Loaded from the `chatbot_config` table when a
/// database is configured; the first load seeds the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotCfg {
    // relevance scoring
    pub max_results: usize,
    pub short_token_max: usize,
    pub keyword_weight: i32,
    pub content_weight: i32,
    pub context_weight: i32,

    // personality
    pub intro_probability: f64,

    // fallback
    pub suggestion_count: usize,

    // session channels
    pub input_buffer: usize,
    pub output_buffer: usize,
}

impl Default for ChatbotCfg {
    fn default() -> Self {
        Self {
            max_results: 5,
            short_token_max: 2,
            keyword_weight: 3,
            content_weight: 2,
            context_weight: 1,
            intro_probability: 0.3,
            suggestion_count: 4,
            input_buffer: 64,
            output_buffer: 64,
        }
    }
}

impl ChatbotCfg {
    /// Load config from `chatbot_config`. If the table is empty, seed with defaults.
    pub async fn load(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM chatbot_config")
                .fetch_all(pool)
                .await?;

        if rows.is_empty() {
            let cfg = Self::default();
            cfg.seed(pool).await?;
            return Ok(cfg);
        }

        let map: HashMap<String, String> = rows.into_iter().collect();
        Ok(Self::from_map(&map))
    }

    async fn seed(&self, pool: &PgPool) -> Result<(), sqlx::Error> {
        for (key, value, desc) in &self.to_entries() {
            sqlx::query(
                "INSERT INTO chatbot_config (key, value, description) VALUES ($1, $2, $3) \
                 ON CONFLICT (key) DO NOTHING",
            )
            .bind(key)
            .bind(value)
            .bind(desc)
            .execute(pool)
            .await?;
        }
        Ok(())
    }

    pub fn from_map(m: &HashMap<String, String>) -> Self {
        let d = Self::default();
        Self {
            max_results: get_or(m, "max_results", d.max_results),
            short_token_max: get_or(m, "short_token_max", d.short_token_max),
            keyword_weight: get_or(m, "keyword_weight", d.keyword_weight),
            content_weight: get_or(m, "content_weight", d.content_weight),
            context_weight: get_or(m, "context_weight", d.context_weight),
            intro_probability: get_or(m, "intro_probability", d.intro_probability).clamp(0.0, 1.0),
            suggestion_count: get_or(m, "suggestion_count", d.suggestion_count),
            input_buffer: get_or(m, "input_buffer", d.input_buffer).max(1),
            output_buffer: get_or(m, "output_buffer", d.output_buffer).max(1),
        }
    }

    fn to_entries(&self) -> Vec<(&str, String, &str)> {
        vec![
            ("max_results", self.max_results.to_string(), "Max sections returned by the scorer"),
            ("short_token_max", self.short_token_max.to_string(), "Query tokens this short or shorter are ignored"),
            ("keyword_weight", self.keyword_weight.to_string(), "Score per matching keyword"),
            ("content_weight", self.content_weight.to_string(), "Score per token found in content"),
            ("context_weight", self.context_weight.to_string(), "Score when any token is in context"),
            ("intro_probability", self.intro_probability.to_string(), "Chance of a creative intro line"),
            ("suggestion_count", self.suggestion_count.to_string(), "Suggestions listed in fallback replies"),
            ("input_buffer", self.input_buffer.to_string(), "Query channel capacity"),
            ("output_buffer", self.output_buffer.to_string(), "Reply channel capacity"),
        ]
    }
}

fn get_or<T: std::str::FromStr>(map: &HashMap<String, String>, key: &str, default: T) -> T {
    map.get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
