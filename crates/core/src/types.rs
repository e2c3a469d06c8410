use serde::{Deserialize, Serialize};

// ── Knowledge types ─────────────────────────────────────────────

/// One static block of website content plus its retrieval keywords.
/// Section ids are not unique; lookups take the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeSection {
    /// Originating marketing page tag (e.g. "home", "services").
    pub page: &'static str,
    /// Semantic id within the page (e.g. "core_services").
    pub section: &'static str,
    /// Paragraph returned to the visitor.
    pub content: &'static str,
    /// Short phrases matched against query tokens.
    pub keywords: &'static [&'static str],
    /// One sentence describing the section, used as a tertiary signal.
    pub context: &'static str,
}

/// A knowledge section with its per-query relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSection {
    pub section: KnowledgeSection,
    pub score: i32,
}

/// Company profile values interpolated into replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFacts {
    pub name: String,
    pub founded: String,
    pub experience: String,
    pub clients: String,
    pub countries: String,
    pub projects: String,
    pub support: String,
    pub headquarters: String,
    /// Presentation order.
    pub branches: Vec<String>,
    pub email: String,
    pub tagline: String,
}

// ── Classification types ────────────────────────────────────────

/// Query category picked by the intent classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Location,
    SpecificContact,
    SpecificService,
    SpecificCompanyFact,
    Greeting,
    About,
    Services,
    Contact,
    Technology,
    Careers,
    Generic,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Location => "location",
            Intent::SpecificContact => "specific_contact",
            Intent::SpecificService => "specific_service",
            Intent::SpecificCompanyFact => "specific_company_fact",
            Intent::Greeting => "greeting",
            Intent::About => "about",
            Intent::Services => "services",
            Intent::Contact => "contact",
            Intent::Technology => "technology",
            Intent::Careers => "careers",
            Intent::Generic => "generic",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone used by the personality layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Enthusiastic,
    Professional,
    Friendly,
    Innovative,
    Helpful,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Enthusiastic => "enthusiastic",
            Mood::Professional => "professional",
            Mood::Friendly => "friendly",
            Mood::Innovative => "innovative",
            Mood::Helpful => "helpful",
        }
    }
}

// ── Runtime types ───────────────────────────────────────────────

/// Snapshot broadcast by the chat runtime for the status bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotStatus {
    pub answered: u64,
    pub fallbacks: u64,
    pub last_intent: Option<Intent>,
    pub last_matches: usize,
}
