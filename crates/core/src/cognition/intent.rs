//! Rule-based intent classification.
//!
//! Rules are checked in order and the first hit wins. Several keyword sets
//! overlap ("contact" vs "specific_contact"), so narrower intents come first.

use crate::types::Intent;

/// Ordered (intent, keywords) rules. Order is load-bearing.
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Location,
        &["where is", "where are", "located", "location", "address", "office"],
    ),
    (
        Intent::SpecificContact,
        &["email", "phone", "contact number", "how to contact", "reach"],
    ),
    (
        Intent::SpecificService,
        &["what services", "what do you offer", "services list", "what can you do"],
    ),
    (
        Intent::SpecificCompanyFact,
        &["when founded", "how many years", "experience", "clients", "projects"],
    ),
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
    ),
    (
        Intent::About,
        &["about", "company", "knsoft", "who are you", "what is", "history", "founded"],
    ),
    (
        Intent::Services,
        &["service", "what do you do", "offer", "solutions", "capabilities", "development"],
    ),
    (
        Intent::Contact,
        &["contact", "reach", "phone", "email", "address", "location", "office"],
    ),
    (
        Intent::Technology,
        &["technology", "tech stack", "programming", "languages", "frameworks", "tools"],
    ),
    (
        Intent::Careers,
        &["career", "job", "hiring", "work", "employment", "position", "opportunity"],
    ),
];

/// Classify a query. Pure: the same query always yields the same intent.
pub fn classify(query: &str) -> Intent {
    let lower = query.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Generic)
}

/// True when `text` contains any of `needles` as a substring.
pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}
