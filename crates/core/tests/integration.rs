//! End-to-end tests for the chatbot pipeline.
//!
//! Query → scoring → classification → composition → (fallback) personality,
//! with scripted or seeded randomness so template choice is reproducible.

use std::sync::Arc;

use knsoft_core::chatbot::Chatbot;
use knsoft_core::cognition::fallback::{FALLBACK_PARAGRAPHS, SUGGESTIONS};
use knsoft_core::cognition::intent;
use knsoft_core::cognition::scoring::RelevanceScorer;
use knsoft_core::config::ChatbotCfg;
use knsoft_core::io::input;
use knsoft_core::knowledge::{BUILTIN_SECTIONS, KnowledgeBase};
use knsoft_core::random::{self, ScriptedRandom};
use knsoft_core::runtime::ChatRuntime;
use knsoft_core::types::Intent;

fn scripted_bot(values: Vec<f64>) -> Chatbot {
    Chatbot::with_parts(
        &ChatbotCfg::default(),
        Arc::new(KnowledgeBase::builtin()),
        Box::new(ScriptedRandom::new(values)),
    )
}

fn seeded_bot(seed: u64) -> Chatbot {
    Chatbot::with_parts(
        &ChatbotCfg::default(),
        Arc::new(KnowledgeBase::builtin()),
        Box::new(random::seeded(seed)),
    )
}

fn suggestion_lines(text: &str) -> usize {
    text.lines()
        .filter(|l| l.starts_with("• ") || l.starts_with("✅ "))
        .filter(|l| SUGGESTIONS.iter().any(|s| l.ends_with(s)))
        .count()
}

/// "hello" → greeting template with the company name, no personality lines.
#[test]
fn greeting_scenario() {
    for seed in 0..10 {
        let mut bot = seeded_bot(seed);
        let reply = bot.reply("hello");
        assert_eq!(reply.intent, Some(Intent::Greeting));
        assert!(!reply.fell_back);
        assert!(reply.text.contains("KNSOFT Technologies"), "{}", reply.text);
        // friendly-mood touch lines would appear if personality ran
        assert!(!reply.text.contains("😊 It's always a pleasure chatting with you!"));
        assert!(!reply.text.contains("✅"));
        assert!(reply.text.ends_with('?'), "{}", reply.text);
    }
}

/// "where is your office" → general block with all three office emails.
#[test]
fn general_location_scenario() {
    let mut bot = scripted_bot(vec![0.0]);
    let reply = bot.reply("where is your office");
    assert_eq!(reply.intent, Some(Intent::Location));
    for email in ["info@knsofttech.com", "usa@knsofttech.com", "guntur@knsofttech.com"] {
        assert!(reply.text.contains(email), "missing {email}");
    }
    assert!(reply.text.ends_with("Which office would you like to know more about?"));
}

/// Unmatched query → one fallback paragraph and four suggestions, with
/// the enthusiastic tone line appended.
#[test]
fn fallback_scenario() {
    for seed in 0..20 {
        let mut bot = seeded_bot(seed);
        let reply = bot.reply("asdf qqqq");
        assert!(reply.fell_back);
        assert_eq!(reply.intent, None);
        let hits = FALLBACK_PARAGRAPHS
            .iter()
            .filter(|p| reply.text.contains(*p))
            .count();
        assert_eq!(hits, 1, "{}", reply.text);
        assert_eq!(suggestion_lines(&reply.text), 4, "{}", reply.text);
    }
}

#[test]
fn fallback_intro_follows_coin_flip() {
    // paragraph, 4 suggestions, closer, touch, coin 0.1 → intro, intro index 0
    let mut with_intro = scripted_bot(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.0]);
    let text = with_intro.reply("asdf qqqq").text;
    assert!(text.starts_with("🎯 Great question!\n\n"), "{text}");
    assert!(text.ends_with("🚀 We're excited to help you build something amazing!"));

    // same draws but coin 0.9 → no intro
    let mut without = scripted_bot(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.9]);
    let text = without.reply("asdf qqqq").text;
    assert!(text.starts_with(FALLBACK_PARAGRAPHS[0]), "{text}");
}

/// "how many clients do you have" → exact clients sentence.
#[test]
fn clients_fact_scenario() {
    let mut bot = seeded_bot(7);
    let reply = bot.reply("how many clients do you have");
    assert_eq!(reply.intent, Some(Intent::SpecificCompanyFact));
    assert_eq!(
        reply.text,
        "👥 We have served 500+ satisfied clients across 25+ countries worldwide."
    );
}

#[test]
fn houston_location_queries_get_usa_block() {
    let mut bot = scripted_bot(vec![0.5]);
    for query in [
        "where is the houston office",
        "Houston address please",
        "office in houston or hyderabad",
        "are you located in Houston?",
    ] {
        let reply = bot.reply(query);
        assert_eq!(reply.intent, Some(Intent::Location), "{query}");
        assert!(reply.text.contains("usa@knsofttech.com"), "{query}");
        assert!(reply.text.starts_with("🌎 **USA Branch - Houston, Texas**"), "{query}");
    }
}

#[test]
fn short_token_queries_fall_back() {
    let mut bot = seeded_bot(1);
    for query in ["hi", "is it ok", "a b c", ""] {
        let reply = bot.reply(query);
        assert!(reply.fell_back, "{query}");
        assert_eq!(reply.matches, 0, "{query}");
    }
}

#[test]
fn scoring_is_bounded_sorted_and_stable() {
    let scorer = RelevanceScorer::default();
    let position = |id: &str| BUILTIN_SECTIONS.iter().position(|s| s.section == id).unwrap();
    for query in [
        "services development cloud technology careers contact office",
        "tell me about your company history",
        "what technologies do you use for mobile apps",
        "support",
        "hello there",
    ] {
        let scored = scorer.score(query, BUILTIN_SECTIONS);
        assert!(scored.len() <= 5, "{query}");
        for w in scored.windows(2) {
            assert!(w[0].score >= w[1].score, "{query}");
            if w[0].score == w[1].score {
                assert!(position(w[0].section.section) < position(w[1].section.section), "{query}");
            }
        }
    }
}

#[test]
fn classification_is_pure() {
    for query in ["hello", "where is your office", "asdf qqqq", "jobs at knsoft"] {
        let first = intent::classify(query);
        assert!((0..5).all(|_| intent::classify(query) == first));
    }
}

#[test]
fn every_reply_is_non_empty() {
    let mut bot = seeded_bot(42);
    for query in [
        "about knsoft",
        "what services do you provide",
        "contact",
        "tech stack",
        "careers",
        "industries",
        "email",
        "phone number",
        "when founded",
        "mission and vision",
    ] {
        let reply = bot.reply(query);
        assert!(!reply.text.trim().is_empty(), "{query}");
    }
}

#[tokio::test]
async fn runtime_round_trip() {
    let cfg = ChatbotCfg::default();
    let (mut rt, tx, mut rx, status_rx) = ChatRuntime::new(&cfg, scripted_bot(vec![0.0]));
    let handle = tokio::spawn(async move { rt.run().await });

    let id = input::submit_text(&tx, "where is your office").await.unwrap();
    let msg = rx.recv().await.unwrap();
    assert_eq!(msg.query_id, id);
    assert!(msg.content.contains("usa@knsofttech.com"));

    drop(tx);
    handle.await.unwrap();
    assert_eq!(status_rx.borrow().answered, 1);
}
