use std::sync::LazyLock;

use regex::Regex;

use crate::cognition::intent::contains_any;
use crate::config::ChatbotCfg;
use crate::random::{self, RandomSource};
use crate::types::Mood;

/// Queries asking for hard facts get minimal formatting and no tone lines.
const FACTUAL_KEYWORDS: &[&str] = &[
    "where is", "where are", "located", "address", "email", "phone",
    "when founded", "how many", "founded in", "contact", "office",
];

/// Ordered mood rules. First hit wins; no hit means enthusiastic.
const MOOD_RULES: &[(Mood, &[&str])] = &[
    (Mood::Helpful, &["problem", "issue", "help"]),
    (Mood::Innovative, &["innovation", "ai", "technology"]),
    (Mood::Friendly, &["hello", "thanks"]),
    (Mood::Professional, &["business", "enterprise", "professional"]),
];

/// Phrases wrapped in bold wherever they appear.
const EMPHASIS_PHRASES: &[&str] = &[
    "KNSOFT Technologies",
    "13+ years",
    "500+ satisfied clients",
    "25+ countries",
    "1000+ projects",
    "24/7 support",
    "cutting-edge solutions",
];

const BULLET: &str = "•";
const CHECKMARK: &str = "✅";

static RE_SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\. ([A-Z])").unwrap());

static RE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = EMPHASIS_PHRASES
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap()
});

fn touches(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Enthusiastic => &[
            "🚀 We're excited to help you build something amazing!",
            "✨ Every great product starts with a conversation like this one!",
            "🎉 We love turning bold ideas into working software!",
            "💡 There's so much we could build together!",
            "🌟 Let's make your next project a success story!",
        ],
        Mood::Professional => &[
            "📊 Our team is ready to support your business objectives.",
            "🤝 We focus on measurable results and long-term partnerships.",
            "📈 Reliable delivery is at the heart of everything we do.",
            "🏢 Enterprises trust us with their most critical systems.",
            "✔️ We follow proven processes to keep your project on track.",
        ],
        Mood::Friendly => &[
            "😊 It's always a pleasure chatting with you!",
            "👋 Feel free to ask me anything else!",
            "🙌 Happy to help anytime!",
            "☕ Grab a coffee and ask away, I'm here!",
            "💬 I'm all ears if you have more questions!",
        ],
        Mood::Innovative => &[
            "🤖 Innovation is in our DNA.",
            "🔬 We're always exploring what's next in technology.",
            "⚡ Emerging tech is where we love to experiment.",
            "🧠 Smart solutions start with curious minds.",
            "🔮 We help businesses stay ahead of the curve.",
        ],
        Mood::Helpful => &[
            "🛠️ Let's solve this together!",
            "🤝 Our team is here to help you every step of the way.",
            "💪 No challenge is too big for our engineers.",
            "🧭 I'll do my best to point you in the right direction.",
            "📞 If you need more help, our support team is just a message away.",
        ],
    }
}

fn intros(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Enthusiastic => &[
            "🎯 Great question!",
            "🔥 Ooh, I love this one!",
            "🌈 Let's dive right in!",
            "🚀 Here's the exciting part!",
        ],
        Mood::Professional => &[
            "📋 Here's an overview for you.",
            "💼 Allow me to walk you through it.",
            "📌 Here are the key points.",
            "🗂️ Let me summarize that for you.",
        ],
        Mood::Friendly => &[
            "😄 Hey, glad you asked!",
            "🤗 Sure thing!",
            "👍 Happy to share!",
            "🙂 Of course!",
        ],
        Mood::Innovative => &[
            "💡 Here's where it gets interesting!",
            "🔭 Let's look at this from a fresh angle!",
            "⚙️ Time to geek out a little!",
            "🧪 Let's explore!",
        ],
        Mood::Helpful => &[
            "🧩 Let me help you with that.",
            "🔍 Let's figure this out.",
            "📝 Here's what I can tell you.",
            "🛟 I've got you covered!",
        ],
    }
}

/// Pick a mood from keywords in the lowercased query.
pub fn detect_mood(lower_query: &str) -> Mood {
    MOOD_RULES
        .iter()
        .find(|(_, keywords)| contains_any(lower_query, keywords))
        .map(|(mood, _)| *mood)
        .unwrap_or(Mood::Enthusiastic)
}

/// True when the query asks for a hard fact (address, email, dates).
pub fn is_factual(lower_query: &str) -> bool {
    contains_any(lower_query, FACTUAL_KEYWORDS)
}

/// Cosmetic post-processing: tone lines, emoji and emphasis markup.
#[derive(Debug, Clone, Copy)]
pub struct Personality {
    intro_probability: f64,
}

impl Default for Personality {
    fn default() -> Self {
        Self::from_cfg(&ChatbotCfg::default())
    }
}

impl Personality {
    pub fn from_cfg(cfg: &ChatbotCfg) -> Self {
        Self {
            intro_probability: cfg.intro_probability,
        }
    }

    /// Decorate `response` for `original_query`.
    ///
    /// Draw order: touch line, intro coin flip, then (if the flip passed)
    /// the intro line.
    pub fn enhance(&self, response: &str, original_query: &str, rng: &mut dyn RandomSource) -> String {
        let lower = original_query.to_lowercase();
        if is_factual(&lower) {
            return minimal_format(response);
        }

        let mood = detect_mood(&lower);
        tracing::debug!(mood = mood.as_str(), "personality mood selected");

        let touch = random::choose(rng, touches(mood));
        let text = if rng.next_f64() < self.intro_probability {
            let intro = random::choose(rng, intros(mood));
            format!("{intro}\n\n{response}\n\n{touch}")
        } else {
            format!("{response}\n\n{touch}")
        };

        format_final(&text)
    }
}

/// Formatting for factual replies: bullets are kept as they are.
pub fn minimal_format(response: &str) -> String {
    response.to_owned()
}

/// Paragraph breaks between sentences, checkmark bullets, bold key phrases.
pub fn format_final(text: &str) -> String {
    let text = RE_SENTENCE_BREAK.replace_all(text, ".\n\n$1");
    let text = text.replace(BULLET, CHECKMARK);
    RE_EMPHASIS.replace_all(&text, "**${1}**").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn mood_rules_in_order() {
        assert_eq!(detect_mood("i have a problem with technology"), Mood::Helpful);
        assert_eq!(detect_mood("tell me about innovation"), Mood::Innovative);
        // "ai" matches inside words too
        assert_eq!(detect_mood("again please"), Mood::Innovative);
        assert_eq!(detect_mood("hello"), Mood::Friendly);
        assert_eq!(detect_mood("thanks"), Mood::Friendly);
        assert_eq!(detect_mood("enterprise software"), Mood::Professional);
        assert_eq!(detect_mood("asdf qqqq"), Mood::Enthusiastic);
    }

    #[test]
    fn factual_queries_are_left_alone() {
        let p = Personality::default();
        let mut rng = ScriptedRandom::constant(0.0);
        let response = "• Line one. Then line two. KNSOFT Technologies";
        for q in ["where is HQ", "What's your EMAIL", "how many people", "contact me", "office?"] {
            assert_eq!(p.enhance(response, q, &mut rng), response, "{q}");
        }
    }

    #[test]
    fn touch_appended_without_intro() {
        let p = Personality::default();
        // touch index 0, coin 0.9 >= 0.3 so no intro
        let mut rng = ScriptedRandom::new(vec![0.0, 0.9]);
        let out = p.enhance("plain reply", "asdf", &mut rng);
        assert_eq!(
            out,
            "plain reply\n\n🚀 We're excited to help you build something amazing!"
        );
    }

    #[test]
    fn intro_prepended_when_coin_passes() {
        let p = Personality::default();
        // touch 0, coin 0.1 < 0.3, intro index 0
        let mut rng = ScriptedRandom::new(vec![0.0, 0.1, 0.0]);
        let out = p.enhance("plain reply", "hello", &mut rng);
        assert_eq!(
            out,
            "😄 Hey, glad you asked!\n\nplain reply\n\n😊 It's always a pleasure chatting with you!"
        );
    }

    #[test]
    fn intro_probability_zero_never_prepends() {
        let cfg = ChatbotCfg {
            intro_probability: 0.0,
            ..ChatbotCfg::default()
        };
        let p = Personality::from_cfg(&cfg);
        let mut rng = ScriptedRandom::constant(0.0);
        let out = p.enhance("reply", "asdf", &mut rng);
        assert!(out.starts_with("reply\n\n"));
    }

    #[test]
    fn final_format_breaks_sentences() {
        assert_eq!(format_final("One. Two. three"), "One.\n\nTwo. three");
    }

    #[test]
    fn final_format_swaps_bullets() {
        assert_eq!(format_final("• a\n• b"), "✅ a\n✅ b");
    }

    #[test]
    fn final_format_emphasizes_phrases_case_insensitively() {
        assert_eq!(
            format_final("knsoft technologies has 13+ years and 24/7 support"),
            "**knsoft technologies** has **13+ years** and **24/7 support**"
        );
        // word boundary: no match inside a longer word
        assert_eq!(format_final("25+ countriesx"), "25+ countriesx");
    }

    #[test]
    fn minimal_format_is_identity() {
        assert_eq!(minimal_format("• kept. As is"), "• kept. As is");
    }
}
