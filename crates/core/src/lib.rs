//! KNSOFT Technologies website chatbot.
//!
//! `chatbot::Chatbot` is the entry point: it scores a query against the
//! static knowledge base, classifies its intent, and composes a reply.
//! `runtime::ChatRuntime` wraps it in a channel-driven session loop for
//! front-ends.

pub mod careers;
pub mod chatbot;
pub mod cognition;
pub mod config;
pub mod identity;
pub mod io;
pub mod knowledge;
pub mod random;
pub mod runtime;
pub mod types;

pub use chatbot::{Chatbot, Reply};
pub use config::ChatbotCfg;
