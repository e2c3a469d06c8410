use knsoft_core::careers::{self, db as careers_db};
use sqlx::PgPool;

const UNAVAILABLE: &str =
    "Job listings are unavailable right now. Please visit our Careers page or email careers@knsofttech.com.";

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Jobs,
    /// `/job <slug>`. Empty when the slug was left out.
    Job(String),
    /// Anything else goes to the chatbot.
    Ask(String),
}

/// None for blank input.
pub fn parse(line: &str) -> Option<Command> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }
    let (head, rest) = text
        .split_once(char::is_whitespace)
        .map(|(h, r)| (h, r.trim()))
        .unwrap_or((text, ""));
    let cmd = match head {
        "/q" | "/quit" | "/exit" => Command::Quit,
        "/jobs" => Command::Jobs,
        "/job" => Command::Job(rest.to_owned()),
        _ => Command::Ask(text.to_owned()),
    };
    Some(cmd)
}

/// Text for `/jobs`.
pub async fn list_jobs(pool: Option<&PgPool>) -> String {
    let Some(pool) = pool else {
        return UNAVAILABLE.to_owned();
    };
    match careers_db::fetch_all(pool).await {
        Ok(jobs) => careers::format_job_list(&jobs),
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch job postings");
            UNAVAILABLE.to_owned()
        }
    }
}

/// Text for `/job <slug>`.
pub async fn show_job(pool: Option<&PgPool>, slug: &str) -> String {
    if slug.is_empty() {
        return "Usage: `/job <slug>`. Type `/jobs` to see every open position.".to_owned();
    }
    let Some(pool) = pool else {
        return UNAVAILABLE.to_owned();
    };
    match careers_db::fetch_by_slug(pool, slug).await {
        Ok(Some(job)) => careers::format_job_detail(&job),
        Ok(None) => format!("I couldn't find a position called `{slug}`. Type `/jobs` to see what's open."),
        Err(e) => {
            tracing::warn!(error = %e, slug, "failed to fetch job posting");
            UNAVAILABLE.to_owned()
        }
    }
}
