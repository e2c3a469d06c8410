//! Job postings read from the careers backend and rendered for chat.
//!
//! The chatbot never answers from this data; the front-end exposes it
//! through slash commands.

pub mod db;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    /// Employment type, e.g. "Full-time". Stored as `type`.
    #[serde(rename = "type")]
    pub job_type: String,
    pub created_at: DateTime<Utc>,
}

/// One bullet per posting, in the given order.
pub fn format_job_list(jobs: &[JobPosting]) -> String {
    if jobs.is_empty() {
        return "There are no open positions right now. Send your resume to careers@knsofttech.com \
                and we'll reach out when something opens up!"
            .to_owned();
    }

    let mut out = format!("💼 **Open Positions ({})**\n\n", jobs.len());
    for job in jobs {
        out.push_str(&format!(
            "• **{}** ({}, {}): `/job {}`\n",
            job.title, job.location, job.job_type, job.slug
        ));
    }
    out.push_str("\nUse `/job <slug>` to see the full description.");
    out
}

pub fn format_job_detail(job: &JobPosting) -> String {
    format!(
        "💼 **{}**\n\n📍 {}\n🕒 {}\n📅 Posted {}\n\n{}\n\n📧 Apply at careers@knsofttech.com",
        job.title,
        job.location,
        job.job_type,
        job.created_at.format("%Y-%m-%d"),
        job.description.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn posting(slug: &str) -> JobPosting {
        JobPosting {
            id: Uuid::nil(),
            title: "Rust Engineer".into(),
            slug: slug.into(),
            description: "  Build backend services.\n".into(),
            location: "Hyderabad".into(),
            job_type: "Full-time".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn deserializes_backend_record_shape() {
        let json = serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "title": "QA Analyst",
            "slug": "qa-analyst",
            "description": "Test things.",
            "location": "Guntur",
            "type": "Contract",
            "created_at": "2024-01-15T10:00:00Z"
        });
        let job: JobPosting = serde_json::from_value(json).unwrap();
        assert_eq!(job.job_type, "Contract");
        assert_eq!(job.slug, "qa-analyst");

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["type"], "Contract");
        assert!(back.get("job_type").is_none());
    }

    #[test]
    fn list_shows_every_slug() {
        let text = format_job_list(&[posting("rust-engineer"), posting("rust-engineer-2")]);
        assert!(text.starts_with("💼 **Open Positions (2)**"));
        assert!(text.contains("`/job rust-engineer`"));
        assert!(text.contains("`/job rust-engineer-2`"));
        assert_eq!(text.lines().filter(|l| l.starts_with("• ")).count(), 2);
    }

    #[test]
    fn empty_list_points_to_email() {
        assert!(format_job_list(&[]).contains("careers@knsofttech.com"));
    }

    #[test]
    fn detail_includes_date_and_trimmed_description() {
        let text = format_job_detail(&posting("rust-engineer"));
        assert!(text.contains("📅 Posted 2024-05-02"));
        assert!(text.contains("\n\nBuild backend services.\n\n"));
        assert!(text.contains("🕒 Full-time"));
    }
}
