//! Per-intent reply templates.
//!
//! Office addresses, phone numbers and the service list are literal
//! constants; only the about/services/contact/technology/careers/generic
//! replies draw on knowledge content. Replies here are returned as-is, only
//! the fallback path goes through the personality layer.

use std::sync::Arc;

use super::PipelineError;
use super::fallback::FallbackComposer;
use super::intent::contains_any;
use crate::knowledge::KnowledgeBase;
use crate::random::{self, RandomSource};
use crate::types::{CompanyFacts, Intent, ScoredSection};

const HYDERABAD_OFFICE: &str = "🏢 **Headquarters - Hyderabad, India**\n\n\
📍 Plot No. 12, Hitech City Road, Madhapur, Hyderabad, Telangana 500081, India\n\
📧 info@knsofttech.com\n\
📞 +91 40 4852 6789\n\n\
Our headquarters is home to leadership, delivery and client success teams. Visitors are welcome by appointment!";

const USA_OFFICE: &str = "🌎 **USA Branch - Houston, Texas**\n\n\
📍 9800 Richmond Avenue, Suite 450, Houston, TX 77042, USA\n\
📧 usa@knsofttech.com\n\
📞 +1 (713) 555-0147\n\n\
Our Houston team works with clients across North America in their own time zone.";

const GUNTUR_OFFICE: &str = "💻 **Development Center - Guntur, India**\n\n\
📍 2nd Floor, Brodipet Main Road, Guntur, Andhra Pradesh 522002, India\n\
📧 guntur@knsofttech.com\n\
📞 +91 863 223 4567\n\n\
Our Guntur development center houses our engineering and quality assurance teams.";

const ALL_OFFICES: &str = "📍 **Our Offices**\n\n\
🏢 **Hyderabad, India (Headquarters)**\n\
Plot No. 12, Hitech City Road, Madhapur, Hyderabad 500081\n\
📧 info@knsofttech.com\n\n\
🌎 **Houston, USA**\n\
9800 Richmond Avenue, Suite 450, Houston, TX 77042\n\
📧 usa@knsofttech.com\n\n\
💻 **Guntur, India (Development Center)**\n\
Brodipet Main Road, Guntur 522002\n\
📧 guntur@knsofttech.com\n\n\
Which office would you like to know more about?";

const EMAIL_CONTACT: &str = "📧 **Email Us**\n\n\
• General inquiries: info@knsofttech.com\n\
• Careers: careers@knsofttech.com\n\
• USA branch: usa@knsofttech.com\n\n\
We usually reply within one business day.";

const PHONE_CONTACT: &str = "📞 **Call Us**\n\n\
• Hyderabad (HQ): +91 40 4852 6789\n\
• Houston, USA: +1 (713) 555-0147\n\
• Guntur: +91 863 223 4567\n\n\
Lines are open Monday to Saturday, 9:00 AM to 7:00 PM IST.";

const FULL_CONTACT: &str = "📬 **Get in Touch**\n\n\
📧 info@knsofttech.com\n\
📞 +91 40 4852 6789\n\
🌐 www.knsofttech.com\n\n\
You can also use the contact form on our website and our team will get back to you shortly.";

const SERVICE_LIST: &str = "🚀 **Our Core Services**\n\n\
1. Custom Software Development\n\
2. Web Application Development\n\
3. Mobile App Development\n\
4. Cloud Solutions & Migration\n\
5. IT Consulting\n\
6. UI/UX Design\n\
7. Quality Assurance & Testing\n\n\
⭐ **Specializations**\n\n\
• Artificial Intelligence & Machine Learning\n\
• Data Analytics & Business Intelligence\n\
• DevOps & Automation\n\
• Cybersecurity\n\
• ERP Solutions\n\n\
Which of these would you like to explore?";

const WHY_CHOOSE_US: &str = "✨ **Why choose us?**\n\
• Proven delivery track record\n\
• Dedicated, experienced teams\n\
• Transparent communication\n\
• 24/7 support for every client";

const TECHNOLOGY_SUMMARY: &str = "💻 We work with modern technologies including React, Angular, \
Node.js, Python, Java, .NET, Flutter, AWS, Azure and Docker to build scalable, secure solutions.";

const SERVICE_SECTIONS: &[&str] = &["core_services", "services_offered", "specialized_services"];
const CONTACT_SECTIONS: &[&str] = &["contact_details", "office_locations"];
const ABOUT_SECTIONS: &[&str] = &["company_overview", "achievements"];

/// A composed draft. `fallback` is set when a lookup failed and the canned
/// reply was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub fallback: bool,
}

impl Draft {
    fn answer(text: impl Into<String>) -> Self {
        Self { text: text.into(), fallback: false }
    }
}

/// Turns an intent plus scored sections into reply text.
#[derive(Debug, Clone)]
pub struct Composer {
    knowledge: Arc<KnowledgeBase>,
    fallback: FallbackComposer,
}

impl Composer {
    pub fn new(knowledge: Arc<KnowledgeBase>, fallback: FallbackComposer) -> Self {
        Self { knowledge, fallback }
    }

    /// Fallback reply, personality included.
    pub fn fallback(&self, query: &str, rng: &mut dyn RandomSource) -> Draft {
        Draft {
            text: self.fallback.compose(query, rng),
            fallback: true,
        }
    }

    pub fn compose(
        &self,
        intent: Intent,
        query: &str,
        sections: &[ScoredSection],
        facts: &CompanyFacts,
        rng: &mut dyn RandomSource,
    ) -> Result<Draft, PipelineError> {
        let lower = query.to_lowercase();
        let draft = match intent {
            Intent::Location => Draft::answer(location_reply(&lower)),
            Intent::SpecificContact => Draft::answer(contact_channel_reply(&lower)),
            Intent::SpecificService => Draft::answer(SERVICE_LIST),
            Intent::SpecificCompanyFact => Draft::answer(company_fact_reply(&lower, facts)),
            Intent::Greeting => Draft::answer(greeting_reply(facts, rng)),
            Intent::About => match self.knowledge.find_any(ABOUT_SECTIONS) {
                Some(section) => Draft::answer(about_reply(section.content, facts)),
                None => self.fallback("about company", rng),
            },
            Intent::Services => {
                let matches: Vec<&ScoredSection> = sections
                    .iter()
                    .filter(|s| SERVICE_SECTIONS.contains(&s.section.section))
                    .collect();
                match matches.as_slice() {
                    [] => self.fallback(query, rng),
                    [first] => Draft::answer(services_reply(first.section.content, None)),
                    [first, second, ..] => Draft::answer(services_reply(
                        first.section.content,
                        Some(second.section.content),
                    )),
                }
            }
            Intent::Contact => {
                let details = find_scored(sections, CONTACT_SECTIONS).map(|s| s.section.content);
                Draft::answer(contact_reply(details, facts))
            }
            Intent::Technology => match find_scored(sections, &["technology_stack"]) {
                Some(s) => Draft::answer(technology_reply(s.section.content)),
                None => Draft::answer(TECHNOLOGY_SUMMARY),
            },
            Intent::Careers => match find_scored(sections, &["why_work_with_us"]) {
                Some(s) => Draft::answer(careers_reply(s.section.content, facts)),
                None => self.fallback("careers", rng),
            },
            Intent::Generic => {
                let top = sections.first().ok_or(PipelineError::NoSections { intent })?;
                Draft::answer(format!(
                    "{}\n\nIs there anything specific you'd like to know more about?",
                    top.section.content
                ))
            }
        };
        Ok(draft)
    }
}

/// First scored section whose id is in `ids`.
fn find_scored<'a>(sections: &'a [ScoredSection], ids: &[&str]) -> Option<&'a ScoredSection> {
    sections.iter().find(|s| ids.contains(&s.section.section))
}

fn location_reply(lower: &str) -> &'static str {
    if contains_any(lower, &["houston", "usa", "america"]) {
        USA_OFFICE
    } else if contains_any(lower, &["hyderabad", "headquarters", "main office"]) {
        HYDERABAD_OFFICE
    } else if contains_any(lower, &["guntur", "development center"]) {
        GUNTUR_OFFICE
    } else {
        ALL_OFFICES
    }
}

fn contact_channel_reply(lower: &str) -> &'static str {
    if lower.contains("email") {
        EMAIL_CONTACT
    } else if contains_any(lower, &["phone", "contact number"]) {
        PHONE_CONTACT
    } else {
        FULL_CONTACT
    }
}

fn company_fact_reply(lower: &str, facts: &CompanyFacts) -> String {
    if contains_any(lower, &["founded", "when"]) {
        format!(
            "🏢 {} was founded in {} and has {} of experience in delivering software solutions.",
            facts.name, facts.founded, facts.experience
        )
    } else if contains_any(lower, &["clients", "how many clients"]) {
        format!(
            "👥 We have served {} satisfied clients across {} countries worldwide.",
            facts.clients, facts.countries
        )
    } else if lower.contains("projects") {
        format!(
            "🚀 We have successfully delivered {} projects for businesses of every size.",
            facts.projects
        )
    } else if contains_any(lower, &["experience", "years"]) {
        format!(
            "⭐ We bring {} of industry experience, serving clients since {}.",
            facts.experience, facts.founded
        )
    } else {
        format!(
            "📊 **{} at a Glance**\n\n\
             • Founded: {}\n\
             • Experience: {}\n\
             • Clients: {} across {} countries\n\
             • Projects delivered: {}",
            facts.name, facts.founded, facts.experience, facts.clients, facts.countries, facts.projects
        )
    }
}

fn greeting_reply(facts: &CompanyFacts, rng: &mut dyn RandomSource) -> String {
    let templates: [fn(&CompanyFacts) -> String; 3] = [
        |f| {
            format!(
                "👋 Hello! Welcome to **{}**!\n\n\
                 With {} of experience, we help businesses turn ideas into reliable software. \
                 How can I help you today?",
                f.name, f.experience
            )
        },
        |f| {
            format!(
                "Hi there! 😊 I'm the {} assistant.\n\n\
                 Since {}, we've partnered with {} clients worldwide. \
                 What would you like to know about our services, offices or careers?",
                f.name, f.founded, f.clients
            )
        },
        |f| {
            format!(
                "Hey! 👋 Great to see you at **{}**.\n\n\
                 We've delivered {} projects so far and I'm happy to tell you about any of them. \
                 What brings you here today?",
                f.name, f.projects
            )
        },
    ];
    random::choose(rng, &templates)(facts)
}

fn about_reply(content: &str, facts: &CompanyFacts) -> String {
    format!(
        "🏢 **About {}**\n\n{}\n\n\
         📅 Founded: {}\n\
         ⭐ Experience: {}\n\
         👥 Clients: {}\n\
         🚀 Projects: {}\n\n\
         Want to know more about our services or team?",
        facts.name, content, facts.founded, facts.experience, facts.clients, facts.projects
    )
}

fn services_reply(first: &str, second: Option<&str>) -> String {
    let mut out = format!("💼 **Our Services**\n\n{first}\n\n");
    if let Some(second) = second {
        out.push_str(second);
        out.push_str("\n\n");
    }
    out.push_str(WHY_CHOOSE_US);
    out.push_str("\n\nWould you like details on a specific service?");
    out
}

fn contact_reply(details: Option<&str>, facts: &CompanyFacts) -> String {
    let mut out = format!("📞 **Contact {}**\n\n", facts.name);
    if let Some(details) = details {
        out.push_str(details);
        out.push_str("\n\n");
    }
    out.push_str(&format!("📧 Email: {}\n🕒 Support: {}\n\n🏢 **Our Branches**\n", facts.email, facts.support));
    let branches = facts
        .branches
        .iter()
        .map(|b| format!("• {b}"))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&branches);
    out.push_str("\n\nWe look forward to hearing from you!");
    out
}

fn technology_reply(content: &str) -> String {
    format!(
        "💻 **Our Technology Stack**\n\n{content}\n\n\
         Our engineers pick the right tools for each project's goals, budget and timeline. \
         Curious about a specific technology?"
    )
}

fn careers_reply(content: &str, facts: &CompanyFacts) -> String {
    format!(
        "🌟 **Careers at {}**\n\n{content}\n\n\
         📧 Send your resume to careers@knsofttech.com or check the Careers page for current openings!",
        facts.name
    )
}
