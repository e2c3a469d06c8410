//! Static knowledge base and company facts.
//!
//! Both are process-wide read-only data. `KnowledgeBase` wraps the section
//! list so tests can substitute their own content.

mod sections;

pub use sections::BUILTIN_SECTIONS;

use crate::types::{CompanyFacts, KnowledgeSection};

/// Ordered, read-only list of knowledge sections.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    sections: Vec<KnowledgeSection>,
}

impl KnowledgeBase {
    pub fn new(sections: Vec<KnowledgeSection>) -> Self {
        Self { sections }
    }

    /// The website content shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SECTIONS.to_vec())
    }

    pub fn sections(&self) -> &[KnowledgeSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// First section whose id is one of `ids`, in knowledge-base order.
    pub fn find_any(&self, ids: &[&str]) -> Option<&KnowledgeSection> {
        self.sections.iter().find(|s| ids.contains(&s.section))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Company profile. Built fresh on every call.
pub fn company_facts() -> CompanyFacts {
    CompanyFacts {
        name: "KNSOFT Technologies".into(),
        founded: "2011".into(),
        experience: "13+ years".into(),
        clients: "500+".into(),
        countries: "25+".into(),
        projects: "1000+".into(),
        support: "24/7".into(),
        headquarters: "Hyderabad, India".into(),
        branches: vec![
            "Hyderabad, India (Headquarters)".into(),
            "Houston, USA".into(),
            "Guntur, India (Development Center)".into(),
        ],
        email: "info@knsofttech.com".into(),
        tagline: "Transforming Ideas into Digital Reality".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_sections_the_composer_looks_up() {
        let kb = KnowledgeBase::builtin();
        for id in [
            "company_overview",
            "achievements",
            "core_services",
            "services_offered",
            "specialized_services",
            "technology_stack",
            "why_work_with_us",
            "contact_details",
            "office_locations",
        ] {
            assert!(kb.find_any(&[id]).is_some(), "missing section {id}");
        }
    }

    #[test]
    fn find_any_returns_first_in_order() {
        let kb = KnowledgeBase::builtin();
        let hit = kb.find_any(&["achievements", "company_overview"]).unwrap();
        // company_overview precedes achievements in the list
        assert_eq!(hit.section, "company_overview");
    }

    #[test]
    fn duplicate_ids_resolve_to_first() {
        let first = KnowledgeSection {
            page: "a",
            section: "dup",
            content: "first",
            keywords: &[],
            context: "",
        };
        let second = KnowledgeSection { content: "second", ..first };
        let kb = KnowledgeBase::new(vec![first, second]);
        assert_eq!(kb.find_any(&["dup"]).unwrap().content, "first");
    }

    #[test]
    fn no_keyword_is_shorter_than_three_chars() {
        // Two-letter keywords would match inside almost any token.
        for s in BUILTIN_SECTIONS {
            for k in s.keywords {
                assert!(k.len() >= 3, "keyword {k:?} in {} too short", s.section);
            }
        }
    }

    #[test]
    fn facts_are_reconstructed_each_call() {
        let a = company_facts();
        let b = company_facts();
        assert_eq!(a, b);
        assert_eq!(a.branches.len(), 3);
        assert_eq!(a.name, "KNSOFT Technologies");
    }
}
