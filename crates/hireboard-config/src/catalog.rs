//! Static choice tables.
//!
//! The catalog is built once at start-up and shared through `Arc` in the
//! application state. Only the trending keyword list can be overridden, via
//! the comma-separated `TRENDING_KEYWORDS` variable.

use std::env;

use serde::Serialize;
use utoipa::ToSchema;

/// A stored value and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Catalog {
    pub job_types: Vec<Choice>,
    pub application_statuses: Vec<Choice>,
    pub genders: Vec<Choice>,
    pub user_types: Vec<Choice>,
    pub trending_keywords: Vec<String>,
}

pub const DEFAULT_TRENDING_KEYWORDS: [&str; 14] = [
    "Research",
    "Web Security",
    "VA/PT",
    "Management",
    "Quality Assurance",
    "Development",
    "Consulting",
    "Risk Assessment/Auditing",
    "Mobile Pentesting",
    "Security Engineer",
    "Software Developer",
    "Software Engineer",
    "Malware Analyst",
    "SOC Analyst",
];

impl Default for Catalog {
    fn default() -> Self {
        Self {
            job_types: vec![
                Choice::new("full time", "FULL TIME"),
                Choice::new("part time", "PART TIME"),
                Choice::new("contract", "CONTRACT"),
                Choice::new("internship", "INTERNSHIP"),
            ],
            application_statuses: vec![
                Choice::new("under-reviewed", "Under-Reviewed"),
                Choice::new("shortlisted", "Shortlisted"),
                Choice::new("accepted", "Accepted"),
                Choice::new("rejected", "Rejected"),
                Choice::new("on-hold", "On-Hold"),
                Choice::new("applied", "Applied"),
            ],
            genders: vec![
                Choice::new("male", "Male"),
                Choice::new("female", "Female"),
                Choice::new("other", "Other"),
            ],
            user_types: vec![
                Choice::new("Employer", "Employer"),
                Choice::new("Job Seeker", "Job Seeker"),
            ],
            trending_keywords: DEFAULT_TRENDING_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl Catalog {
    pub fn from_env() -> Self {
        let catalog = Self::default();
        match env::var("TRENDING_KEYWORDS") {
            Ok(raw) => catalog.with_keywords(&raw),
            Err(_) => catalog,
        }
    }

    /// Replaces the keyword list. A list with no usable entries keeps the
    /// defaults.
    pub fn with_keywords(mut self, raw: &str) -> Self {
        let keywords: Vec<String> = raw
            .split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            tracing::warn!("TRENDING_KEYWORDS is empty, keeping the default keyword list");
        } else {
            self.trending_keywords = keywords;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        let catalog = Catalog::default();
        assert_eq!(catalog.trending_keywords.len(), 14);
        assert_eq!(catalog.trending_keywords[2], "VA/PT");
    }

    #[test]
    fn test_keyword_override() {
        let catalog = Catalog::default().with_keywords("Rust, Go ,,");
        assert_eq!(catalog.trending_keywords, vec!["Rust", "Go"]);

        let catalog = Catalog::default().with_keywords(" , ");
        assert_eq!(catalog.trending_keywords.len(), 14);
    }

    #[test]
    fn test_serializes_choices() {
        let value = serde_json::to_value(Catalog::default()).unwrap();
        assert_eq!(value["job_types"][0]["value"], "full time");
        assert_eq!(value["application_statuses"][5]["label"], "Applied");
    }
}
