//! Portfolio aggregate: the one profile document and its typed patch
//!
//! The portfolio is a singleton row addressed by [`PORTFOLIO_ID`], never
//! by "first match". Nested sections are stored as JSONB and modeled as
//! plain serde structs here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known identity of the single portfolio row.
pub const PORTFOLIO_ID: &str = "portfolio-primary";

/// Owner identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub location: String,
    #[serde(default)]
    pub resume_file_name: Option<String>,
}

/// Named skill lists. Order-preserving; duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub programming: Vec<String>,
    pub web_development: Vec<String>,
    pub professional: Vec<String>,
    pub domain_interests: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub expected_graduation: String,
    pub coursework: Vec<String>,
}

/// A portfolio project. The numeric id is caller-assigned and not
/// checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_available: bool,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub provider: String,
    pub status: String,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
}

/// The full profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,
    pub personal: PersonalInfo,
    pub summary: String,
    pub skills: Skills,
    pub education: Education,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of top-level portfolio sections.
///
/// Unknown fields are rejected at deserialization rather than silently
/// merged. `updated_at` is stamped by the store on every write and is
/// not accepted from callers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioPatch {
    pub personal: Option<PersonalInfo>,
    pub summary: Option<String>,
    pub skills: Option<Skills>,
    pub education: Option<Education>,
    pub projects: Option<Vec<Project>>,
    pub certifications: Option<Vec<Certification>>,
    pub achievements: Option<Vec<String>>,
}

impl Portfolio {
    /// The fixed default profile inserted on first run.
    pub fn seed() -> Self {
        let now = Utc::now();
        Self {
            id: PORTFOLIO_ID.to_string(),
            personal: PersonalInfo {
                name: "Jordan Reyes".to_string(),
                title: "Software Engineering Student".to_string(),
                subtitle: "Systems Programming Enthusiast | Open Source Contributor".to_string(),
                phone: "+1 555 010 4242".to_string(),
                email: "jordan.reyes@example.com".to_string(),
                linkedin: "linkedin.com/in/jordan-reyes-dev".to_string(),
                location: "Portland, Oregon".to_string(),
                resume_file_name: None,
            },
            summary: "Undergraduate software engineering student with a focus on \
                      systems programming and backend services. Comfortable across \
                      the stack, with a strong interest in reliable infrastructure, \
                      developer tooling, and open source collaboration."
                .to_string(),
            skills: Skills {
                programming: vec!["Rust".into(), "Python".into(), "TypeScript".into()],
                web_development: vec![
                    "HTML".into(),
                    "CSS".into(),
                    "JavaScript".into(),
                    "React".into(),
                ],
                professional: vec![
                    "Technical Writing".into(),
                    "Team Collaboration".into(),
                    "Mentoring".into(),
                ],
                domain_interests: vec![
                    "Distributed Systems".into(),
                    "Databases".into(),
                    "Developer Tooling".into(),
                ],
                tools: vec![
                    "Git".into(),
                    "Linux".into(),
                    "Docker".into(),
                    "PostgreSQL".into(),
                ],
            },
            education: Education {
                degree: "B.S. in Computer Science".to_string(),
                institution: "Pacific State University".to_string(),
                expected_graduation: "2027".to_string(),
                coursework: vec![
                    "Data Structures".into(),
                    "Operating Systems".into(),
                    "Database Systems".into(),
                    "Computer Networks".into(),
                ],
            },
            projects: vec![Project {
                id: 1,
                title: "Trail Conditions Tracker".to_string(),
                status: "In Progress".to_string(),
                description: "Community-sourced web app for reporting and browsing \
                              hiking trail conditions, with a Rust backend and a \
                              map-centric frontend."
                    .to_string(),
                technologies: vec!["Rust".into(), "PostgreSQL".into(), "React".into()],
                demo_available: false,
                demo_url: None,
                github_url: None,
            }],
            certifications: vec![Certification {
                title: "Cloud Fundamentals".to_string(),
                provider: "Coursera".to_string(),
                status: "In Progress".to_string(),
                completion_date: None,
            }],
            achievements: vec![
                "Dean's list, two consecutive semesters".to_string(),
                "Maintainer of a small open source CLI with 200+ stars".to_string(),
                "Winner, regional collegiate hackathon 2025".to_string(),
            ],
            created_at: now,
            updated_at: now,
        }
    }
}

impl PortfolioPatch {
    /// True when no section is present. An empty patch still refreshes
    /// `updated_at` on an existing row.
    pub fn is_empty(&self) -> bool {
        self.personal.is_none()
            && self.summary.is_none()
            && self.skills.is_none()
            && self.education.is_none()
            && self.projects.is_none()
            && self.certifications.is_none()
            && self.achievements.is_none()
    }
}
