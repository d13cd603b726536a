//! Result types for extraction output.
//!
//! [`ProfileRecord`] is the aggregate produced by one extraction run. Its
//! serialized shape never depends on which page sections were present:
//! missing scalars serialize as `null`, missing lists and maps as empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extractor::Fragment;

/// One education item.
///
/// `degree`, `major` and `year` come from a single "Degree, Major, Year"
/// label; `institute` from a sibling element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub major: String,
    pub year: String,
    pub institute: String,
}

/// One work-experience card. Any field may be empty when the card lacks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub company_logo_url: String,
    pub company_name: String,
    pub designation: String,
    pub dates: String,
    pub description: String,
}

/// One row of the IT-skills table. Only complete rows are ever emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItSkillRow {
    pub skill: String,
    pub version: String,
    pub last_used: String,
    pub experience: String,
}

/// Languages, personal details and desired-job details.
///
/// Always present on a record; each map is empty when its section is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherDetails {
    /// Language name to proficiency.
    pub languages_known: BTreeMap<String, String>,
    /// Label to value.
    pub personal_details: BTreeMap<String, String>,
    /// Label to value.
    pub desired_job_details: BTreeMap<String, String>,
}

/// Structured profile extracted from one profile page.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::extract_profile;
///
/// let html = r#"<div class="name">Jane Mary Doe</div>"#;
/// let profile = extract_profile(html)?;
/// assert_eq!(profile.first_name.as_deref(), Some("Jane"));
/// assert_eq!(profile.last_name.as_deref(), Some("Mary Doe"));
/// assert!(profile.education.is_empty());
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub full_name: Option<String>,
    /// First whitespace-separated word of `full_name`.
    pub first_name: Option<String>,
    /// Everything after the first word of `full_name`.
    pub last_name: Option<String>,
    pub industry: Option<String>,
    /// Display text as shown on the page (currency, grouping and all).
    pub annual_salary: Option<String>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub skills: Vec<String>,
    pub work_summary: String,
    pub it_skills: Vec<ItSkillRow>,
    pub other_details: OtherDetails,
}

impl ProfileRecord {
    /// Fold one extractor's fragment into the record.
    #[must_use]
    pub fn merge(self, fragment: Fragment) -> Self {
        match fragment {
            Fragment::Name(name) => Self {
                full_name: name.full_name,
                first_name: name.first_name,
                last_name: name.last_name,
                ..self
            },
            Fragment::Industry(industry) => Self { industry, ..self },
            Fragment::AnnualSalary(annual_salary) => Self {
                annual_salary,
                ..self
            },
            Fragment::Education(education) => Self { education, ..self },
            Fragment::WorkExperience(work_experience) => Self {
                work_experience,
                ..self
            },
            Fragment::Skills(skills) => Self { skills, ..self },
            Fragment::WorkSummary(work_summary) => Self {
                work_summary,
                ..self
            },
            Fragment::ItSkills(it_skills) => Self { it_skills, ..self },
            Fragment::OtherDetails(other_details) => Self {
                other_details,
                ..self
            },
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record previously produced by [`ProfileRecord::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
