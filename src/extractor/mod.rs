//! Profile field extraction.
//!
//! Each extractor reads one region of the parsed page and returns a
//! [`Fragment`] for exactly one field of [`ProfileRecord`]. Extractors never
//! look at each other's output, so [`run_extractors`] can apply them in any
//! order.
//!
//! # Module Structure
//!
//! - `scalar`: full name, industry, annual salary, work summary
//! - `education`: education entries
//! - `experience`: work-experience cards
//! - `skills`: skills list and IT-skills table
//! - `other_details`: languages, personal details, desired-job details
//! - `split`: arity-checked parsing of packed text values
//!
//! # Usage
//!
//! ```rust
//! use rs_profile_extract::dom;
//! use rs_profile_extract::extractor::{run_extractors, scalar, ExtractContext, Extractor};
//! use rs_profile_extract::selector::Selectors;
//!
//! let doc = dom::parse(r#"<div class="name">Jane Doe</div><div class="OesXg">Banking</div>"#);
//! let selectors = Selectors::default().compile()?;
//! let ctx = ExtractContext::new(&selectors, None);
//!
//! // Only run the extractors you need
//! let extractors: [Extractor; 1] = [scalar::extract_name];
//! let record = run_extractors(&dom::root(&doc), &ctx, &extractors);
//! assert_eq!(record.first_name.as_deref(), Some("Jane"));
//! assert!(record.industry.is_none());
//! # Ok::<(), rs_profile_extract::Error>(())
//! ```

use dom_query::Selection;

use crate::result::{EducationEntry, ItSkillRow, OtherDetails, ProfileRecord, WorkExperienceEntry};
use crate::selector::CompiledSelectors;

pub mod education;
pub mod experience;
pub mod other_details;
pub mod scalar;
pub mod skills;
pub mod split;

pub use scalar::NameParts;

/// Everything an extractor may read besides the document itself.
#[derive(Clone, Copy)]
pub struct ExtractContext<'c> {
    /// Compiled markers for every field.
    pub selectors: &'c CompiledSelectors,
    /// Page URL for resolving relative links.
    pub url: Option<&'c str>,
}

impl<'c> ExtractContext<'c> {
    #[must_use]
    pub fn new(selectors: &'c CompiledSelectors, url: Option<&'c str>) -> Self {
        Self { selectors, url }
    }
}

/// The part of a [`ProfileRecord`] produced by a single extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Name(NameParts),
    Industry(Option<String>),
    AnnualSalary(Option<String>),
    Education(Vec<EducationEntry>),
    WorkExperience(Vec<WorkExperienceEntry>),
    Skills(Vec<String>),
    WorkSummary(String),
    ItSkills(Vec<ItSkillRow>),
    OtherDetails(OtherDetails),
}

impl Fragment {
    /// Record field this fragment fills, for diagnostics.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "full_name",
            Self::Industry(_) => "industry",
            Self::AnnualSalary(_) => "annual_salary",
            Self::Education(_) => "education",
            Self::WorkExperience(_) => "work_experience",
            Self::Skills(_) => "skills",
            Self::WorkSummary(_) => "work_summary",
            Self::ItSkills(_) => "it_skills",
            Self::OtherDetails(_) => "other_details",
        }
    }

    /// Whether the extractor found nothing for its field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Name(name) => name.full_name.is_none(),
            Self::Industry(v) | Self::AnnualSalary(v) => v.is_none(),
            Self::Education(v) => v.is_empty(),
            Self::WorkExperience(v) => v.is_empty(),
            Self::Skills(v) => v.is_empty(),
            Self::WorkSummary(v) => v.is_empty(),
            Self::ItSkills(v) => v.is_empty(),
            Self::OtherDetails(d) => {
                d.languages_known.is_empty()
                    && d.personal_details.is_empty()
                    && d.desired_job_details.is_empty()
            }
        }
    }
}

/// A field extractor: reads the tree, returns one fragment.
///
/// Extractors must not mutate the document.
pub type Extractor = fn(&Selection, &ExtractContext) -> Fragment;

/// All extractors, one per [`ProfileRecord`] field group.
pub static DEFAULT_EXTRACTORS: &[Extractor] = &[
    scalar::extract_name,
    scalar::extract_industry,
    scalar::extract_annual_salary,
    education::extract_education,
    experience::extract_work_experience,
    skills::extract_skills,
    scalar::extract_work_summary,
    skills::extract_it_skills,
    other_details::extract_other_details,
];

/// Run `extractors` against `root` and merge their fragments into a fresh
/// record. Fields without an extractor keep their defaults.
#[must_use]
pub fn run_extractors(
    root: &Selection,
    ctx: &ExtractContext,
    extractors: &[Extractor],
) -> ProfileRecord {
    extractors
        .iter()
        .fold(ProfileRecord::default(), |record, extract| {
            let fragment = extract(root, ctx);
            tracing::trace!(field = fragment.field(), empty = fragment.is_empty(), "extracted");
            record.merge(fragment)
        })
}

/// Run one extractor over `html` with the default selectors.
#[cfg(test)]
pub(crate) fn run_single(extract: Extractor, html: &str, url: Option<&str>) -> Fragment {
    use crate::dom;
    use crate::selector::Selectors;

    #[allow(clippy::unwrap_used)]
    let selectors = Selectors::default().compile().unwrap();
    let ctx = ExtractContext::new(&selectors, url);
    let doc = dom::parse(html);
    let root = dom::root(&doc);
    extract(&root, &ctx)
}
