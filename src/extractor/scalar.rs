//! Single-node fields: full name, industry, annual salary, work summary.

use dom_query::{Matcher, Selection};
use tracing::debug;

use super::split::split_name;
use super::{ExtractContext, Fragment};
use crate::dom;

/// Full name and the first/last split derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NameParts {
    /// Split `full_name` on its first whitespace run.
    ///
    /// A single-word name keeps `full_name` but leaves both parts unset.
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Self {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Self::default();
        }

        let (first_name, last_name) = match split_name(full_name) {
            Some((first, last)) => (Some(first.to_string()), Some(last.to_string())),
            None => {
                debug!(full_name, "single-word name; first/last left unset");
                (None, None)
            }
        };

        Self {
            full_name: Some(full_name.to_string()),
            first_name,
            last_name,
        }
    }
}

/// Trimmed text of the first `matcher` hit, `None` if absent or blank.
fn optional_text(root: &Selection, matcher: &Matcher) -> Option<String> {
    dom::find_first(root, matcher)
        .map(|node| dom::text(&node))
        .filter(|text| !text.is_empty())
}

pub fn extract_name(root: &Selection, ctx: &ExtractContext) -> Fragment {
    let parts = optional_text(root, &ctx.selectors.full_name)
        .map(|name| NameParts::from_full_name(&name))
        .unwrap_or_default();
    Fragment::Name(parts)
}

pub fn extract_industry(root: &Selection, ctx: &ExtractContext) -> Fragment {
    Fragment::Industry(optional_text(root, &ctx.selectors.industry))
}

/// Salary stays display text; currency symbols and digit grouping vary.
pub fn extract_annual_salary(root: &Selection, ctx: &ExtractContext) -> Fragment {
    Fragment::AnnualSalary(optional_text(root, &ctx.selectors.annual_salary))
}

/// Summary text lives one level inside its section; `""` when either is missing.
pub fn extract_work_summary(root: &Selection, ctx: &ExtractContext) -> Fragment {
    let s = ctx.selectors;
    let summary = dom::find_first(root, &s.summary_section)
        .map(|section| dom::text_of(&section, &s.summary_text))
        .unwrap_or_default();
    Fragment::WorkSummary(summary)
}
