//! Education entries.
//!
//! Items are searched across the whole page; each one holds a
//! "Degree, Major, Year" label and a separate institute element.

use dom_query::Selection;
use tracing::debug;

use super::split::{parse_degree_line, DegreeLine, SplitError};
use super::{ExtractContext, Fragment};
use crate::dom;
use crate::result::EducationEntry;
use crate::selector::CompiledSelectors;

pub fn extract_education(root: &Selection, ctx: &ExtractContext) -> Fragment {
    let s = ctx.selectors;
    let entries = dom::find_all(root, &s.education_item)
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match education_entry(item, s) {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(index, %err, "skipping education item");
                None
            }
        })
        .collect();
    Fragment::Education(entries)
}

/// A missing label fails the arity check like any other malformed label;
/// a missing institute is just empty.
fn education_entry(item: &Selection, s: &CompiledSelectors) -> Result<EducationEntry, SplitError> {
    let DegreeLine {
        degree,
        major,
        year,
    } = parse_degree_line(&dom::text_of(item, &s.education_label))?;

    Ok(EducationEntry {
        degree,
        major,
        year,
        institute: dom::text_of(item, &s.education_institute),
    })
}
