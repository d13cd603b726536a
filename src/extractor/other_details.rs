//! "Other details": languages, personal details and desired-job details.
//!
//! The three sub-sections sit inside one outer section and are looked up
//! independently; any of them (or the outer section) may be missing.

use std::collections::BTreeMap;

use dom_query::{Matcher, Selection};
use tracing::debug;

use super::split::language_name;
use super::{ExtractContext, Fragment};
use crate::dom;
use crate::result::OtherDetails;
use crate::selector::CompiledSelectors;

pub fn extract_other_details(root: &Selection, ctx: &ExtractContext) -> Fragment {
    let s = ctx.selectors;
    let Some(section) = dom::find_first(root, &s.other_details_section) else {
        return Fragment::OtherDetails(OtherDetails::default());
    };

    Fragment::OtherDetails(OtherDetails {
        languages_known: languages(&section, s),
        personal_details: detail_table(&section, &s.personal_section, s),
        desired_job_details: detail_table(&section, &s.desired_job_section, s),
    })
}

/// Language name to proficiency. A repeated language keeps its last value.
fn languages(section: &Selection, s: &CompiledSelectors) -> BTreeMap<String, String> {
    let mut known = BTreeMap::new();
    let Some(list) = dom::find_first(section, &s.languages_section) else {
        return known;
    };

    for item in dom::find_all(&list, &s.language_item) {
        let text = dom::text(&item);
        match language_name(&text) {
            Ok(name) => {
                let proficiency = dom::text_of(&item, &s.language_proficiency);
                known.insert(name.to_string(), proficiency);
            }
            Err(err) => debug!(%text, %err, "skipping language item"),
        }
    }
    known
}

/// Label/value table. Only rows with exactly two cells count.
fn detail_table(
    section: &Selection,
    table: &Matcher,
    s: &CompiledSelectors,
) -> BTreeMap<String, String> {
    let mut details = BTreeMap::new();
    let Some(table) = dom::find_first(section, table) else {
        return details;
    };

    for row in dom::find_all(&table, &s.detail_row) {
        match dom::find_all(&row, &s.detail_cell).as_slice() {
            [label, value] => {
                details.insert(dom::text(label), dom::text(value));
            }
            cells => debug!(cells = cells.len(), "skipping detail row"),
        }
    }
    details
}
