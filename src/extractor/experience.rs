//! Work-experience cards.
//!
//! A card has a header (company icon plus a designation/dates label) and a
//! description. Every nested element is optional: absent pieces become empty
//! strings and the card is still emitted.

use dom_query::Selection;

use super::{ExtractContext, Fragment};
use crate::dom;
use crate::result::WorkExperienceEntry;
use crate::url_utils;

pub fn extract_work_experience(root: &Selection, ctx: &ExtractContext) -> Fragment {
    let s = ctx.selectors;
    let Some(section) = dom::find_first(root, &s.work_section) else {
        return Fragment::WorkExperience(Vec::new());
    };

    let cards = dom::find_all(&section, &s.work_card)
        .iter()
        .map(|card| work_entry(card, ctx))
        .collect();
    Fragment::WorkExperience(cards)
}

fn work_entry(card: &Selection, ctx: &ExtractContext) -> WorkExperienceEntry {
    let s = ctx.selectors;
    let head = dom::find_first(card, &s.work_head);

    let image = head
        .as_ref()
        .and_then(|head| dom::find_first(head, &s.work_icon))
        .and_then(|icon| dom::find_first(&icon, &s.work_icon_image));
    let (company_logo_url, company_name) = match image {
        Some(img) => (
            url_utils::resolve(&dom::attr_or_empty(&img, &s.logo_attribute), ctx.url),
            dom::attr_or_empty(&img, "alt").trim().to_string(),
        ),
        None => (String::new(), String::new()),
    };

    let label = head
        .as_ref()
        .and_then(|head| dom::find_first(head, &s.work_label));
    let (designation, dates) = match label {
        Some(label) => (
            dom::text_of(&label, &s.work_designation),
            dom::text_of(&label, &s.work_dates),
        ),
        None => (String::new(), String::new()),
    };

    WorkExperienceEntry {
        company_logo_url,
        company_name,
        designation,
        dates,
        description: dom::text_of(card, &s.work_description),
    }
}
