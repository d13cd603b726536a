//! Document-level extraction.
//!
//! Validates the input and the configured selectors, parses the page once
//! and runs the default extractor list over it.

use tracing::{debug, warn};

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::extractor::{run_extractors, ExtractContext, DEFAULT_EXTRACTORS};
use crate::options::Options;
use crate::result::ProfileRecord;

/// Main entry point for profile extraction.
pub(crate) fn extract_profile(html: &str, options: &Options) -> Result<ProfileRecord> {
    if encoding::looks_binary(html.as_bytes()) {
        warn!(len = html.len(), "rejecting input with NUL bytes in its head");
        return Err(Error::InvalidInput("binary data (NUL bytes)".to_string()));
    }

    let selectors = options.selectors.compile()?;
    let ctx = ExtractContext::new(&selectors, options.url.as_deref());

    let document = dom::parse(html);
    let root = dom::root(&document);
    let profile = run_extractors(&root, &ctx, DEFAULT_EXTRACTORS);

    debug!(
        html_len = html.len(),
        has_name = profile.full_name.is_some(),
        education = profile.education.len(),
        work_experience = profile.work_experience.len(),
        skills = profile.skills.len(),
        it_skills = profile.it_skills.len(),
        languages = profile.other_details.languages_known.len(),
        "profile extraction complete"
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Selectors;

    #[test]
    fn test_nul_bytes_are_rejected_before_parsing() {
        let result = extract_profile("<div class=\"name\">A B</div>\0\0", &Options::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_nul_past_sniff_window_is_parsed() {
        let html = format!(
            "<div class=\"name\">Meera Nair</div><p>{}</p>\0<div class=\"skills\">Go</div>",
            "x".repeat(2000)
        );
        let profile = extract_profile(&html, &Options::default()).unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Meera Nair"));
        assert_eq!(profile.skills, vec!["Go"]);
    }

    #[test]
    fn test_invalid_selector_fails_fast() {
        let options = Options {
            selectors: Selectors {
                skill_item: "div[".to_string(),
                ..Selectors::default()
            },
            ..Options::default()
        };
        let result = extract_profile("<div class=\"skills\">Rust</div>", &options);
        assert!(matches!(
            result,
            Err(Error::InvalidSelector { field: "skill_item", .. })
        ));
    }

    #[test]
    fn test_custom_selectors_are_used() {
        let options = Options {
            selectors: Selectors {
                full_name: "h1.candidate".to_string(),
                ..Selectors::default()
            },
            ..Options::default()
        };
        let profile = extract_profile(
            r#"<h1 class="candidate">Arjun Rao</h1><div class="name">Decoy Name</div>"#,
            &options,
        )
        .unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Arjun Rao"));
    }

    #[test]
    fn test_empty_document_yields_default_record() {
        let profile = extract_profile("", &Options::default()).unwrap();
        assert_eq!(profile, ProfileRecord::default());
    }
}
