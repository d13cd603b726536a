use rs_profile_extract::{
    extract_profile, extract_profile_bytes, Error, OtherDetails, ProfileRecord,
};

const SAMPLE: &str = include_str!("fixtures/sample_profile.html");

#[test]
fn extract_does_not_fail_on_empty_string() {
    let profile = extract_profile("").expect("empty input should produce a record");
    assert_eq!(profile, ProfileRecord::default());
}

#[test]
fn extract_does_not_fail_on_plain_text() {
    let profile = extract_profile("just some words, no markup").expect("expected Ok(_)");
    assert_eq!(profile, ProfileRecord::default());
}

#[test]
fn extract_does_not_panic_on_unclosed_tags() {
    let html = r#"<div class="name">Jane Doe<div class="OesXg">Banking<div class="skills">SQL"#;
    let profile = extract_profile(html).expect("expected Ok(_)");
    assert_eq!(profile.skills, vec!["SQL"]);
    assert!(profile.full_name.is_some());
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    let html = r#"<p><div class="work-exp"></p><div class="work-exp-card"></span></div></div>"#;
    let result = extract_profile(html);
    assert!(result.is_ok());
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    let html = r#"<div class="name id=broken>Jane</div><img alt=">"#;
    assert!(extract_profile(html).is_ok());
}

#[test]
fn missing_sections_yield_documented_defaults() {
    let profile = extract_profile("<html><body><div class='unrelated'>x</div></body></html>")
        .expect("expected Ok(_)");

    assert!(profile.full_name.is_none());
    assert!(profile.first_name.is_none());
    assert!(profile.last_name.is_none());
    assert!(profile.industry.is_none());
    assert!(profile.annual_salary.is_none());
    assert!(profile.education.is_empty());
    assert!(profile.work_experience.is_empty());
    assert!(profile.skills.is_empty());
    assert_eq!(profile.work_summary, "");
    assert!(profile.it_skills.is_empty());
    assert_eq!(profile.other_details, OtherDetails::default());
}

#[test]
fn other_details_section_without_subsections_is_empty() {
    let profile =
        extract_profile(r#"<div class="YQo1I"><p>nothing</p></div>"#).expect("expected Ok(_)");
    assert_eq!(profile.other_details, OtherDetails::default());
}

#[test]
fn single_word_name_does_not_abort_run() {
    let html = r#"<div class="name">Cher</div><div class="OesXg">Music</div>"#;
    let profile = extract_profile(html).expect("expected Ok(_)");
    assert_eq!(profile.full_name.as_deref(), Some("Cher"));
    assert!(profile.first_name.is_none());
    assert!(profile.last_name.is_none());
    assert_eq!(profile.industry.as_deref(), Some("Music"));
}

#[test]
fn every_education_item_malformed_still_extracts_rest() {
    let html = r#"
        <div class="edu-label"><div class="desig">no commas here</div></div>
        <div class="edu-label"><div class="desig">one, comma</div></div>
        <div class="skills">Excel</div>
    "#;
    let profile = extract_profile(html).expect("expected Ok(_)");
    assert!(profile.education.is_empty());
    assert_eq!(profile.skills, vec!["Excel"]);
}

#[test]
fn extraction_is_idempotent() {
    let first = extract_profile(SAMPLE).expect("expected Ok(_)");
    let second = extract_profile(SAMPLE).expect("expected Ok(_)");
    assert_eq!(
        first.to_json().expect("serializable"),
        second.to_json().expect("serializable")
    );
}

#[test]
fn binary_input_is_rejected() {
    let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01";
    assert!(matches!(extract_profile_bytes(png), Err(Error::InvalidInput(_))));
    assert!(matches!(
        extract_profile("<div>\0</div>"),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn stray_nul_deep_in_page_is_tolerated() {
    let nul_at = SAMPLE
        .find("<div class=\"cv-prev-it-skills\"")
        .expect("sample has IT-skills table");
    assert!(nul_at > 1024);
    let mut html = SAMPLE.to_string();
    html.insert(nul_at, '\0');

    let from_str = extract_profile(&html).expect("expected Ok(_)");
    assert_eq!(from_str.full_name.as_deref(), Some("Priya Ramesh Iyer"));

    let from_bytes = extract_profile_bytes(html.as_bytes()).expect("expected Ok(_)");
    assert_eq!(from_bytes, from_str);
}

#[test]
fn deeply_nested_document_completes() {
    let depth = 500;
    let mut html = String::new();
    for _ in 0..depth {
        html.push_str("<div>");
    }
    html.push_str(r#"<div class="skills">Deep</div>"#);
    for _ in 0..depth {
        html.push_str("</div>");
    }
    let profile = extract_profile(&html).expect("expected Ok(_)");
    assert_eq!(profile.skills, vec!["Deep"]);
}
