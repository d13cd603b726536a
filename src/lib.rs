//! # rs-profile-extract
//!
//! Extracts a structured professional profile (name, industry, salary,
//! education, work history, skills, personal details) from a resume/profile
//! HTML page.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_profile_extract::extract_profile;
//!
//! let html = r#"<html><body>
//!     <div class="name">Jane Mary Doe</div>
//!     <div class="OesXg">IT Services &amp; Consulting</div>
//!     <div class="skills">Rust</div>
//! </body></html>"#;
//!
//! let profile = extract_profile(html)?;
//! assert_eq!(profile.first_name.as_deref(), Some("Jane"));
//! assert_eq!(profile.last_name.as_deref(), Some("Mary Doe"));
//! assert_eq!(profile.skills, vec!["Rust"]);
//! println!("{}", profile.to_json_pretty()?);
//! # Ok::<(), rs_profile_extract::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - **Always a record**: missing page sections leave their field empty
//!   (`null`, `""`, `[]` or `{}`); the serialized key set never changes.
//! - **Per-item isolation**: a malformed education label or an incomplete
//!   table row drops that item only.
//! - **Configurable markers**: every CSS selector can be overridden through
//!   [`Options::selectors`].
//!
//! Skipped items are reported through `tracing` at `debug` level.

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Page markers and their compiled form.
pub mod selector;

/// Field extractors and the pipeline runner.
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL resolution for relative links.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use result::{EducationEntry, ItSkillRow, OtherDetails, ProfileRecord, WorkExperienceEntry};

/// Extracts a profile from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::extract_profile;
///
/// let profile = extract_profile("<html><body></body></html>")?;
/// assert!(profile.full_name.is_none());
/// assert!(profile.work_summary.is_empty());
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
pub fn extract_profile(html: &str) -> Result<ProfileRecord> {
    extract_profile_with_options(html, &Options::default())
}

/// Extracts a profile from an HTML document with custom options.
///
/// Returns an error only when the input is binary or a configured selector
/// is invalid; page-level gaps never fail.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::{extract_profile_with_options, Options};
/// use rs_profile_extract::selector::Selectors;
///
/// let options = Options {
///     selectors: Selectors {
///         industry: "span.industry".to_string(),
///         ..Selectors::default()
///     },
///     ..Options::default()
/// };
/// let html = r#"<span class="industry">Retail</span>"#;
/// let profile = extract_profile_with_options(html, &options)?;
/// assert_eq!(profile.industry.as_deref(), Some("Retail"));
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
pub fn extract_profile_with_options(html: &str, options: &Options) -> Result<ProfileRecord> {
    extract::extract_profile(html, options)
}

/// Extracts a profile from HTML bytes with automatic encoding detection.
///
/// The charset is taken from `<meta charset>` or a `Content-Type`
/// `http-equiv` meta tag, defaulting to UTF-8. Binary input is rejected.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::extract_profile_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><div class=\"name\">Ren\xE9 Dupont</div>";
/// let profile = extract_profile_bytes(html)?;
/// assert_eq!(profile.first_name.as_deref(), Some("René"));
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
pub fn extract_profile_bytes(html: &[u8]) -> Result<ProfileRecord> {
    extract_profile_bytes_with_options(html, &Options::default())
}

/// Extracts a profile from HTML bytes with custom options and automatic
/// encoding detection.
pub fn extract_profile_bytes_with_options(html: &[u8], options: &Options) -> Result<ProfileRecord> {
    let html_str = encoding::decode_html(html)?;
    extract_profile_with_options(&html_str, options)
}
