//! Configuration options for profile extraction.
//!
//! The `Options` struct carries the page markers to look for and the
//! page URL used when resolving relative links.

use crate::selector::Selectors;

/// Configuration options for profile extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the bundled profile-page layout.
///
/// # Example
///
/// ```rust
/// use rs_profile_extract::Options;
/// use rs_profile_extract::selector::Selectors;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     url: Some("https://profiles.example.com/u/42".to_string()),
///     selectors: Selectors {
///         full_name: "h1.candidate".to_string(),
///         ..Selectors::default()
///     },
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Structural markers for every extracted region.
    ///
    /// Default: [`Selectors::default()`]
    pub selectors: Selectors,

    /// Source URL of the document.
    ///
    /// When provided, relative company logo URLs are resolved against it.
    /// Absolute URLs are left untouched either way.
    ///
    /// Default: `None`
    pub url: Option<String>,
}
