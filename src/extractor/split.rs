//! Delimiter-based sub-field parsing.
//!
//! Several page fields pack more than one value into a single text node
//! ("B.Tech, Computer Science, 2015", "Hindi - Native", "Jane Mary Doe").
//! Each parser here checks the shape it expects and returns a [`SplitError`]
//! instead of guessing, so callers can skip the offending item.

/// Why a packed text value could not be split.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// Wrong number of delimiter-separated parts.
    #[error("expected {expected} parts separated by {delimiter:?}, found {found}")]
    Arity {
        expected: usize,
        found: usize,
        delimiter: &'static str,
    },

    /// Nothing left after trimming.
    #[error("empty value")]
    Empty,
}

/// Split `text` on `delimiter` into exactly `N` trimmed parts.
pub fn split_exact<'t, const N: usize>(
    text: &'t str,
    delimiter: &'static str,
) -> Result<[&'t str; N], SplitError> {
    let parts: Vec<&str> = text.split(delimiter).map(str::trim).collect();
    let found = parts.len();
    <[&str; N]>::try_from(parts).map_err(|_| SplitError::Arity {
        expected: N,
        found,
        delimiter,
    })
}

/// The three components of an education label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeLine {
    pub degree: String,
    pub major: String,
    pub year: String,
}

/// Parse `"Degree, Major, Year"`.
pub fn parse_degree_line(text: &str) -> Result<DegreeLine, SplitError> {
    let [degree, major, year] = split_exact::<3>(text, ",")?;
    Ok(DegreeLine {
        degree: degree.to_string(),
        major: major.to_string(),
        year: year.to_string(),
    })
}

/// Split a full name into its first word and the remainder.
///
/// Returns `None` for single-word (or empty) names.
#[must_use]
pub fn split_name(full_name: &str) -> Option<(&str, &str)> {
    let (first, rest) = full_name.trim().split_once(char::is_whitespace)?;
    Some((first, rest.trim_start()))
}

/// Language name from a `"Name - Proficiency"` item text.
///
/// Text without the separator is taken whole.
pub fn language_name(text: &str) -> Result<&str, SplitError> {
    let name = text.split(" - ").next().unwrap_or_default().trim();
    if name.is_empty() {
        Err(SplitError::Empty)
    } else {
        Ok(name)
    }
}
