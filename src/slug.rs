//! URL slug sanitizer for path-slot values.
//!
//! Applied to every value rendered into a placeholder slot, never to query
//! string values (those are form-urlencoded instead).

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w \-.]+").expect("Failed to compile slug filter regex"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \-.]+").expect("Failed to compile slug separator regex"));

/// Sanitize a value for use inside a URL path.
///
/// Drops non-ASCII characters, lowercases, strips everything outside
/// `[\w \-.]`, collapses runs of space/dash/dot into a single `-` and trims
/// leading and trailing separators.
///
/// # Example
///
/// ```
/// use retrace::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("v1.2"), "v1-2");
/// ```
#[must_use]
pub fn slugify(value: &str) -> String {
    let ascii: String = value.chars().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let kept = DISALLOWED.replace_all(&lowered, "");
    let collapsed = SEPARATORS.replace_all(&kept, "-");
    collapsed
        .trim_matches(|c| c == '-' || c == '.')
        .to_string()
}
