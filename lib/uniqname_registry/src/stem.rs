//! Deriving the string a numeric suffix is appended to.
use std::borrow::Cow;

/// Returns the joined base for synthesizing a name from `prefix`.
///
/// - non-empty `prefix`: `prefix + separator`
/// - empty `prefix`: `empty_marker`, or `separator` itself if the marker is
///   empty. No separator is appended in this case; the fallback stem already
///   plays that role.
///
/// When both `separator` and `empty_marker` are empty the base is `""`, so
/// anonymous names become bare numbers.
pub fn joined_base<'a>(prefix: &'a str, separator: &'a str, empty_marker: &'a str) -> Cow<'a, str> {
    if !prefix.is_empty() {
        Cow::Owned(format!("{prefix}{separator}"))
    } else if !empty_marker.is_empty() {
        Cow::Borrowed(empty_marker)
    } else {
        Cow::Borrowed(separator)
    }
}
