//! Linear search for a free numeric suffix.
use crate::error::{Error, Result};

/// Returns the first `base + N` with `N >= start` for which `is_taken` returns
/// false, together with `N`.
///
/// Fails with `Error::Exhausted` when `u64::MAX` is reached and still taken.
pub fn probe<F>(base: &str, start: u64, mut is_taken: F) -> Result<(String, u64)>
where
    F: FnMut(&str) -> bool,
{
    let mut n = start;
    loop {
        let name = format!("{base}{n}");
        if !is_taken(&name) {
            return Ok((name, n));
        }
        n = n.checked_add(1).ok_or_else(|| Error::Exhausted {
            base: base.to_string(),
        })?;
    }
}
