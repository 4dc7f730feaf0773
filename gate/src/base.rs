//! Mount-point handling for apps served below a path prefix.
//!
//! The route table only knows app-relative paths (`/dashboard`). The browser
//! and the static host see full paths (`/bookkee/dashboard`). A base of `""`
//! means the app is mounted at the site root.

#[cfg(test)]
#[path = "base_test.rs"]
mod base_test;

/// Canonical base: leading slash, no trailing slash, `""` for the root.
#[must_use]
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Full browser path for an app-relative `path`.
#[must_use]
pub fn join_base(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// App-relative path for a full browser path.
///
/// Returns `None` when `full` is outside the mount point. `/bookkeeper` is
/// outside `/bookkee`.
#[must_use]
pub fn strip_base<'a>(base: &str, full: &'a str) -> Option<&'a str> {
    let rest = full.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
