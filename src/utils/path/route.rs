//! URL processing utilities.
//!
//! - Link type detection (external vs relative)
//! - Fragment/query splitting
//! - Resolution of relative references against a base directory

/// Check if a link is external (has a URL scheme like http:, data:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// Protocol-relative links (`//cdn.example.com/a.css`) count as external.
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("data:image/png;base64,AAAA"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.starts_with("//")
        || link.find(':').is_some_and(|pos| {
            pos > 0
                && link[..pos]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        })
}

/// Split a URL into path and suffix (`?query` and/or `#fragment`) parts
///
/// # Examples
/// ```ignore
/// assert_eq!(split_path_fragment("img/a.svg#icon"), ("img/a.svg", "#icon"));
/// assert_eq!(split_path_fragment("font.woff?v=2"), ("font.woff", "?v=2"));
/// assert_eq!(split_path_fragment("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    match url.find(['?', '#']) {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    }
}

/// Resolve `relative` against the directory `base_dir` into a root-absolute
/// URL path, collapsing `.` and `..` segments.
///
/// `..` never climbs above the root.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize_url_path("themes/a/css", "../img/x.png"), "/themes/a/img/x.png");
/// assert_eq!(normalize_url_path("", "x.png"), "/x.png");
/// ```
pub fn normalize_url_path(base_dir: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base_dir.split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com/a.css"));
        assert!(is_external_link("data:image/png;base64,AAAA"));
        assert!(is_external_link("//cdn.example.com/a.css"));
        assert!(!is_external_link("/abs/path.png"));
        assert!(!is_external_link("../img/a.png"));
        assert!(!is_external_link(":bad"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("img/a.svg#icon"), ("img/a.svg", "#icon"));
        assert_eq!(split_path_fragment("font.woff?v=2#x"), ("font.woff", "?v=2#x"));
        assert_eq!(split_path_fragment("plain.png"), ("plain.png", ""));
    }

    #[test]
    fn test_normalize_url_path() {
        assert_eq!(
            normalize_url_path("themes/a/css", "../img/x.png"),
            "/themes/a/img/x.png"
        );
        assert_eq!(normalize_url_path("css", "./fonts/f.woff"), "/css/fonts/f.woff");
        assert_eq!(normalize_url_path("", "x.png"), "/x.png");
        assert_eq!(normalize_url_path("a", "../../../x.png"), "/x.png");
    }
}
