//! Count formatting for log lines.

/// Format count with noun, adding `s` unless the count is one
///
/// # Examples
///
/// - `plural_count(0, "aggregate")` -> `"0 aggregates"`
/// - `plural_count(1, "aggregate")` -> `"1 aggregate"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
