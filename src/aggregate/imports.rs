//! `@import` hoisting for concatenated stylesheets.
//!
//! CSS ignores `@import` rules that follow any other rule. Once several
//! files are concatenated, imports from the second file onward would land
//! mid-sheet, so every import is moved to the top of the aggregate.

use std::sync::LazyLock;

use regex::Regex;

/// `@import` followed by a quoted string or a `url()` (quoted or bare,
/// escaped quotes allowed), then anything up to the first `;`. Group 1 is the
/// rule; a single line break right after it is consumed as well.
static RE_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i)(@import\s*?(?:"#,
        r#"'(?:\\'|.)*?'"#,
        r#"|"(?:\\"|.)*?""#,
        r#"|url\(\s*?(?:\\[)'"]|[^'")])*?\s*?\)"#,
        r#"|url\(\s*?'.*?'\s*?\)"#,
        r#"|url\(\s*?".*?"\s*?\)"#,
        r#").*?;)(?:\r?\n)?"#,
    ))
    .unwrap()
});

/// Move every `@import` rule to the top of `css`.
///
/// Imports keep their relative order and are followed by one newline; the
/// remaining text keeps its order. Text without imports is returned as-is.
pub fn hoist_imports(css: &str) -> String {
    let mut imports = String::new();
    let mut rest = String::with_capacity(css.len());
    let mut last = 0;

    for caps in RE_IMPORT.captures_iter(css) {
        let (Some(whole), Some(rule)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        rest.push_str(&css[last..whole.start()]);
        imports.push_str(rule.as_str());
        last = whole.end();
    }

    if imports.is_empty() {
        return css.to_string();
    }

    rest.push_str(&css[last..]);
    imports.push('\n');
    imports.push_str(&rest);
    imports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hoists_single_import() {
        let css = "body{color:red}\n@import url('a.css');\nh1{color:blue}";
        assert_eq!(
            hoist_imports(css),
            "@import url('a.css');\nbody{color:red}\nh1{color:blue}"
        );
    }

    #[test]
    fn test_no_imports_unchanged() {
        let css = "body{color:red}\nh1{color:blue}\n";
        assert_eq!(hoist_imports(css), css);
    }

    #[test]
    fn test_preserves_import_order() {
        let css = "a{}\n@import \"one.css\";\nb{}\n@import url(two.css) screen;\nc{}\n";
        assert_eq!(
            hoist_imports(css),
            "@import \"one.css\";@import url(two.css) screen;\na{}\nb{}\nc{}\n"
        );
    }

    #[test]
    fn test_case_insensitive() {
        let css = "a{}\n@IMPORT 'x.css';\n";
        assert_eq!(hoist_imports(css), "@IMPORT 'x.css';\na{}\n");
    }

    #[test]
    fn test_non_greedy_on_one_line() {
        // minified output puts everything on one line
        let css = "a{}@import url(x.css);b{}@import url(y.css);c{}";
        assert_eq!(
            hoist_imports(css),
            "@import url(x.css);@import url(y.css);\na{}b{}c{}"
        );
    }

    #[test]
    fn test_double_quoted_url_and_escaped_quote() {
        let css = "a{}\n@import url(\"it\\\"s.css\");\n";
        assert_eq!(hoist_imports(css), "@import url(\"it\\\"s.css\");\na{}\n");
    }

    #[test]
    fn test_import_already_first() {
        let css = "@import url(a.css);\nbody{}";
        assert_eq!(hoist_imports(css), "@import url(a.css);\nbody{}");
    }
}
