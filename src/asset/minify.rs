//! CSS minification using lightningcss.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

/// Minify CSS source code.
///
/// Returns `None` when the stylesheet cannot be parsed or printed.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css_strips_whitespace() {
        let minified = minify_css("body {\n  color: red;\n}\n").unwrap();
        assert!(!minified.contains('\n'));
        assert!(minified.starts_with("body{"));
        assert!(minified.len() < "body {\n  color: red;\n}\n".len());
    }
}
