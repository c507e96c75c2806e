//! Per-asset optimization: load, clean up and minify one stylesheet.

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use super::AssetDescriptor;
use super::minify::minify_css;
use crate::debug;
use crate::utils::path::{is_external_link, normalize_url_path, split_path_fragment};

/// Turns one asset into the text that goes into an aggregate.
pub trait AssetOptimizer {
    fn optimize(&self, asset: &AssetDescriptor) -> Result<String>;
}

static RE_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)@charset\s+(?:"[^"]*"|'[^']*')\s*;"#).unwrap());

static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\(\s*(?:'([^']*)'|"([^"]*)"|([^'")\s]+))\s*\)"#).unwrap()
});

/// Reads stylesheets from the web root and prepares them for aggregation.
#[derive(Debug, Clone)]
pub struct CssOptimizer {
    root: PathBuf,
    minify: bool,
    rebase_urls: bool,
}

impl CssOptimizer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            minify: true,
            rebase_urls: true,
        }
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn with_rebase_urls(mut self, rebase_urls: bool) -> Self {
        self.rebase_urls = rebase_urls;
        self
    }

    /// Transform the source text of the stylesheet found at `locator`.
    pub fn process(&self, locator: &str, source: &str) -> String {
        let mut css = RE_CHARSET.replace_all(source, "").into_owned();

        if self.rebase_urls {
            let base_dir = locator.rsplit_once('/').map_or("", |(dir, _)| dir);
            css = rebase_urls(&css, base_dir);
        }

        if self.minify {
            css = match minify_css(&css) {
                Some(minified) => minified,
                None => {
                    debug!("optimize"; "minify failed for {}, keeping source", locator);
                    css
                }
            };
        }

        if !css.ends_with('\n') {
            css.push('\n');
        }
        css
    }
}

impl AssetOptimizer for CssOptimizer {
    fn optimize(&self, asset: &AssetDescriptor) -> Result<String> {
        let path = self.root.join(&asset.data);
        let source = fs::read_to_string(&path)
            .with_context(|| format!("failed to read stylesheet `{}`", asset.data))?;
        Ok(self.process(&asset.data, &source))
    }
}

/// Rewrite relative `url()` references so they resolve from any directory.
///
/// Root-absolute paths, fragments, and URLs with a scheme are left alone.
pub fn rebase_urls(css: &str, base_dir: &str) -> String {
    RE_URL
        .replace_all(css, |caps: &Captures| {
            let (value, quote) = match (caps.get(1), caps.get(2), caps.get(3)) {
                (Some(m), _, _) => (m.as_str(), "'"),
                (_, Some(m), _) => (m.as_str(), "\""),
                (_, _, Some(m)) => (m.as_str(), ""),
                _ => return caps[0].to_string(),
            };

            let value = value.trim();
            if value.is_empty()
                || value.starts_with('/')
                || value.starts_with('#')
                || is_external_link(value)
            {
                return caps[0].to_string();
            }

            let (path, suffix) = split_path_fragment(value);
            let rebased = normalize_url_path(base_dir, path);
            format!("url({quote}{rebased}{suffix}{quote})")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn plain(root: &Path) -> CssOptimizer {
        CssOptimizer::new(root).with_minify(false)
    }

    #[test]
    fn test_rebase_relative_urls() {
        let css = "a{background:url(../img/a.png)}b{background:url('x/b.png?v=1')}";
        let rebased = rebase_urls(css, "themes/base/css");
        assert_eq!(
            rebased,
            "a{background:url(/themes/base/img/a.png)}b{background:url('/themes/base/css/x/b.png?v=1')}"
        );
    }

    #[test]
    fn test_rebase_keeps_absolute_and_external() {
        let css = concat!(
            "a{background:url(/abs.png)}",
            "b{background:url(\"data:image/png;base64,AA\")}",
            "c{background:url(https://cdn.example.com/c.png)}",
            "d{filter:url(#blur)}"
        );
        assert_eq!(rebase_urls(css, "css"), css);
    }

    #[test]
    fn test_process_strips_charset() {
        let out = plain(Path::new("/")).process("a.css", "@charset \"UTF-8\";\nbody{color:red}");
        assert!(!out.contains("@charset"));
        assert!(out.contains("body{color:red}"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_process_without_rebase() {
        let optimizer = plain(Path::new("/")).with_rebase_urls(false);
        let out = optimizer.process("css/a.css", "a{background:url(img.png)}");
        assert_eq!(out, "a{background:url(img.png)}\n");
    }

    #[test]
    fn test_optimize_reads_from_root() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("css")).unwrap();
        std::fs::write(dir.path().join("css/a.css"), "a{background:url(i.png)}").unwrap();

        let out = plain(dir.path())
            .optimize(&AssetDescriptor::file("css/a.css"))
            .unwrap();
        assert_eq!(out, "a{background:url(/css/i.png)}\n");
    }

    #[test]
    fn test_optimize_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = plain(dir.path())
            .optimize(&AssetDescriptor::file("missing.css"))
            .unwrap_err();
        assert!(err.to_string().contains("missing.css"));
    }

    #[test]
    fn test_minified_output() {
        let out = CssOptimizer::new("/").process("a.css", "body {\n  color: red;\n}\n");
        assert!(out.starts_with("body{"));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn test_unparseable_css_kept_verbatim() {
        let out = CssOptimizer::new("/").process("a.css", "a{b:c}}");
        assert_eq!(out, "a{b:c}}\n");
    }
}
