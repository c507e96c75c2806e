//! Reading asset lists for the `optimize` command.
//!
//! A manifest is a JSON array of asset descriptors, in page order:
//!
//! ```json
//! [
//!   { "data": "core/css/reset.css" },
//!   { "data": "https://fonts.example.com/css?family=Inter", "type": "external" },
//!   { "data": "themes/print.css", "media": "print" }
//! ]
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use super::AssetDescriptor;

/// Parse a manifest from JSON text.
pub fn parse_manifest(content: &str) -> Result<Vec<AssetDescriptor>> {
    serde_json::from_str(content).context("invalid asset manifest")
}

/// Load a manifest from `path`, or from stdin when `path` is `-`.
pub fn read_manifest(path: &Path) -> Result<Vec<AssetDescriptor>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read manifest from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest `{}`", path.display()))?
    };
    parse_manifest(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetType;
    use tempfile::TempDir;

    #[test]
    fn test_parse_manifest() {
        let assets = parse_manifest(
            r#"[{"data":"a.css"},{"data":"https://x.example/b.css","type":"external"}]"#,
        )
        .unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[1].kind, AssetType::External);
    }

    #[test]
    fn test_parse_manifest_rejects_object() {
        assert!(parse_manifest(r#"{"data":"a.css"}"#).is_err());
    }

    #[test]
    fn test_read_manifest_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.json");
        fs::write(&path, r#"[{"data":"a.css","media":"print"}]"#).unwrap();

        let assets = read_manifest(&path).unwrap();
        assert_eq!(assets[0].media, "print");
    }

    #[test]
    fn test_read_manifest_missing_file() {
        let err = read_manifest(Path::new("/nonexistent/assets.json")).unwrap_err();
        assert!(err.to_string().contains("assets.json"));
    }
}
