//! Asset descriptors: one CSS source each.

use serde::{Deserialize, Serialize};

/// Where an asset lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Local file, eligible for aggregation.
    #[default]
    File,
    /// Externally hosted stylesheet, always referenced as-is.
    External,
}

/// License metadata attached to an asset.
///
/// Compared by value: two assets carry "the same license" only when both
/// name and url match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

impl License {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Comment line emitted ahead of the asset's content in an aggregate.
    pub fn comment(&self) -> String {
        format!("/* @license {} {} */\n", self.name, self.url)
    }
}

/// One CSS source reference.
///
/// Deserializes from manifest entries such as:
///
/// ```json
/// { "data": "themes/base/css/layout.css", "media": "screen",
///   "license": { "name": "MIT", "url": "https://opensource.org/licenses/MIT" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Locator: path relative to the web root, or URL for external assets.
    pub data: String,

    #[serde(rename = "type", default)]
    pub kind: AssetType,

    /// Whether the asset may be aggregated.
    #[serde(default = "default_preprocess")]
    pub preprocess: bool,

    #[serde(default = "default_media")]
    pub media: String,

    #[serde(default)]
    pub license: Option<License>,
}

const fn default_preprocess() -> bool {
    true
}

fn default_media() -> String {
    "all".into()
}

impl AssetDescriptor {
    /// Aggregatable local file with `media = "all"` and no license.
    pub fn file(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            kind: AssetType::File,
            preprocess: true,
            media: default_media(),
            license: None,
        }
    }

    /// Externally hosted stylesheet.
    pub fn external(data: impl Into<String>) -> Self {
        Self {
            kind: AssetType::External,
            preprocess: false,
            ..Self::file(data)
        }
    }

    pub fn with_preprocess(mut self, preprocess: bool) -> Self {
        self.preprocess = preprocess;
        self
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }

    pub fn with_license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let asset: AssetDescriptor = serde_json::from_str(r#"{"data":"a.css"}"#).unwrap();
        assert_eq!(asset, AssetDescriptor::file("a.css"));
    }

    #[test]
    fn test_deserialize_external_with_license() {
        let asset: AssetDescriptor = serde_json::from_str(
            r#"{"data":"https://cdn.example.com/x.css","type":"external","preprocess":false,
               "license":{"name":"MIT","url":"https://mit.example"}}"#,
        )
        .unwrap();
        assert_eq!(asset.kind, AssetType::External);
        assert!(!asset.preprocess);
        assert_eq!(asset.license, Some(License::new("MIT", "https://mit.example")));
    }

    #[test]
    fn test_license_value_equality() {
        let a = License::new("GPL-2.0", "https://gpl.example");
        let b = License::new("GPL-2.0", "https://gpl.example");
        let c = License::new("GPL-2.0", "https://other.example");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_license_comment() {
        let license = License::new("MIT", "https://mit.example");
        assert_eq!(license.comment(), "/* @license MIT https://mit.example */\n");
    }
}
