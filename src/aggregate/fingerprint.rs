//! Group fingerprints.
//!
//! A fingerprint identifies an aggregate by the ordered list of its source
//! locators only. File contents are not hashed: editing a source file does
//! not change the fingerprint, clearing the cache map does.

use std::fmt;

use super::AggregateError;
use crate::asset::AssetDescriptor;

/// A 256-bit fingerprint (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Create a new Fingerprint from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Convert to hex string (the cache map key).
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display first 16 chars of hex for brevity
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Fingerprint the ordered locators of `items`.
///
/// The locator list is serialized as a JSON array before hashing so that
/// `["a", "bc"]` and `["ab", "c"]` never collide by concatenation.
pub fn fingerprint(items: &[AssetDescriptor]) -> Result<Fingerprint, AggregateError> {
    let locators: Vec<&str> = items.iter().map(|asset| asset.data.as_str()).collect();
    let serialized = serde_json::to_vec(&locators).map_err(AggregateError::Fingerprint)?;
    Ok(Fingerprint::new(*blake3::hash(&serialized).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::License;

    fn files(locators: &[&str]) -> Vec<AssetDescriptor> {
        locators.iter().map(|l| AssetDescriptor::file(*l)).collect()
    }

    #[test]
    fn test_same_locators_same_fingerprint() {
        let a = fingerprint(&files(&["a.css", "b.css"])).unwrap();
        let b = fingerprint(&files(&["a.css", "b.css"])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_metadata_is_ignored() {
        let plain = files(&["a.css", "b.css"]);
        let decorated = vec![
            AssetDescriptor::file("a.css")
                .with_media("print")
                .with_license(License::new("MIT", "https://mit.example")),
            AssetDescriptor::file("b.css").with_preprocess(false),
        ];
        assert_eq!(
            fingerprint(&plain).unwrap(),
            fingerprint(&decorated).unwrap()
        );
    }

    #[test]
    fn test_order_and_set_matter() {
        let ab = fingerprint(&files(&["a.css", "b.css"])).unwrap();
        let ba = fingerprint(&files(&["b.css", "a.css"])).unwrap();
        let abc = fingerprint(&files(&["a.css", "b.css", "c.css"])).unwrap();
        assert_ne!(ab, ba);
        assert_ne!(ab, abc);
    }

    #[test]
    fn test_no_concatenation_collision() {
        let split_a = fingerprint(&files(&["a", "bc"])).unwrap();
        let split_b = fingerprint(&files(&["ab", "c"])).unwrap();
        assert_ne!(split_a, split_b);
    }

    #[test]
    fn test_stable_across_runs() {
        // blake3 of the JSON text `["a.css"]`
        let expected = Fingerprint::new(*blake3::hash(br#"["a.css"]"#).as_bytes());
        assert_eq!(fingerprint(&files(&["a.css"])).unwrap(), expected);
    }

    #[test]
    fn test_hex_is_full_digest() {
        let fp = fingerprint(&files(&["a.css"])).unwrap();
        let hex = fp.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        assert!(hex.starts_with(&fp.to_string()));
    }

    #[test]
    fn test_display_is_short() {
        let fp = Fingerprint::new([0xab; 32]);
        assert_eq!(format!("{fp}"), "abababababababab");
    }
}
