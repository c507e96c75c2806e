//! Content hashing utilities using blake3.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let digest = hash::compute("some content"); // -> [u8; 32]
//! let name = hash::fingerprint("some content"); // -> 32 hex chars
//! ```

/// Length of the hex fingerprint used in artifact file names.
pub const FINGERPRINT_LEN: usize = 32;

/// Compute the 256-bit blake3 digest of byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> [u8; 32] {
    *blake3::hash(data.as_ref()).as_bytes()
}

/// Compute hash and return it as a hex fingerprint.
///
/// Useful for content-addressed filenames (e.g. `css_a1b2...f0.css`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    let mut hex = hex::encode(compute(value));
    hex.truncate(FINGERPRINT_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        let a = fingerprint("body{color:red}");
        let b = fingerprint("body{color:red}");
        assert_eq!(a, b);
        assert_eq!(a.len(), FINGERPRINT_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        assert_ne!(fingerprint("a{}"), fingerprint("b{}"));
    }
}
