//! Errors raised by the aggregator itself.
//!
//! Collaborator failures (optimizer, dumper, state store) are not wrapped;
//! they reach the caller as the collaborator reported them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    /// A group that must resolve to one file holds none.
    #[error("{kind} group has no assets")]
    EmptyGroup { kind: &'static str },

    #[error("failed to serialize source list for fingerprinting")]
    Fingerprint(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_display() {
        let err = AggregateError::EmptyGroup { kind: "file" };
        assert_eq!(err.to_string(), "file group has no assets");
    }
}
