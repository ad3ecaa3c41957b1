//! The error module contains the [FetchError] returned by an [OutputSource](crate::OutputSource).

use std::time::Duration;
use thiserror::Error;

/// The signature the rollup node leaves on the innermost cause of an error when it is asked for
/// a block it has not produced or synced yet.
const NOT_FOUND_SIGNATURE: &str = "not found";

/// The [FetchError] enum describes the ways fetching a trusted output root can fail.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The rollup node has not produced or synced the requested block yet.
    #[error("output not yet available: {reason}")]
    HeightNotProduced {
        /// The diagnostic returned by the rollup node.
        reason: String,
    },
    /// Any other failure to fetch the output root.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
    /// The fetch did not complete before the deadline.
    #[error("output fetch timed out after {0:?}")]
    Timeout(Duration),
}

impl FetchError {
    /// Classifies an unstructured upstream error. The error chain is rendered in full and checked
    /// for the not-found signature with [is_height_not_produced].
    pub fn classify(err: anyhow::Error) -> Self {
        let message = format!("{err:#}");
        if is_height_not_produced(&message) {
            Self::HeightNotProduced { reason: message }
        } else {
            Self::Transport(err)
        }
    }

    /// Returns true if the error is the benign "block not produced yet" condition.
    pub fn is_height_not_produced(&self) -> bool {
        matches!(self, Self::HeightNotProduced { .. })
    }
}

/// Returns true if a `": "` joined error chain reports that the requested block does not exist
/// yet. Only the innermost cause is inspected, so wrapper text that happens to contain "not found"
/// does not match.
pub fn is_height_not_produced(message: &str) -> bool {
    message
        .rsplit(": ")
        .next()
        .map(|cause| cause.trim().ends_with(NOT_FOUND_SIGNATURE))
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::anyhow;

    const SYNC_STATUS_NOT_FOUND: &str = "failed to get L2 block ref with sync status: failed to \
        determine L2BlockRef of height 42984924, could not get payload: not found";

    #[test]
    fn matches_rollup_node_not_found() {
        assert!(is_height_not_produced(SYNC_STATUS_NOT_FOUND));
        assert!(is_height_not_produced("not found"));
        assert!(is_height_not_produced("failed to fetch header: header not found"));
    }

    #[test]
    fn rejects_other_failures() {
        assert!(!is_height_not_produced("boom"));
        assert!(!is_height_not_produced(""));
        assert!(!is_height_not_produced("method not found: connection refused"));
        assert!(!is_height_not_produced("not found: unexpected end of stream"));
    }

    #[test]
    fn classify_walks_the_error_chain() {
        let err = anyhow!("could not get payload: not found")
            .context("failed to determine L2BlockRef of height 42984924")
            .context("failed to get L2 block ref with sync status");
        assert!(FetchError::classify(err).is_height_not_produced());

        let err = anyhow!("connection refused").context("block not found in cache");
        assert!(!FetchError::classify(err).is_height_not_produced());
    }

    #[test]
    fn transport_error_keeps_the_original_message() {
        let err = FetchError::classify(anyhow!("boom"));
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
