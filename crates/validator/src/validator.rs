//! The `validator` module contains the [OutputValidator], which checks dispute game root claims
//! against a trusted [OutputSource].

use crate::{Claim, FetchError, OutputAtBlockResponse, OutputMetrics, OutputSource, RootAgreement};
use std::time::{Duration, Instant};

/// The [OutputValidator] compares root claims against the output roots of a trusted
/// [OutputSource]. It holds no mutable state and may be shared between tasks.
#[derive(Debug, Clone)]
pub struct OutputValidator<M, S> {
    /// The sink for fetch latency observations.
    metrics: M,
    /// The trusted source of output roots.
    source: S,
    /// The deadline for a single output fetch, if any.
    fetch_timeout: Option<Duration>,
}

impl<M: OutputMetrics, S: OutputSource> OutputValidator<M, S> {
    /// Creates a new [OutputValidator] without a fetch deadline.
    pub fn new(metrics: M, source: S) -> Self {
        Self {
            metrics,
            source,
            fetch_timeout: None,
        }
    }

    /// Sets the deadline for a single output fetch. An elapsed deadline is reported as
    /// [FetchError::Timeout].
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = Some(fetch_timeout);
        self
    }

    /// Checks whether the root claim agrees with the trusted output root at the given L2 block.
    ///
    /// ### Takes
    /// - `block_number`: The L2 block number the root claim commits to.
    /// - `root_claim`: The root claim of the dispute game.
    ///
    /// ### Returns
    /// - `Ok(RootAgreement::Agree | RootAgreement::Disagree)`: The trusted output was fetched and
    ///    compared against the claim. One fetch latency observation is recorded.
    /// - `Ok(RootAgreement::Unknown)`: The trusted node has not produced the block yet.
    /// - `Err(FetchError)`: The trusted output could not be fetched.
    pub async fn check_root_agreement(
        &self,
        block_number: u64,
        root_claim: Claim,
    ) -> Result<RootAgreement, FetchError> {
        let start = Instant::now();
        let output = match self.fetch_output(block_number).await {
            Ok(output) => output,
            Err(FetchError::HeightNotProduced { reason }) => {
                tracing::debug!(target: "output-validator", "Output at L2 block #{} is not available yet: {}", block_number, reason);
                return Ok(RootAgreement::Unknown);
            }
            Err(e) => {
                tracing::error!(target: "output-validator", "Error getting output at L2 block #{} from trusted node: {}", block_number, e);
                return Err(e);
            }
        };
        self.metrics
            .record_output_fetch_time(start.elapsed().as_secs_f64());

        if output.output_root == root_claim {
            tracing::debug!(target: "output-validator", "Root claim for L2 block #{} matches output at block on trusted node.", block_number);
            Ok(RootAgreement::Agree(output.output_root))
        } else {
            tracing::warn!(target: "output-validator", "Root claim does not match output at block on trusted node. Claim: {:?}, Output: {:?}", root_claim, output.output_root);
            Ok(RootAgreement::Disagree(output.output_root))
        }
    }

    async fn fetch_output(
        &self,
        block_number: u64,
    ) -> Result<OutputAtBlockResponse, FetchError> {
        match self.fetch_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.source.output_at_block(block_number))
                .await
                .map_err(|_| FetchError::Timeout(timeout))?,
            None => self.source.output_at_block(block_number).await,
        }
    }
}
