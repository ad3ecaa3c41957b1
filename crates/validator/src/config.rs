//! The `config` module contains the [ValidatorConfig].

use crate::{OutputMetrics, OutputValidator, RollupNodeSource};
use anyhow::Result;
use std::time::Duration;

/// The [ValidatorConfig] struct contains the configuration for an [OutputValidator] backed by a
/// trusted rollup node.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// The HTTP RPC endpoint of the trusted rollup node used as the source of truth for the L2
    /// chain.
    pub rollup_rpc: String,
    /// The deadline for a single output fetch. `None` waits for the node indefinitely.
    pub fetch_timeout: Option<Duration>,
}

impl ValidatorConfig {
    /// Creates a new [ValidatorConfig] with the given configuration.
    pub fn new(rollup_rpc: String, fetch_timeout: Option<Duration>) -> Self {
        Self {
            rollup_rpc,
            fetch_timeout,
        }
    }

    /// Builds an [OutputValidator] that reports to `metrics` and fetches outputs from the
    /// configured rollup node.
    pub fn build<M: OutputMetrics>(&self, metrics: M) -> Result<OutputValidator<M, RollupNodeSource>> {
        let source = RollupNodeSource::try_new(&self.rollup_rpc)?;
        let validator = OutputValidator::new(metrics, source);

        Ok(match self.fetch_timeout {
            Some(timeout) => validator.with_fetch_timeout(timeout),
            None => validator,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::NoopMetrics;

    #[test]
    fn build_rejects_invalid_url() {
        let config = ValidatorConfig::new("not a url".to_string(), None);
        assert!(config.build(NoopMetrics).is_err());
    }

    #[test]
    fn build_accepts_http_url() {
        let config = ValidatorConfig::new(
            "http://localhost:7545".to_string(),
            Some(Duration::from_secs(10)),
        );
        assert!(config.build(NoopMetrics).is_ok());
    }
}
