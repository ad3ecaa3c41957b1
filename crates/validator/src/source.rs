//! The `source` module contains the [OutputSource] trait and its rollup node implementation.

use crate::{is_height_not_produced, FetchError, OutputAtBlockResponse};
use anyhow::Result;
use async_trait::async_trait;
use ethers::providers::{Http, JsonRpcClient, Provider, ProviderError, RpcError};
use std::sync::Arc;

/// The JSON-RPC error code for an unknown method. Its message contains "not found" but it is
/// never a missing block.
const METHOD_NOT_FOUND_CODE: i64 = -32601;

/// The [OutputSource] trait defines the interface of a trusted source of L2 output roots.
#[async_trait]
pub trait OutputSource: Send + Sync {
    /// Fetches the output at the given L2 block number.
    ///
    /// ### Takes
    /// - `block_number`: The L2 block number to fetch the output at. It may be ahead of the
    ///    source's sync progress.
    ///
    /// ### Returns
    /// - `Ok(OutputAtBlockResponse)`: The output at the block.
    /// - `Err(FetchError::HeightNotProduced)`: The source has not produced the block yet.
    /// - `Err(FetchError)`: Any other failure.
    async fn output_at_block(&self, block_number: u64) -> Result<OutputAtBlockResponse, FetchError>;
}

#[async_trait]
impl<T: OutputSource + ?Sized> OutputSource for Arc<T> {
    async fn output_at_block(&self, block_number: u64) -> Result<OutputAtBlockResponse, FetchError> {
        (**self).output_at_block(block_number).await
    }
}

/// The [RollupNodeSource] fetches outputs from a trusted rollup node over JSON-RPC.
/// This RPC should be 100% trusted, its outputs are the source of truth for the L2 chain.
#[derive(Debug, Clone)]
pub struct RollupNodeSource<P = Http> {
    provider: Arc<Provider<P>>,
}

impl RollupNodeSource<Http> {
    /// Creates a new [RollupNodeSource] connected to the rollup node at the given HTTP URL.
    pub fn try_new(rollup_rpc: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rollup_rpc)?;
        Ok(Self::new(Arc::new(provider)))
    }
}

impl<P: JsonRpcClient> RollupNodeSource<P> {
    /// Creates a new [RollupNodeSource] from an existing provider.
    pub fn new(provider: Arc<Provider<P>>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: JsonRpcClient + 'static> OutputSource for RollupNodeSource<P> {
    async fn output_at_block(&self, block_number: u64) -> Result<OutputAtBlockResponse, FetchError> {
        tracing::trace!(target: "rollup-node-source", "Requesting output at L2 block #{}", block_number);
        self.provider
            .request(
                "optimism_outputAtBlock",
                vec![format!("0x{:x}", block_number)],
            )
            .await
            .map_err(classify_provider_error)
    }
}

/// Maps a [ProviderError] into a [FetchError]. Only a JSON-RPC error response from the node can
/// report a missing block; transport and decoding failures are always [FetchError::Transport].
fn classify_provider_error(err: ProviderError) -> FetchError {
    let not_produced = err
        .as_error_response()
        .filter(|response| response.code != METHOD_NOT_FOUND_CODE)
        .map(|response| response.message.clone())
        .filter(|message| is_height_not_produced(message));

    match not_produced {
        Some(reason) => FetchError::HeightNotProduced { reason },
        None => FetchError::Transport(anyhow::Error::new(err)),
    }
}
