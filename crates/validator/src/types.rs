//! The types module contains the claim, output and verdict types used by the validator.

use ethers::types::H256;
use serde::{Deserialize, Serialize};

/// The [Claim] type represents the root claim asserted by a dispute game for an L2 block.
pub type Claim = H256;

/// A block hash and number pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockId {
    pub hash: H256,
    pub number: u64,
}

/// The [L2BlockRef] struct is the rollup node's reference to the L2 block an output was
/// computed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2BlockRef {
    pub hash: H256,
    pub number: u64,
    pub parent_hash: H256,
    pub timestamp: u64,
    #[serde(rename = "l1origin")]
    pub l1_origin: BlockId,
    pub sequence_number: u64,
}

/// The [OutputAtBlockResponse] struct is the response of the rollup node's
/// `optimism_outputAtBlock` RPC method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputAtBlockResponse {
    /// The output root version.
    pub version: H256,
    /// The output root at the requested block.
    pub output_root: H256,
    /// The L2 block the output root commits to.
    pub block_ref: L2BlockRef,
    /// The storage root of the `L2ToL1MessagePasser` contract.
    pub withdrawal_storage_root: H256,
    /// The state root of the L2 block.
    pub state_root: H256,
}

/// The [RootAgreement] enum is the verdict of a root claim check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootAgreement {
    /// The trusted output root equals the root claim.
    Agree(H256),
    /// The trusted output root differs from the root claim.
    Disagree(H256),
    /// The trusted node has not produced the requested block yet.
    Unknown,
}

impl RootAgreement {
    /// Returns true only if a trusted output root was fetched and it equals the root claim.
    pub fn agree(&self) -> bool {
        matches!(self, Self::Agree(_))
    }

    /// Returns the fetched output root, or the zero hash if none was available.
    pub fn fetched(&self) -> H256 {
        match self {
            Self::Agree(root) | Self::Disagree(root) => *root,
            Self::Unknown => H256::zero(),
        }
    }

    /// Returns the lowercase name of the verdict.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Agree(_) => "agree",
            Self::Disagree(_) => "disagree",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn output_at_block_response_decodes() {
        let raw = r#"{
            "version": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "outputRoot": "0x1000000000000000000000000000000000000000000000000000000000000000",
            "blockRef": {
                "hash": "0x2000000000000000000000000000000000000000000000000000000000000000",
                "number": 42984924,
                "parentHash": "0x3000000000000000000000000000000000000000000000000000000000000000",
                "timestamp": 1700000000,
                "l1origin": {
                    "hash": "0x4000000000000000000000000000000000000000000000000000000000000000",
                    "number": 18500000
                },
                "sequenceNumber": 3
            },
            "withdrawalStorageRoot": "0x5000000000000000000000000000000000000000000000000000000000000000",
            "stateRoot": "0x6000000000000000000000000000000000000000000000000000000000000000",
            "syncStatus": {}
        }"#;

        let response: OutputAtBlockResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.output_root,
            "0x1000000000000000000000000000000000000000000000000000000000000000"
                .parse::<H256>()
                .unwrap()
        );
        assert_eq!(response.block_ref.number, 42984924);
        assert_eq!(response.block_ref.l1_origin.number, 18500000);
        assert_eq!(response.block_ref.sequence_number, 3);
        assert_eq!(response.version, H256::zero());
    }

    #[test]
    fn verdict_accessors() {
        let root = H256::repeat_byte(0x11);

        assert!(RootAgreement::Agree(root).agree());
        assert_eq!(RootAgreement::Agree(root).fetched(), root);
        assert!(!RootAgreement::Disagree(root).agree());
        assert_eq!(RootAgreement::Disagree(root).fetched(), root);
        assert!(!RootAgreement::Unknown.agree());
        assert_eq!(RootAgreement::Unknown.fetched(), H256::zero());
        assert_eq!(RootAgreement::Unknown.status(), "unknown");
    }
}
