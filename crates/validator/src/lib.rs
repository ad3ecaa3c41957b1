#![doc = include_str!("../README.md")]

mod config;
pub use config::ValidatorConfig;

mod error;
pub use error::{is_height_not_produced, FetchError};

mod metrics;
pub use crate::metrics::{Metrics, NoopMetrics, OutputMetrics};

mod source;
pub use source::{OutputSource, RollupNodeSource};

mod types;
pub use types::{BlockId, Claim, L2BlockRef, OutputAtBlockResponse, RootAgreement};

mod validator;
pub use validator::OutputValidator;
