use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use ethers::types::H256;
use op_dispute_mon_validator::{Metrics, RootAgreement, ValidatorConfig};
use serde::Serialize;
use std::time::Duration;
use tracing::Level;

/// Arguments for the `op-dispute-mon` binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count, env = "VERBOSITY")]
    v: u8,

    /// The HTTP RPC endpoint of the trusted rollup node.
    #[arg(
        long,
        short,
        help = "The HTTP RPC endpoint of the trusted rollup node.",
        env = "OP_DISPUTE_MON_ROLLUP_RPC"
    )]
    rollup_rpc: String,

    /// The L2 block number the root claim commits to.
    #[arg(long, short, help = "The L2 block number the root claim commits to.")]
    l2_block_number: u64,

    /// The root claim of the dispute game.
    #[arg(long, short = 'c', help = "The root claim of the dispute game.")]
    root_claim: H256,

    /// The output fetch timeout in seconds.
    #[arg(
        long,
        short,
        help = "The output fetch timeout in seconds. 0 disables the timeout.",
        default_value_t = 10,
        env = "OP_DISPUTE_MON_FETCH_TIMEOUT"
    )]
    fetch_timeout: u64,
}

/// The [CheckReport] is printed to stdout once the root claim has been checked.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    l2_block_number: u64,
    root_claim: H256,
    status: &'static str,
    agree: bool,
    fetched_root: H256,
}

impl CheckReport {
    fn new(l2_block_number: u64, root_claim: H256, agreement: RootAgreement) -> Self {
        Self {
            l2_block_number,
            root_claim,
            status: agreement.status(),
            agree: agreement.agree(),
            fetched_root: agreement.fetched(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command arguments
    let Args {
        v,
        rollup_rpc,
        l2_block_number,
        root_claim,
        fetch_timeout,
    } = Args::parse();

    // Initialize the tracing subscriber
    init_tracing_subscriber(v)?;

    // Create the validator config.
    let fetch_timeout = (fetch_timeout > 0).then(|| Duration::from_secs(fetch_timeout));
    let config = ValidatorConfig::new(rollup_rpc, fetch_timeout);
    tracing::info!(target: "op-dispute-mon-cli", "Validator config created successfully.");

    Metrics::describe();
    let validator = config.build(Metrics)?;
    tracing::debug!(target: "op-dispute-mon-cli", "Checking root claim {:?} at L2 block #{} against {}", root_claim, l2_block_number, &config.rollup_rpc);

    let agreement = validator
        .check_root_agreement(l2_block_number, root_claim)
        .await?;
    if agreement == RootAgreement::Unknown {
        tracing::info!(target: "op-dispute-mon-cli", "Trusted node has not produced L2 block #{} yet, check again later.", l2_block_number);
    }

    let report = CheckReport::new(l2_block_number, root_claim, agreement);
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}

/// Initializes the tracing subscriber
///
/// # Arguments
/// * `verbosity_level` - The verbosity level (0-4)
///
/// # Returns
/// * `Result<()>` - Ok if successful, Err otherwise.
fn init_tracing_subscriber(verbosity_level: u8) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match verbosity_level {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))
}
