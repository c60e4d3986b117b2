//! Command-line entry point for the course-evaluation contract client.
//!
//! One subcommand per contract operation; each invocation performs a single
//! call and prints its outcome as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use clap::{Parser, Subcommand};

use teacheval_client::config::load_config;
use teacheval_client::contract::{ContractClient, HttpRpc, Wallet};
use teacheval_client::observability;

#[derive(Parser)]
#[command(name = "teacheval-client")]
#[command(about = "Client for the course-evaluation smart contract", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "teacheval.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a course for evaluation
    ChooseCourse { course_id: u64 },
    /// Enroll in a course
    EnrollCourse { course_id: u64 },
    /// Submit rating scores for a course
    SubmitReview {
        course_id: u64,
        /// Ordered rating scores, forwarded to the contract as given
        #[arg(required = true)]
        ratings: Vec<u64>,
    },
    /// View the stored reviews for a course
    ViewReview { course_id: u64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        rpc_url = %config.rpc.url,
        contract = %config.contract.address,
        chain_id = config.rpc.chain_id,
        "Configuration loaded"
    );

    let wallet = Wallet::from_env(config.rpc.chain_id)?;

    // Catch a key/config mismatch before anything goes on the wire.
    if let Some(expected) = &config.account.address {
        let expected: Address = expected.parse()?;
        if expected != wallet.address() {
            return Err(format!(
                "configured account {} does not match key-derived address {}",
                expected,
                wallet.address()
            )
            .into());
        }
    }

    let contract_address: Address = config.contract.address.parse()?;
    let rpc = HttpRpc::connect(&config.rpc)?;
    let client = ContractClient::new(
        Arc::new(rpc),
        wallet,
        contract_address,
        config.gas.fixed_gas_price_wei,
    );

    match cli.command {
        Commands::ChooseCourse { course_id } => {
            let outcome = client.choose_course(U256::from(course_id)).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::EnrollCourse { course_id } => {
            let outcome = client.enroll_course(U256::from(course_id)).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::SubmitReview { course_id, ratings } => {
            let ratings = ratings.into_iter().map(U256::from).collect();
            let outcome = client.submit_review(U256::from(course_id), ratings).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::ViewReview { course_id } => {
            let reviews = client.view_review(U256::from(course_id)).await?;
            println!("{}", serde_json::to_string_pretty(&reviews)?);
        }
    }

    Ok(())
}
