use std::path::PathBuf;

use beacon_fallback::beacon::{ConsensusClient, SignedVoluntaryExit, StateId};
use beacon_fallback::config::validation::validate_config;
use beacon_fallback::config::{load_config, Config, ConfigError};
use beacon_fallback::observability::logging::init_logging;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "beacon-cli")]
#[command(about = "Query validators and submit voluntary exits across fallback beacon nodes", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Beacon node URL; repeat for fallbacks. Replaces the configured endpoints.
    #[arg(short, long = "endpoint")]
    endpoints: Vec<String>,

    /// Per-attempt timeout in seconds.
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up validators by index or public key
    Validators {
        /// Validator indices or 0x-prefixed public keys
        #[arg(required = true)]
        ids: Vec<String>,

        /// State to query: head, genesis, finalized, justified, a slot or a state root
        #[arg(long, default_value = "head")]
        state: StateId,

        /// Decode into validator records instead of printing the raw response
        #[arg(long)]
        typed: bool,
    },
    /// Submit a signed voluntary exit
    Exit {
        #[arg(long)]
        epoch: u64,

        #[arg(long)]
        validator_index: u64,

        /// 0x-prefixed BLS signature
        #[arg(long)]
        signature: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if !cli.endpoints.is_empty() {
        config.consensus.endpoints = cli.endpoints.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.consensus.timeout_secs = timeout;
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    init_logging(&config.observability.log_level);

    let client = ConsensusClient::from_config(&config.consensus, None)?;
    let endpoints: Vec<_> = client.endpoints().collect();
    tracing::info!(
        endpoints = ?endpoints,
        timeout = ?client.timeout(),
        "Consensus client ready"
    );

    match cli.command {
        Commands::Validators { ids, state, typed } => {
            let json = if typed {
                serde_json::to_value(client.fetch_validator_data(ids.as_slice(), &state).await?)?
            } else {
                client.fetch_validators(ids.as_slice(), &state).await?
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Commands::Exit {
            epoch,
            validator_index,
            signature,
        } => {
            let exit = SignedVoluntaryExit::new(epoch, validator_index, signature);
            client.submit_voluntary_exit(&exit).await?;
            println!("Voluntary exit for validator {} submitted", validator_index);
        }
    }

    Ok(())
}
