use alloy_rpc_types_eth::BlockNumberOrTag;
use clap::{Parser, Subcommand};
use migrator::{config::Config, create_provider, run_migration, run_precheck, snapshot};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "migrator", version)]
#[command(about = "Migrate legacy withdrawals into the L2ToL1MessagePasser")]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Migrate a storage snapshot and write the result
    Migrate {
        /// JSON list of pending withdrawals
        #[arg(long)]
        withdrawals: PathBuf,

        /// JSON storage snapshot to migrate
        #[arg(long)]
        state: PathBuf,

        /// Where to write the migrated snapshot
        #[arg(long)]
        out: PathBuf,
    },

    /// Check that every pending withdrawal was sent through the legacy message passer
    Precheck {
        /// JSON list of pending withdrawals
        #[arg(long)]
        withdrawals: PathBuf,

        /// L2 RPC endpoint, overrides the config file
        #[arg(long, env = "L2_RPC_URL")]
        rpc_url: Option<String>,

        /// Block to read at (defaults to latest)
        #[arg(long)]
        block: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!(config = %cli.config.display(), "Loading config");
    let config = Config::from_file(&cli.config)?;
    info!(network = ?config.network, "Loaded config");

    match cli.command {
        Command::Migrate {
            withdrawals,
            state,
            out,
        } => {
            let withdrawals = snapshot::load_withdrawals(&withdrawals)?;
            let state = snapshot::load_state(&state)?;
            info!(
                withdrawals = withdrawals.len(),
                slots = state.len(),
                "Loaded snapshot"
            );

            let (migrated, summary) = run_migration(&config, withdrawals, state)?;
            snapshot::write_state(&out, &migrated)?;

            info!(
                migrated = summary.migrated,
                bridged_value = %summary.bridged_value,
                out = %out.display(),
                "Migration complete"
            );
        }
        Command::Precheck {
            withdrawals,
            rpc_url,
            block,
        } => {
            let Some(rpc_url) = rpc_url.or_else(|| config.l2_rpc_url.clone()) else {
                eyre::bail!("No L2 RPC URL: pass --rpc-url or set l2_rpc_url in the config");
            };

            let withdrawals = snapshot::load_withdrawals(&withdrawals)?;
            let provider = create_provider(&rpc_url)?;
            let block = block.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);

            let unrelayed = run_precheck(&config, &provider, &withdrawals, block).await?;
            if !unrelayed.is_empty() {
                error!(
                    unrelayed = unrelayed.len(),
                    checked = withdrawals.len(),
                    "Found withdrawals that were never sent"
                );
                eyre::bail!("{} of {} withdrawals failed the check", unrelayed.len(), withdrawals.len());
            }

            info!(checked = withdrawals.len(), "All withdrawals flagged as sent");
        }
    }

    Ok(())
}
