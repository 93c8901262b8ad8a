//! User Service - CLI for payload validation and user lookup.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppError;
use user_service_lib::config::UserServiceConfig;
use user_service_lib::payload::{validate_payload, PayloadKind};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User and address validation service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON payload file and print it normalized
    Validate {
        #[arg(value_enum)]
        kind: PayloadKind,
        file: PathBuf,
    },
    /// Look up a user in the seed store
    Info {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        address_id: i64,
        /// Seed file, overrides USER_SERVICE_SEED_PATH
        #[arg(long)]
        seed: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = UserServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { kind, file } => {
            let json = tokio::fs::read_to_string(&file).await?;
            validate_payload(kind, &json)
        }
        Commands::Info {
            user_id,
            address_id,
            seed,
        } => {
            let config = config.with_seed_path(seed);
            user_service_lib::run_info(&config, user_id, address_id)
                .await
                .and_then(|user| {
                    serde_json::to_value(user).map_err(|e| AppError::internal(e.to_string()))
                })
        }
    };

    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("{} ({}): {}", err.code(), err.status(), err.user_message());
            println!("{} {}", err.status().as_u16(), err.code());
            Ok(ExitCode::FAILURE)
        }
    }
}
