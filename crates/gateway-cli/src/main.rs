mod telemetry;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gateway_sdk::{GatewayClient, GatewayConfig, SessionCreatePayload};
use tracing::info;

use crate::telemetry::LogFormat;

#[derive(Parser)]
#[command(
    name = "gateway-cli",
    about = "Call the gateway's backend SDK endpoints"
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Log output format (logs go to stderr).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Falls back to GATEWAY_BASE_URL / GATEWAY_API_KEY / GATEWAY_PROJECT_ID.
#[derive(Args)]
struct ConnectionArgs {
    /// Gateway base URL, e.g. http://gateway:3000
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(long, global = true)]
    api_key: Option<String>,

    #[arg(long, global = true)]
    project_id: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical identification headers as JSON.
    Headers,
    /// Call the health endpoint and print the status code.
    Health,
    /// Print the gateway's SDK capabilities.
    Capabilities,
    /// Create an end-user session and print the token bundle.
    Session {
        /// External id of the end user.
        #[arg(long)]
        user: String,
    },
    /// Exchange a refresh token for a new token bundle.
    Refresh { refresh_token: String },
    /// End the session that owns an access token.
    Logout { access_token: String },
}

impl ConnectionArgs {
    fn into_config(self) -> Result<GatewayConfig> {
        GatewayConfig::resolve(self.base_url, self.api_key, self.project_id)
            .context("gateway connection is not configured")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format);
    let config = cli.connection.into_config()?;
    let client = GatewayClient::from_config(&config)?;

    match cli.command {
        Commands::Headers => {
            println!(
                "{}",
                serde_json::to_string_pretty(&client.canonical_headers())?
            );
        }
        Commands::Health => {
            let status = client.health_status().await?;
            info!(base_url = client.base_url(), status, "health check complete");
            println!("{status}");
            if !(200..300).contains(&status) {
                bail!("gateway reported status {status}");
            }
        }
        Commands::Capabilities => {
            let caps = client.capabilities().await?;
            println!("{}", serde_json::to_string_pretty(&caps)?);
        }
        Commands::Session { user } => {
            let bundle = client
                .create_session(&SessionCreatePayload::new(user))
                .await?;
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        Commands::Refresh { refresh_token } => {
            let bundle = client.refresh(&refresh_token).await?;
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        Commands::Logout { access_token } => {
            client.logout(&access_token).await?;
            info!("session logged out");
        }
    }

    Ok(())
}
