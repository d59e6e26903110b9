//! Mailsmith - templated outreach email assistant.
//!
//! Main entry point: `serve` runs the template generation service,
//! `attach` drives a Gmail/Outlook tab in a running browser.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mailsmith_api::{ApiConfig, ApiServer, AppState};
use mailsmith_composer::attach::{self, AttachOptions};

mod config;

use config::Config;

/// Mailsmith CLI.
#[derive(Parser)]
#[command(name = "mailsmith")]
#[command(about = "Templated outreach email assistant for Gmail/Outlook")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the template generation service
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(long)]
        port: Option<u16>,

        /// Required bearer credential (disables the check when unset)
        #[arg(long, env = "MAILSMITH_TOKEN")]
        token: Option<String>,
    },

    /// Attach the composer to a running browser
    Attach {
        /// Browser debugging endpoint
        #[arg(long)]
        browser: Option<String>,

        /// Generation service root URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Bearer credential for the generation service
        #[arg(long, env = "MAILSMITH_TOKEN")]
        token: Option<String>,

        /// Dashboard URL for the overlay's "Open Dashboard" action
        #[arg(long)]
        dashboard: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mailsmith=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port, token } => {
            let api = config.api;
            let server_config = ApiConfig::new(
                host.unwrap_or(api.host),
                port.unwrap_or(api.port),
            );
            let state = Arc::new(AppState::new(token.or(api.auth_token)));

            info!("starting generation service");
            ApiServer::new(server_config, state)
                .run()
                .await
                .map_err(|error| anyhow::anyhow!(error.to_string()))
                .context("generation service failed")?;
        }

        Commands::Attach {
            browser,
            endpoint,
            token,
            dashboard,
        } => {
            let composer = config.composer;
            let options = AttachOptions {
                browser_endpoint: browser.unwrap_or(composer.browser_endpoint),
                generate_endpoint: endpoint.unwrap_or(composer.generate_endpoint),
                auth_token: token.or(composer.auth_token),
                dashboard_url: dashboard.unwrap_or(composer.dashboard_url),
                config: composer.timing,
            };

            info!(browser = %options.browser_endpoint, "attaching composer");
            attach::run(options).await.context("composer failed")?;
        }
    }

    Ok(())
}
