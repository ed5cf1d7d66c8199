#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use onboard_core::{ClientConfig, SignupClient, DEFAULT_API_BASE_URL};

/// Onboard - account sign-up
#[derive(Parser, Debug)]
#[command(name = "onboard-desktop")]
#[command(about = "Onboard - create an account against the accounts API")]
struct Args {
    /// Base URL of the accounts API
    #[arg(long, env = "ONBOARD_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (default: no timeout)
    #[arg(long, env = "ONBOARD_REQUEST_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let config = ClientConfig::new(&self.api_url)
            .with_context(|| format!("invalid --api-url '{}'", self.api_url))?;
        Ok(config.with_timeout(self.timeout_secs.map(Duration::from_secs)))
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads ONBOARD_* variables
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.verbose);

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {:?}", path);
    }

    let client_config = args.client_config()?;
    let client = SignupClient::new(client_config).context("failed to create accounts API client")?;

    tracing::info!("Starting with accounts API at {}", client.signup_url());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Onboard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(client)
        .launch(app::App);

    Ok(())
}
