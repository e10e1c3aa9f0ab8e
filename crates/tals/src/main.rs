use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tals_models::{SessionScript, TalsConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tals", about = "Trading Account Ledger Simulator")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/tals.toml")]
    config: String,

    /// Read SessionScript JSON from a file instead of stdin
    #[arg(short, long)]
    input: Option<String>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load config
    let config_str = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("Failed to read config: {}", cli.config))?;
    let config: TalsConfig =
        toml::from_str(&config_str).with_context(|| "Failed to parse config")?;

    // Read session script
    let script_json = if let Some(input_path) = &cli.input {
        std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read input: {input_path}"))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    };

    let script: SessionScript =
        serde_json::from_str(&script_json).context("Failed to parse SessionScript JSON")?;

    // Build oracle and run the session
    let oracle = tals::build_oracle(&config);

    let report = tals::run_script(&script, oracle)
        .await
        .map_err(|e| anyhow::anyhow!("Session failed: {e}"))?;

    // Output report as JSON to stdout
    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
