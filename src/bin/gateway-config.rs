//! Print the API gateway configuration resolved from the environment.
//!
//! Logs go to stderr; stdout carries only the configuration.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use api_gateway::config::{load_config, GatewayConfig};
use api_gateway::observability::init_logging;

#[derive(Parser)]
#[command(name = "gateway-config")]
#[command(about = "Print the API gateway configuration resolved from the environment", long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `key = value` lines
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Errors raised while writing the configuration out.
#[derive(Debug, Error)]
enum OutputError {
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config();

    let stdout = io::stdout();
    write_config(&mut stdout.lock(), &config, cli.format)?;

    Ok(())
}

fn write_config(out: &mut impl Write, config: &GatewayConfig, format: Format) -> Result<(), OutputError> {
    match format {
        Format::Text => out.write_all(render_text(config).as_bytes())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, config)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn render_text(config: &GatewayConfig) -> String {
    let mut services: Vec<_> = config.services.values().collect();
    services.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = format!("port = {}\n", config.port);
    for service in services {
        out.push_str(&format!("{} = {}\n", service.name, service.url));
    }
    out
}
