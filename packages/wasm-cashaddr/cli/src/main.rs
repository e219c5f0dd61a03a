use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod address;

#[derive(Parser)]
#[command(name = "wasm-cashaddr-cli")]
#[command(about = "CLI tool for Bitcoin Cash address conversion", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Address conversion and validation operations
    Address {
        #[command(subcommand)]
        command: address::AddressCommand,
    },
}

fn main() -> Result<()> {
    // RUST_LOG=debug shows how each address was parsed
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Address { command } => address::handle_command(command),
    }
}
