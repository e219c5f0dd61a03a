use anyhow::{bail, Context, Result};
use clap::Subcommand;
use tracing::debug;
use wasm_cashaddr::{display_address, is_valid, Address, AddressFormat};

#[derive(Subcommand)]
pub enum AddressCommand {
    /// Convert an address to cashaddr format
    Cash {
        /// A legacy or cashaddr address
        address: String,
    },
    /// Convert an address to legacy (Base58Check) format
    Legacy {
        /// A legacy or cashaddr address
        address: String,
    },
    /// Convert an address to the given format
    Convert {
        /// A legacy or cashaddr address
        address: String,
        /// Output format (cashaddr, legacy)
        #[arg(short, long, default_value = "cashaddr")]
        format: String,
    },
    /// Check whether an address is valid; exits with status 1 if not
    Validate {
        /// The address to check
        address: String,
    },
    /// Show an address in cashaddr format without the network prefix
    Display {
        /// A legacy or cashaddr address
        address: String,
    },
    /// Show the version, prefix, network and hash of an address
    Decode {
        /// A legacy or cashaddr address
        address: String,
    },
}

pub fn handle_command(command: AddressCommand) -> Result<()> {
    match command {
        AddressCommand::Cash { address } => convert(&address, AddressFormat::Cashaddr),
        AddressCommand::Legacy { address } => convert(&address, AddressFormat::Legacy),
        AddressCommand::Convert { address, format } => {
            let format = AddressFormat::from_optional_str(Some(format.as_str()))?;
            convert(&address, format)
        }
        AddressCommand::Validate { address } => {
            let valid = is_valid(&address);
            println!("{}", valid);
            if !valid {
                bail!("Invalid address: {}", address);
            }
            Ok(())
        }
        AddressCommand::Display { address } => {
            let display = display_address(&address).context("Failed to convert address")?;
            println!("{}", display);
            Ok(())
        }
        AddressCommand::Decode { address } => {
            let parsed = parse(&address)?;
            println!("version: {}", parsed.version());
            println!("prefix:  {}", parsed.prefix());
            println!("network: {}", parsed.network().as_str());
            println!("payload: {}", hex::encode(parsed.payload()));
            if let Some(digest) = parsed.digest() {
                println!("digest:  {}", hex::encode(digest));
            }
            Ok(())
        }
    }
}

fn parse(address: &str) -> Result<Address> {
    let parsed = Address::parse(address).context("Failed to decode address")?;
    debug!(
        source = if address.contains(':') { "cashaddr" } else { "legacy" },
        version = %parsed.version(),
        prefix = parsed.prefix(),
        "parsed address"
    );
    Ok(parsed)
}

fn convert(address: &str, format: AddressFormat) -> Result<()> {
    let parsed = parse(address)?;
    let converted = parsed
        .to_string_with_format(format)
        .context("Failed to encode address")?;
    println!("{}", converted);
    Ok(())
}
