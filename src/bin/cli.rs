//! OneWire CLI Client
//!
//! Command-line interface for the 1-Wire bridge.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use onewire_client::{ClientConfig, OneWireClient};

/// OneWire CLI
#[derive(Parser, Debug)]
#[command(name = "onewire-cli")]
#[command(about = "CLI for the 1-Wire sensor bridge")]
#[command(version)]
struct Args {
    /// Bridge hostname or IP address
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Bridge TCP port
    #[arg(short, long, default_value = "1033")]
    port: u16,

    /// Read timeout in milliseconds (0 = no timeout)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read the device ROM ID
    Id,

    /// Read the current temperature
    Temp,

    /// Enable or disable CRC checking in the remote driver
    Crc {
        /// "on" to enable, "off" to disable
        #[arg(value_parser = ["on", "off"])]
        state: String,
    },

    /// Poll the temperature periodically
    Watch {
        /// Seconds between readings
        #[arg(short, long, default_value = "5")]
        interval: u64,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,onewire_client=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = ClientConfig::builder()
        .host(&args.host)
        .port(args.port)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    tracing::info!("OneWire CLI v{}", onewire_client::VERSION);
    tracing::info!("Bridge address: {}", config.addr());

    let client = match OneWireClient::connect(&config) {
        Ok(c) => c.with_trace(|line| tracing::trace!(target: "onewire_client::wire", "{}", line)),
        Err(e) => {
            tracing::error!("Failed to connect: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Commands::Id => client.read_device_id().map(|id| {
            println!("device id: {:02x?}", &id[..]);
        }),

        Commands::Temp => client.read_temperature().map(|t| {
            println!("{:.4} °C", t);
        }),

        Commands::Crc { state } => client.set_crc_enabled(state == "on").map(|()| {
            println!("crc {}", state);
        }),

        Commands::Watch { interval } => watch(&client, interval),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        let _ = client.close();
        std::process::exit(1);
    }

    if let Err(e) = client.close() {
        tracing::warn!("Error closing connection: {}", e);
    }
}

/// Poll the temperature until interrupted.
///
/// The polling cadence lives here in the caller; the protocol client itself
/// is strictly synchronous and does no scheduling of its own.
fn watch(client: &OneWireClient, interval_secs: u64) -> onewire_client::Result<()> {
    loop {
        let temperature = client.read_temperature()?;
        println!("{:.4} °C", temperature);

        std::thread::sleep(Duration::from_secs(interval_secs));
    }
}
