//! keyfwd entry point.
//!
//! Forwards every key released on this machine to an ESP32 over a serial
//! line.  The ESP32 replays each byte as USB keyboard input on whatever host
//! it is plugged into.
//!
//! # Usage
//!
//! ```text
//! keyfwd [OPTIONS]
//!
//! Options:
//!   -c, --config <PATH>          TOML config file
//!       --port <PATH>            Serial device [default: /dev/ttyUSB0]
//!       --input-device <PATH>    evdev keyboard node [default: auto-detect]
//!       --log-level <LEVEL>      Log filter when RUST_LOG is unset [default: info]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Description                 |
//! |-----------------------|-----------------------------|
//! | `KEYFWD_CONFIG`       | Config file path            |
//! | `KEYFWD_PORT`         | Serial device path          |
//! | `KEYFWD_INPUT_DEVICE` | evdev keyboard node         |
//! | `RUST_LOG`            | Full `tracing` filter       |
//!
//! Precedence: CLI flag / environment variable, then config file, then the
//! built-in default.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- optional TOML file
//!  └─ connect()
//!       ├─ open_serial()     -- fatal on failure, before any key is read
//!       └─ open_key_source() -- evdev keyboard
//!  └─ ForwardKeysUseCase::run()
//!       key event → KeyMap lookup → serial write → log line
//! ```
//!
//! There is no shutdown sequence: Ctrl-C terminates the process and the OS
//! closes the serial device.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keyfwd::bootstrap::connect;
use keyfwd::infrastructure::input_capture::open_key_source;
use keyfwd::infrastructure::serial::SerialSettings;
use keyfwd::infrastructure::storage::config::{load_config, AppConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Forward keyboard input to an ESP32 USB-HID emulator over a serial line.
#[derive(Debug, Parser)]
#[command(name = "keyfwd", version)]
struct Cli {
    /// TOML config file.  Defaults to `~/.config/keyfwd/config.toml` if present.
    #[arg(short, long, env = "KEYFWD_CONFIG")]
    config: Option<PathBuf>,

    /// Serial device of the ESP32 (line settings are fixed at 9600 8N1).
    #[arg(long, env = "KEYFWD_PORT")]
    port: Option<String>,

    /// evdev keyboard node, e.g. `/dev/input/event3`.
    ///
    /// When omitted, the first device with an `A` key is used.
    #[arg(long, env = "KEYFWD_INPUT_DEVICE")]
    input_device: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long)]
    log_level: Option<String>,
}

/// Effective runtime settings after merging CLI and config file.
#[derive(Debug)]
struct Settings {
    serial: SerialSettings,
    input_device: Option<PathBuf>,
    log_level: String,
}

impl Cli {
    /// Overlays the CLI arguments on top of `config`.
    fn into_settings(self, config: AppConfig) -> Settings {
        Settings {
            serial: SerialSettings::new(self.port.unwrap_or(config.serial.port)),
            input_device: self.input_device.or(config.input.device),
            log_level: self.log_level.unwrap_or(config.logging.level),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let settings = cli.into_settings(config);

    // `RUST_LOG` wins over the configured level.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .with_context(|| format!("invalid log level '{}'", settings.log_level))?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("keyfwd starting");

    let (mut forwarder, mut source) = connect(&settings.serial, || {
        open_key_source(settings.input_device.as_deref())
    })
    .context("startup failed")?;

    info!("press keys to forward them (Ctrl-C to stop)");

    let sent = forwarder.run(&mut source)?;

    info!("keyboard source closed after {sent} keys");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
