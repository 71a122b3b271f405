mod app;
mod domain;
mod error;
mod infrastructure;

use anyhow::Result;
use app::RunOptions;
use clap::Parser;
use domain::address::BluetoothAddress;
use domain::settings::SettingsService;
use infrastructure::bluetooth::PlatformRadioApi;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bluetooth_radio_info")]
#[command(about = "Report the first local Bluetooth radio")]
struct Cli {
    /// Address to decode (0x-prefixed hex, bare hex, or AA:BB:CC:DD:EE:FF)
    #[arg(short, long)]
    address: Option<BluetoothAddress>,

    /// Print address, class and vendor fields of the radio
    #[arg(short, long)]
    details: bool,

    /// Settings file (defaults to the per-user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level or filter directive, overriding the settings file
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(app::EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let mut settings_service = SettingsService::load(cli.config.as_deref());
    if let Some(level) = cli.log_level {
        settings_service.get_mut().log_settings.level = level;
    }
    let settings = settings_service.get();

    let _logging_guard = infrastructure::logging::init_logger(&settings.log_settings)
        .map_err(|e| eprintln!("Failed to initialize logging: {}", e))
        .ok();

    tracing::debug!("Settings path: {:?}", settings_service.path());

    let options = RunOptions {
        address: cli.address.unwrap_or(app::DEFAULT_ADDRESS),
        details: cli.details || settings.show_details,
    };
    tracing::debug!("Decoding address {:#014x}", options.address.as_u64());

    let api = PlatformRadioApi::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let status = app::run(&api, &options, &mut out)?;
    out.flush()?;

    Ok(status)
}
