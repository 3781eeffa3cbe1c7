//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ip_lookup::initialization::{init_logger_with, load_env, resolve_base_url};
use ip_lookup::{
    request_url, run_decode, summary_line, Config, FailOn, LogFormat, LogLevel, OutputFormat,
};

#[derive(Debug, Parser)]
#[command(name = "ip_lookup", version, about = "Decode IP-geolocation lookup payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode lookup response payloads from a file or stdin
    Decode(DecodeCommand),
    /// Print the upstream lookup URL for an IP address
    Url(UrlCommand),
}

#[derive(Debug, clap::Args)]
struct DecodeCommand {
    /// JSON document or JSON Lines file (`-` for stdin)
    #[arg(default_value = "-")]
    file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    fail_on: FailOn,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[derive(Debug, clap::Args)]
struct UrlCommand {
    /// IP address to look up; omit for a self-lookup
    ip: Option<String>,
    /// Upstream base URL (defaults to $IP_LOOKUP_BASE_URL or http://ip-api.com)
    #[arg(long)]
    base_url: Option<String>,
}

impl From<DecodeCommand> for Config {
    fn from(cmd: DecodeCommand) -> Self {
        Config {
            file: cmd.file,
            log_level: cmd.log_level,
            log_format: cmd.log_format,
            output_format: cmd.format,
            fail_on: cmd.fail_on,
        }
    }
}

fn main() {
    load_env();
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Decode(cmd) => decode(Config::from(cmd)),
        Command::Url(cmd) => print_url(cmd),
    };
    match code {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("ip_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}

fn decode(config: Config) -> Result<i32> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut stdout = std::io::stdout().lock();
    let report = run_decode(&config, &mut stdout)?;
    eprintln!("{}", summary_line(&report));
    Ok(config.fail_on.exit_code(&report))
}

fn print_url(cmd: UrlCommand) -> Result<i32> {
    let base = cmd.base_url.unwrap_or_else(resolve_base_url);
    let url = request_url(cmd.ip.as_deref(), &base)?;
    println!("{url}");
    Ok(0)
}
