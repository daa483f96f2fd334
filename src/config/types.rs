//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and client configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, ENDPOINT_ENV_VAR,
};
use crate::models::EndpointConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Tracking client configuration (no CLI dependencies).
///
/// At most one of `endpoint` and `endpoints` may be set. When neither is set the
/// client uses the built-in endpoint list. The caller is responsible for sourcing
/// these values (environment, file, flags); the client performs no implicit
/// environment access.
///
/// # Examples
///
/// ```
/// use iranpost_tracker::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     endpoint: Some("https://tracking.example/api/track".to_string()),
///     timeout: Duration::from_secs(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Single endpoint URL override (GET, query string, `barcode` field)
    pub endpoint: Option<String>,

    /// Explicit ordered endpoint list override
    pub endpoints: Option<Vec<EndpointConfig>>,

    /// Bound on each network exchange (connect + read)
    pub timeout: Duration,

    /// User-Agent header value; `None` uses the default
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            endpoints: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Track one parcel
/// iranpost_tracker track 123456789012345678901234
///
/// # Print the JSON API representation instead
/// iranpost_tracker track 123456789012345678901234 --json
///
/// # Run the web front end on port 8080 against a single endpoint
/// IRAN_POST_ENDPOINT=https://tracking.example/api iranpost_tracker serve --port 8080
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "iranpost_tracker",
    about = "Tracks Iran Post parcels across the known tracking API variants."
)]
pub struct Opt {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value sent upstream
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Single tracking endpoint URL, replacing the built-in endpoint list
    #[arg(long, global = true, env = ENDPOINT_ENV_VAR, conflicts_with = "endpoints_file")]
    pub endpoint: Option<String>,

    /// JSON file holding an ordered array of endpoint configurations
    #[arg(long, global = true, value_parser)]
    pub endpoints_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Track a single barcode and print the result
    Track {
        /// Parcel barcode (digits only)
        barcode: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the web front end
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_SERVER_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
        port: u16,
    },
}
