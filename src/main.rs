//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iranpost_tracker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All tracking functionality is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use iranpost_tracker::config::{Command, Opt};
use iranpost_tracker::initialization::init_logger_with;
use iranpost_tracker::{
    load_endpoints, start_server, validate_barcode, ClientConfig, TrackingClient, TrackingResult,
};

#[tokio::main]
async fn main() -> Result<()> {
    // IRAN_POST_ENDPOINT may come from a .env file in the working directory
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = TrackingClient::new(client_config(&opt)?).context("Failed to build tracking client")?;

    match opt.command {
        Command::Track { barcode, json } => {
            let outcome = match validate_barcode(&barcode) {
                Ok(barcode) => client.track(&barcode).await,
                Err(e) => Err(e),
            };
            match outcome {
                Ok(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Ok(result) => print_result(&result),
                Err(e) => {
                    eprintln!("iranpost_tracker error: {}", e.message());
                    process::exit(1);
                }
            }
        }
        Command::Serve { host, port } => {
            if let Err(e) = start_server(&host, port, client).await {
                eprintln!("iranpost_tracker error: {:#}", e);
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn client_config(opt: &Opt) -> Result<ClientConfig> {
    let endpoints = opt
        .endpoints_file
        .as_deref()
        .map(load_endpoints)
        .transpose()?;

    Ok(ClientConfig {
        endpoint: opt.endpoint.clone(),
        endpoints,
        timeout: Duration::from_secs(opt.timeout_seconds),
        user_agent: Some(opt.user_agent.clone()),
    })
}

fn print_result(result: &TrackingResult) {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    println!("Barcode:  {}", result.barcode);
    println!("Status:   {}", field(&result.current_status));
    println!("Sender:   {}", field(&result.sender));
    println!("Receiver: {}", field(&result.receiver));

    if result.events.is_empty() {
        println!("No events recorded");
        return;
    }

    println!("Events:");
    for event in &result.events {
        let when = [event.date.as_deref(), event.time.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        match &event.location {
            Some(location) => println!("  {:<20} {} ({})", when, event.description, location),
            None => println!("  {:<20} {}", when, event.description),
        }
    }
}
