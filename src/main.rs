//! Contact Book - demo entry point
//!
//! Builds a small directory, edits and queries it, and prints the records to
//! stdout. Contained failures are logged to stderr.

use anyhow::Result;
use contact_book::{Config, Directory, ErrorBoundary, Record, TracingSink};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn print_directory(directory: &Directory) {
    for (_, record) in directory {
        println!("{}", record);
    }
}

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let ansi = config.as_ref().map(|c| c.log_ansi).unwrap_or(false);

    // Initialize logging (stderr only so stdout carries just the records)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let boundary = ErrorBoundary::with_sink(TracingSink);
    let mut book = Directory::with_boundary(boundary.clone());

    let mut john = Record::with_boundary("John", boundary.clone())?;
    john.add_phone("1234567890");
    john.add_phone("5555555555");
    book.add(john);

    let mut jane = Record::with_boundary("Jane", boundary.clone())?;
    jane.add_phone("9876543210");
    book.add(jane);

    print_directory(&book);

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333");
        println!("{}", john);

        if let Some(phone) = john.find_phone("5555555555") {
            println!("{}: {}", john.name(), phone);
        }
    }

    book.delete("Jane");
    print_directory(&book);

    if config.report_metrics {
        eprintln!("{}", boundary.metrics().summary());
    }

    info!("Contact book demo complete");
    Ok(())
}
