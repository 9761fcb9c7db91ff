//! Ping Triage - Main CLI Application
//!
//! Probes a list of host addresses with the OS ping utility and writes
//! back the answering addresses ranked by round-trip latency.

use clap::Parser;
use ping_triage::{
    app::App,
    cli::Cli,
    config::{display_config_summary, load_config},
    error::{AppError, Result},
    PKG_NAME, VERSION,
};
use std::process;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle the actual application logic
    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e);

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    if let Err(message) = cli.validate() {
        return Err(AppError::config(message));
    }

    // Show debug info if requested
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
    }

    let config = load_config(&cli)?;

    if config.debug {
        println!("Configuration loaded successfully:");
        println!("{}", display_config_summary(&config));
        println!();
    }

    let app = App::new(config.clone());
    let report = app.run().await?;

    // Show additional information in verbose mode
    if config.verbose {
        println!();
        println!("{}", "=".repeat(60));
        println!("Run Summary:");
        println!("  Addresses probed: {}", report.total());
        println!("  Replied: {}", report.reply_count());
        println!("  Unreachable: {}", report.no_reply_count());
        println!(
            "  Elapsed: {:.1}s",
            (report.completed_at - report.started_at).num_milliseconds() as f64 / 1000.0
        );

        if let Some((address, latency_ms)) = report.fastest() {
            println!("  Fastest address: {} ({:.2}ms)", address, latency_ms);
        }
    }

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Io { .. } => {
            eprintln!();
            eprintln!("File troubleshooting:");
            eprintln!("  - Make sure ips.txt exists in the current directory");
            eprintln!("  - Check read/write permissions in the working directory");
        }
        AppError::Config { .. } => {
            eprintln!();
            eprintln!("Usage help:");
            eprintln!("  - Run with --help to see the available flags");
        }
        _ => {}
    }
}
