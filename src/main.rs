//! patientbook - Main entry point
//!
//! Runs the line-oriented shell: one command per line, outcome printed to
//! stdout, the current patient list rendered after every successful command.

use anyhow::Result;
use patientbook::{Config, Engine, JsonBookStorage};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout stays the command surface)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting patient book with data file {}",
        config.data_file.display()
    );

    let storage = JsonBookStorage::new(&config.data_file);
    let mut engine = match Engine::load(storage) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Failed to load patient data: {}", e);
            return Err(e.into());
        }
    };

    println!(
        "Patient book ready ({} patients). Enter help to list the available commands.",
        engine.model().book().len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match engine.execute(input) {
            Ok(outcome) => {
                println!("{}", outcome.message());
                if outcome.is_exit() {
                    break;
                }
                render_list(&engine);
            }
            Err(e) => println!("{}", e),
        }
    }

    info!("Patient book shutdown complete");
    Ok(())
}

/// Render the filtered patient list the way a list view would show it.
fn render_list(engine: &Engine) {
    for (position, patient) in engine.model().filtered_patients().iter().enumerate() {
        println!("{}. {}", position + 1, patient);
    }
}
