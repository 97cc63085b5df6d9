//! # casahubd — casahub demo runner
//!
//! Composition root that wires the console adapter into the application
//! layer and runs the fixed house demonstration once.
//!
//! ## Responsibilities
//! - Load configuration (`casahub.toml`, env vars)
//! - Initialize `tracing` on stderr so stdout only carries house output
//! - Construct the console reporter over stdout
//! - Run the demo script and exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::Write;

use anyhow::Context;
use casahub_adapter_console::ConsoleReporter;
use casahub_app::demo::run_demo;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(format = %config.output.format, "configuration loaded");

    let stdout = std::io::stdout().lock();
    let service = run_demo(ConsoleReporter::new(stdout, config.output.format))
        .context("running house demo")?;

    let (_, reporter) = service.into_parts();
    reporter.into_inner().flush().context("flushing stdout")?;

    Ok(())
}
