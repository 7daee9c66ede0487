#![allow(clippy::print_stderr, clippy::print_stdout)]

use anyhow::{Context, Result};
use clap::Parser;
use matgen_cli::handlers::{RULE, platform, process, request};
use matgen_cli::models::args::Cli;
use matgen_domain::constants::CONFIG_FILE_NAME;
use matgen_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = Logger::builder(env!("CARGO_BIN_NAME")).level(cli.log_level());
    if let Some(dir) = &cli.log_dir {
        logger = logger.path(dir).json(cli.log_json);
    }
    let _logger = logger.init()?;

    print_banner();

    let request = request::resolve_request(&cli).context("Error, resolving settings.")?;
    platform::report_platform();

    process::print_processing_banner();
    let report = process::process_request(&request, CONFIG_FILE_NAME)
        .context("Error, processing request.")?;
    process::print_report(&report);

    println!("{RULE}");
    println!("Program finished");
    println!("{RULE}");
    println!("\nmatsimConfigGenerator program finished correctly.\n");

    if cli.interactive {
        std::io::stdin().read_line(&mut String::new()).context("Failed to read from stdin")?;
    }

    Ok(())
}

fn print_banner() {
    println!("{RULE}");
    println!("                   Program: MATSim Config Generator");
    println!("{RULE}");
    println!("\nLoading MATSim Config Generator engine ...\n");
}
