use crate::handlers::RULE;
use matgen_domain::ConfigRequest;
use matgen_emitter::{EmitError, write_config};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Errors surfaced by [`process_request`].
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Config emission failed: {source}")]
    Emit {
        #[from]
        source: EmitError,
    },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub destination: PathBuf,
    pub elapsed: Duration,
}

/// Writes the document for `request` to `destination` and times the write.
///
/// Neither this function nor the emitter prints a failure: the error travels up to
/// `main`, which reports it once and exits non-zero.
///
/// # Errors
/// Returns [`ProcessError::Emit`] if the document cannot be written.
pub fn process_request(
    request: &ConfigRequest,
    destination: impl AsRef<Path>,
) -> Result<ProcessReport, ProcessError> {
    let started = Instant::now();

    let destination = write_config(request, destination)?;

    let elapsed = started.elapsed();
    tracing::info!(path = %destination.display(), ?elapsed, "Request processed");

    Ok(ProcessReport { destination, elapsed })
}

/// Prints the banner that opens the processing step.
pub fn print_processing_banner() {
    println!("\n{RULE}");
    println!("Processing request:");
    println!("{RULE}\n");
}

/// Prints the success lines for a finished request.
pub fn print_report(report: &ProcessReport) {
    println!("[INFO] Config file generated correctly.");
    println!("[INFO] Request done correctly.");
    println!("[INFO] Elapsed time: {:?}.", report.elapsed);
}
