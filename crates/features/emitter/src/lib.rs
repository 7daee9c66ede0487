//! # Config Emitter
//!
//! Serializes a [`ConfigRequest`] into the fixed MATSim configuration document and writes
//! it to disk. The emitter never reports to the user; failures come back as [`EmitError`]
//! so the caller stays the single reporting layer.
//!
//! ## Example
//!
//! ```rust
//! use matgen_domain::ConfigRequest;
//!
//! let xml = matgen_emitter::render(&ConfigRequest::default());
//! assert!(xml.contains(r#"<param name="inputNetworkFile" value="network.xml" />"#));
//! ```

mod document;
mod error;

pub use crate::document::{Closing, DOCTYPE, Entry, Module, Param, XML_DECLARATION, modules, render};
pub use crate::error::{EmitError, EmitErrorExt, Result};

use matgen_domain::ConfigRequest;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Renders `request` and writes it to `destination`, replacing any existing file.
///
/// There is no temp-file/rename step: a failure mid-write can leave a partial file.
/// The handle is closed before returning on both paths.
///
/// # Errors
/// Returns [`EmitError::Io`] if the file cannot be created or written.
pub fn write_config(request: &ConfigRequest, destination: impl AsRef<Path>) -> Result<PathBuf> {
    let destination = destination.as_ref();
    let document = render(request);

    let mut file = File::create(destination)
        .context(format!("Failed to create {}", destination.display()))?;
    file.write_all(document.as_bytes())
        .context(format!("Failed to write {}", destination.display()))?;
    file.flush().context(format!("Failed to flush {}", destination.display()))?;

    tracing::debug!(path = %destination.display(), bytes = document.len(), "Config document written");

    Ok(destination.to_path_buf())
}
