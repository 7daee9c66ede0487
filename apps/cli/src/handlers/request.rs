use crate::models::args::Cli;
use matgen_domain::ConfigRequest;
use matgen_kernel::config::{SettingsError, load_settings};

/// Resolves the request: command-line flags, then environment, then settings file,
/// then built-in defaults.
///
/// # Errors
/// Returns [`SettingsError`] if `--settings` points at a missing or malformed file.
pub fn resolve_request(cli: &Cli) -> Result<ConfigRequest, SettingsError> {
    let settings = load_settings(cli.settings.as_deref())?;
    let request = cli.overrides().or(settings).resolve();

    tracing::info!(
        network = %request.network,
        plans = %request.plans,
        output = %request.output,
        "Request resolved"
    );

    Ok(request)
}
