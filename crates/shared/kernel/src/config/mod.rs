use config::{Config, Environment, File, Map};
use matgen_domain::RequestOverrides;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides, e.g. `MATGEN__NETWORK`.
pub const ENV_PREFIX: &str = "MATGEN";
pub const ENV_SEPARATOR: &str = "__";

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub trait SettingsErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError>;
}

impl<T> SettingsErrorExt<T> for Result<T, SettingsError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                SettingsError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> SettingsErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SettingsError> {
        self.map_err(|source| SettingsError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for SettingsError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Loads request overrides from an optional settings file and the process environment.
///
/// Layering, lowest to highest:
/// 1. **Settings file**: only when `path` is given; the file must then exist. The format is
///    inferred from the extension (TOML, JSON or YAML).
/// 2. **Environment**: variables prefixed with `MATGEN__`
///    (`MATGEN__NETWORK`, `MATGEN__PLANS`, `MATGEN__OUTPUT`).
///
/// Fields left unset by every layer stay `None`, so command-line flags can be stacked on
/// top and the built-in defaults applied last.
///
/// # Errors
/// Returns [`SettingsError::Config`] if the file is missing or malformed, or the merged
/// values do not deserialize into [`RequestOverrides`].
pub fn load_settings(path: Option<&Path>) -> Result<RequestOverrides, SettingsError> {
    load_settings_from(path, None)
}

/// Same as [`load_settings`], reading environment variables from `env` instead of the
/// process environment when it is `Some`.
///
/// # Errors
/// See [`load_settings`].
pub fn load_settings_from(
    path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<RequestOverrides, SettingsError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).source(env));

    let overrides = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<RequestOverrides>()
        .context("Failed to deserialize settings")?;

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn test_empty_sources_leave_everything_unset() {
        let overrides = load_settings_from(None, Some(Map::new())).unwrap();
        assert_eq!(overrides, RequestOverrides::default());
    }

    #[test]
    fn test_environment_fills_fields() {
        let overrides = load_settings_from(
            None,
            Some(env(&[("MATGEN__NETWORK", "env-net.xml"), ("MATGEN__OUTPUT", "/srv/out")])),
        )
        .unwrap();

        assert_eq!(overrides.network.as_deref(), Some("env-net.xml"));
        assert_eq!(overrides.output.as_deref(), Some("/srv/out"));
        assert!(overrides.plans.is_none());
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let overrides =
            load_settings_from(None, Some(env(&[("PATH", "/bin"), ("OTHER__PLANS", "x")])))
                .unwrap();
        assert_eq!(overrides, RequestOverrides::default());
    }

    #[test]
    fn test_environment_beats_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matgen.toml");
        fs::write(&path, "network = \"file-net.xml\"\nplans = \"file-plans.xml\"\n").unwrap();

        let overrides =
            load_settings_from(Some(path.as_path()), Some(env(&[("MATGEN__NETWORK", "env-net.xml")])))
                .unwrap();

        assert_eq!(overrides.network.as_deref(), Some("env-net.xml"));
        assert_eq!(overrides.plans.as_deref(), Some("file-plans.xml"));
    }

    #[test]
    fn test_json_file_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matgen.json");
        fs::write(&path, r#"{ "output": "./runs/base" }"#).unwrap();

        let overrides = load_settings_from(Some(path.as_path()), Some(Map::new())).unwrap();
        assert_eq!(overrides.output.as_deref(), Some("./runs/base"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_settings_from(Some(path.as_path()), Some(Map::new())).unwrap_err();
        assert!(matches!(err, SettingsError::Config { context: Some(_), .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "network = [unterminated").unwrap();

        assert!(load_settings_from(Some(path.as_path()), Some(Map::new())).is_err());
    }
}
