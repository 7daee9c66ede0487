use crate::constants::{DEFAULT_NETWORK, DEFAULT_OUTPUT, DEFAULT_PLANS};
use serde::{Deserialize, Serialize};

/// The three values substituted into the generated document.
///
/// Fields are free-form: empty or malformed paths are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRequest {
    pub network: String,
    pub plans: String,
    pub output: String,
}

impl Default for ConfigRequest {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_owned(),
            plans: DEFAULT_PLANS.to_owned(),
            output: DEFAULT_OUTPUT.to_owned(),
        }
    }
}

/// A partial request coming from one configuration source (CLI, environment, file).
///
/// Sources are stacked with [`RequestOverrides::or`] and finally resolved onto the defaults.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestOverrides {
    pub network: Option<String>,
    pub plans: Option<String>,
    pub output: Option<String>,
}

impl RequestOverrides {
    /// Keeps every value set on `self` and fills the gaps from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            network: self.network.or(fallback.network),
            plans: self.plans.or(fallback.plans),
            output: self.output.or(fallback.output),
        }
    }

    /// Fills any remaining gaps with the built-in defaults.
    #[must_use]
    pub fn resolve(self) -> ConfigRequest {
        let defaults = ConfigRequest::default();
        ConfigRequest {
            network: self.network.unwrap_or(defaults.network),
            plans: self.plans.unwrap_or(defaults.plans),
            output: self.output.unwrap_or(defaults.output),
        }
    }
}
