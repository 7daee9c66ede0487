use crate::constants::UNKNOWN;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host operating system name and release, as reported by the runtime environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub system: String,
    pub release: String,
}

impl Platform {
    /// Builds a record from optional host values, substituting `"unknown"` for gaps.
    #[must_use]
    pub fn from_parts(system: Option<String>, release: Option<String>) -> Self {
        let or_unknown = |value: Option<String>| {
            value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| UNKNOWN.to_owned())
        };
        Self { system: or_unknown(system), release: or_unknown(release) }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.system, self.release)
    }
}
