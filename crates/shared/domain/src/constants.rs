/// File name of the generated document, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "config.xml";

pub const DEFAULT_NETWORK: &str = "network.xml";
pub const DEFAULT_PLANS: &str = "plans.xml";
pub const DEFAULT_OUTPUT: &str = "./output";

/// Placeholder used when the host does not report a value.
pub const UNKNOWN: &str = "unknown";
