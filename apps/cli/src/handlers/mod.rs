pub mod platform;
pub mod process;
pub mod request;

/// Separator line used by every console banner.
pub const RULE: &str =
    "**************************************************************************";
