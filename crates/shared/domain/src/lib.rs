//! # Domain Models
//!
//! Plain data shared by the generator crates. Keep it lean: no I/O, just records and
//! their defaults.

pub mod constants;
pub mod platform;
pub mod request;

pub use crate::platform::Platform;
pub use crate::request::{ConfigRequest, RequestOverrides};
