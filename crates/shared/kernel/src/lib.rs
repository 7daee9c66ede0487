//! Kernel utilities shared across the generator.
//! Keep this crate lightweight: settings loading and host detection, nothing that writes
//! the document itself.
//!
//! ## Settings loading
//! ```rust
//! use matgen_kernel::config::load_settings;
//!
//! // Command-line values would be stacked on top with `RequestOverrides::or`.
//! let request = load_settings(None).unwrap_or_default().resolve();
//! println!("network file: {}", request.network);
//! ```
pub mod config;
pub mod platform;

pub use matgen_domain as domain;
