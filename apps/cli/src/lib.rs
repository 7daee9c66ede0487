//! # MATSim Config Generator
//!
//! Command-line front end: resolves the request, reports the host platform, writes
//! `config.xml` and times the write.
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
