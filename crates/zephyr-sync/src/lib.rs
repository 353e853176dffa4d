//! zephyr-sync library
//!
//! This module exports the command-line front end of zephyr-sync for use in
//! integration tests and as a library.

pub mod config;
pub mod report;
