//! Command-line front end for `fuzzmatch-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
