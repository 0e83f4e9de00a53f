//! Command-line front end for the correction engine.
//!
//! Reads dictionaries and queries, applies case folding, and renders each
//! [`Correction`](crate::transducer::Correction) as a line of text.

pub mod args;
pub mod commands;
pub mod config;
pub mod input;

pub use args::{Cli, Commands};
pub use config::CliConfig;
pub use input::{InputError, ProtocolReader};
