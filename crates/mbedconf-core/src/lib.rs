//! Mbedconf Core
//!
//! Core types and interfaces for the mbed configuration header generator.

pub mod config;
pub mod error;
pub mod types;

pub use config::ToolchainConfig;
pub use error::{Error, Result};
pub use types::MacroRecord;
