//! Configuration types

use serde::{Deserialize, Serialize};

/// Default build target passed to the toolchain's `-m` flag
pub const DEFAULT_TARGET: &str = "K64F";

/// Default compiler toolchain passed to the toolchain's `-t` flag
pub const DEFAULT_TOOLCHAIN: &str = "GCC_ARM";

/// Name of the per-project marker file recording the selected target
pub const MARKER_FILE_NAME: &str = ".mbed";

/// Toolchain selection for one generator run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Build target identifier (e.g. `K64F`)
    pub target: String,

    /// Compiler toolchain identifier (e.g. `GCC_ARM`)
    pub toolchain: String,
}

impl ToolchainConfig {
    pub fn new(target: &str, toolchain: &str) -> Self {
        Self {
            target: target.to_string(),
            toolchain: toolchain.to_string(),
        }
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            toolchain: DEFAULT_TOOLCHAIN.to_string(),
        }
    }
}
