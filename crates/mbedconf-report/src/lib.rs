//! Mbedconf Report
//!
//! Turns the mbed toolchain's "dump configuration" report into C
//! preprocessor header text.
//!
//! ## Modules
//!
//! - `acquire` - external toolchain invocation and report capture
//! - `extract` - state machine over the two-section report format
//! - `marker` - target-selection marker file handling
//! - `render` - include-guarded header text rendering

pub mod acquire;
pub mod extract;
pub mod marker;
pub mod render;

pub use acquire::{ConfigDumper, MbedCli, ReportAcquirer, ToolchainOutput};
pub use extract::extract_macros;
pub use marker::ensure_target_marker;
pub use render::render_header;
