//! Target Marker
//!
//! The toolchain refuses to run in a folder without a `.mbed` marker file
//! recording the build root and the selected target. This module writes
//! one with defaults when it is missing, and never touches an existing one.

use std::fs;
use std::path::Path;

use mbedconf_core::config::MARKER_FILE_NAME;
use mbedconf_core::Result;
use tracing::debug;

/// Ensure the project folder carries a target-selection marker file.
///
/// Idempotent: the "already exists" case is the expected steady state
/// after the first run and is not an error. User edits are preserved.
pub fn ensure_target_marker(folder: &Path, target: &str) -> Result<()> {
    let marker = folder.join(MARKER_FILE_NAME);

    if marker.exists() {
        debug!("Marker file {:?} already present", marker);
        return Ok(());
    }

    let content = format!("ROOT=.\nTARGET={}\n", target);
    fs::write(&marker, content)?;
    debug!("Wrote marker file {:?}", marker);

    Ok(())
}
