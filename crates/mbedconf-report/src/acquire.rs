//! Toolchain Invocation
//!
//! Wraps the external mbed CLI to obtain the textual configuration report
//! for a project folder.

use std::path::Path;
use std::process::Command;

use mbedconf_core::{Error, Result, ToolchainConfig};
use tracing::debug;

/// Raw outcome of one toolchain invocation
#[derive(Debug, Clone)]
pub struct ToolchainOutput {
    /// Process exit code (-1 if killed by a signal)
    pub code: i32,
    /// Combined stdout and stderr text
    pub text: String,
}

/// Capability to run the toolchain's config dump for a project folder.
///
/// Injected so extraction and rendering can be exercised with canned
/// report text instead of a real toolchain process.
pub trait ConfigDumper {
    /// Run the dump with the project folder as working directory and
    /// capture everything the process printed.
    fn dump_config(&self, folder: &Path, config: &ToolchainConfig) -> Result<ToolchainOutput>;
}

/// Production dumper backed by the `mbed` command-line tool
pub struct MbedCli;

impl ConfigDumper for MbedCli {
    fn dump_config(&self, folder: &Path, config: &ToolchainConfig) -> Result<ToolchainOutput> {
        debug!(
            "Running mbed compile -m {} -t {} --config in {:?}",
            config.target, config.toolchain, folder
        );

        let output = Command::new("mbed")
            .args(["compile", "-m", &config.target, "-t", &config.toolchain, "--config"])
            .current_dir(folder)
            .output()?;

        // Exact interleaving across the two streams is not preserved;
        // both end up in one buffer for extraction.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ToolchainOutput {
            code: output.status.code().unwrap_or(-1),
            text,
        })
    }
}

/// Obtains the full configuration report for a project folder
pub struct ReportAcquirer<D: ConfigDumper> {
    dumper: D,
    config: ToolchainConfig,
}

impl<D: ConfigDumper> ReportAcquirer<D> {
    pub fn new(dumper: D, config: ToolchainConfig) -> Self {
        Self { dumper, config }
    }

    /// Run the config dump and return the combined report text.
    ///
    /// A non-zero exit code fails with the exit code and the text captured
    /// so far, so callers can show the toolchain's own diagnostics.
    pub fn acquire(&self, folder: &Path) -> Result<String> {
        let output = self.dumper.dump_config(folder, &self.config)?;

        if output.code != 0 {
            return Err(Error::ToolchainInvocation {
                code: output.code,
                output: output.text,
            });
        }

        Ok(output.text)
    }
}
