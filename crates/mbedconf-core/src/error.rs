//! Error types for mbedconf

use thiserror::Error;

/// Mbedconf error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toolchain invocation failed with exit code {code}\n{output}")]
    ToolchainInvocation {
        /// Exit code of the external toolchain process (-1 if killed by a signal)
        code: i32,
        /// Everything the toolchain printed before exiting
        output: String,
    },
}

/// Result type alias for mbedconf
pub type Result<T> = std::result::Result<T, Error>;
