//! Custom error types specific to the `adapters` crate.
//!
//! These errors cover the cases where a CLI invocation could not produce an
//! exit status at all. A command that runs and exits non-zero is not an
//! error at this layer; it is reported through `CommandOutput::success`.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("Failed to collect output from {program}: {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}
