//! Port for handing a deep link to the operating system

use thiserror::Error;

/// Errors from launching a link
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("No link opener available")]
    NoOpener,

    #[error("Failed to run {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("{program} exited with status {status}")]
    ExitStatus { program: String, status: i32 },
}

/// How a link was delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Handed to an external program
    Opened { program: String },
    /// Kept for the user to open manually
    Deferred,
}

/// Opens a URL outside the application
pub trait LinkLauncher: Send + Sync {
    fn launch(&self, url: &str) -> Result<LaunchOutcome, LaunchError>;
}
