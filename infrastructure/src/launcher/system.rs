//! Opens links with the platform's URL opener

use menu_application::{LaunchError, LaunchOutcome, LinkLauncher};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Openers tried in order
#[cfg(target_os = "macos")]
const DEFAULT_OPENERS: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const DEFAULT_OPENERS: &[&str] = &["explorer"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_OPENERS: &[&str] = &["xdg-open", "wslview", "open"];

/// Hands URLs to the first opener found on `PATH`
pub struct SystemLinkLauncher {
    openers: Vec<String>,
}

impl Default for SystemLinkLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_OPENERS.iter().map(|s| s.to_string()).collect())
    }
}

impl SystemLinkLauncher {
    pub fn new(openers: Vec<String>) -> Self {
        Self { openers }
    }

    /// First configured opener available on this system
    pub fn find_opener(&self) -> Option<(String, PathBuf)> {
        self.openers.iter().find_map(|name| {
            which::which(name)
                .ok()
                .map(|path| (name.clone(), path))
        })
    }

    /// Whether any opener is available
    pub fn is_available(&self) -> bool {
        self.find_opener().is_some()
    }
}

impl LinkLauncher for SystemLinkLauncher {
    fn launch(&self, url: &str) -> Result<LaunchOutcome, LaunchError> {
        let (program, path) = self.find_opener().ok_or(LaunchError::NoOpener)?;
        debug!("Opening link with {}", path.display());

        let status = Command::new(&path)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| LaunchError::Spawn {
                program: program.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(LaunchError::ExitStatus {
                program,
                status: status.code().unwrap_or(-1),
            });
        }

        info!("Opened WhatsApp link with {}", program);
        Ok(LaunchOutcome::Opened { program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_opener() {
        let launcher = SystemLinkLauncher::new(vec!["definitely-not-a-real-opener-xyz".into()]);
        assert!(!launcher.is_available());
        assert!(matches!(
            launcher.launch("https://wa.me/254123456789"),
            Err(LaunchError::NoOpener)
        ));
    }

    #[test]
    fn test_default_openers_not_empty() {
        let launcher = SystemLinkLauncher::default();
        assert!(!launcher.openers.is_empty());
    }
}
