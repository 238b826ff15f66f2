//! Collects links instead of opening them

use menu_application::{LaunchError, LaunchOutcome, LinkLauncher};
use std::sync::Mutex;

/// Keeps every launched link so it can be printed after the UI exits
#[derive(Default)]
pub struct DeferredLinkLauncher {
    links: Mutex<Vec<String>>,
}

impl DeferredLinkLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links collected so far, oldest first
    pub fn links(&self) -> Vec<String> {
        self.links
            .lock()
            .map(|links| links.clone())
            .unwrap_or_default()
    }
}

impl LinkLauncher for DeferredLinkLauncher {
    fn launch(&self, url: &str) -> Result<LaunchOutcome, LaunchError> {
        if let Ok(mut links) = self.links.lock() {
            links.push(url.to_string());
        }
        Ok(LaunchOutcome::Deferred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_links_in_order() {
        let launcher = DeferredLinkLauncher::new();
        launcher.launch("https://wa.me/1?text=a").unwrap();
        launcher.launch("https://wa.me/1?text=b").unwrap();
        assert_eq!(
            launcher.links(),
            vec!["https://wa.me/1?text=a", "https://wa.me/1?text=b"]
        );
    }
}
