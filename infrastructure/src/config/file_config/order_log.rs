//! Order log settings from TOML (`[order_log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw order log settings
///
/// ```toml
/// [order_log]
/// enabled = true
/// path = "~/.local/share/whatsapp-menu/orders.jsonl"   # optional
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOrderLogConfig {
    pub enabled: bool,
    pub path: Option<PathBuf>,
}

impl FileOrderLogConfig {
    /// Log file to write, or `None` when disabled
    ///
    /// Defaults to `$XDG_DATA_HOME/whatsapp-menu/orders.jsonl`.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        self.path.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("whatsapp-menu").join("orders.jsonl"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_has_no_path() {
        let config = FileOrderLogConfig {
            enabled: false,
            path: Some(PathBuf::from("orders.jsonl")),
        };
        assert!(config.resolved_path().is_none());
    }

    #[test]
    fn test_explicit_path_wins() {
        let config = FileOrderLogConfig {
            enabled: true,
            path: Some(PathBuf::from("/tmp/orders.jsonl")),
        };
        assert_eq!(
            config.resolved_path(),
            Some(PathBuf::from("/tmp/orders.jsonl"))
        );
    }
}
