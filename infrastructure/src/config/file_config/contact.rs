//! Contact configuration from TOML (`[contact]` and `[[branches]]`)

use super::brand::localized;
use menu_domain::Branch;
use serde::{Deserialize, Serialize};

/// Raw contact settings
///
/// # Example
///
/// ```toml
/// [contact]
/// whatsapp_number = "+254 712 345 678"
/// default_branch = "westlands"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContactConfig {
    /// Fallback number used when no branch number applies
    pub whatsapp_number: String,
    /// Branch selected at startup (first branch when unset)
    pub default_branch: Option<String>,
}

impl Default for FileContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: menu_domain::BrandConfig::default().whatsapp_number,
            default_branch: None,
        }
    }
}

/// Raw branch entry
///
/// ```toml
/// [[branches]]
/// id = "westlands"
/// name = "Westlands"
/// name_ar = "ويستلاندز"
/// whatsapp_number = "+254 711 000 111"
/// address = "Woodvale Grove"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBranchConfig {
    pub id: String,
    pub name: String,
    pub name_ar: Option<String>,
    pub whatsapp_number: String,
    pub address: String,
}

impl FileBranchConfig {
    pub fn to_branch(&self) -> Branch {
        Branch {
            id: self.id.clone(),
            name: localized(&self.name, self.name_ar.as_deref()),
            whatsapp_number: self.whatsapp_number.clone(),
            address: self.address.clone(),
        }
    }
}
