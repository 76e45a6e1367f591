//! Display configuration with persistence.
//!
//! The address resolver needs two network version-prefix bytes. This module
//! lets a deployment pin them through a small JSON settings file instead of
//! recompiling, with built-in mainnet/testnet presets and mainnet as the
//! default when no file exists.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/vaultview/config.json`
//! - macOS: `~/Library/Application Support/vaultview/config.json`
//! - Windows: `%APPDATA%/vaultview/config.json`

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::address::AddressConfig;
use crate::constants::{
    MAINNET_P2PKH_VERSION, MAINNET_P2SH_VERSION, TESTNET_P2PKH_VERSION, TESTNET_P2SH_VERSION,
};
use crate::domain::VaultError;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "vaultview";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// Network
// ============================================================================

/// Network selection for address version prefixes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet prefixes (0x00 / 0x05).
    Mainnet,
    /// Testnet prefixes (0x6f / 0xc4).
    Testnet,
    /// Explicit version bytes for other networks.
    Custom {
        /// Pay-to-public-key-hash version byte.
        p2pkh_version: u8,
        /// Pay-to-script-hash version byte.
        p2sh_version: u8,
    },
}

impl Default for Network {
    fn default() -> Self {
        Self::Mainnet
    }
}

impl Network {
    /// The version-prefix pair this network hands to the address resolver.
    #[must_use]
    pub const fn address_config(self) -> AddressConfig {
        match self {
            Self::Mainnet => AddressConfig {
                p2pkh_version: MAINNET_P2PKH_VERSION,
                p2sh_version: MAINNET_P2SH_VERSION,
            },
            Self::Testnet => AddressConfig {
                p2pkh_version: TESTNET_P2PKH_VERSION,
                p2sh_version: TESTNET_P2SH_VERSION,
            },
            Self::Custom {
                p2pkh_version,
                p2sh_version,
            } => AddressConfig {
                p2pkh_version,
                p2sh_version,
            },
        }
    }
}

// ============================================================================
// DisplayConfig
// ============================================================================

/// Persisted display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// The network whose version prefixes addresses encode under.
    #[serde(default)]
    pub network: Network,
}

impl DisplayConfig {
    /// Returns the path to the configuration file, creating the directory
    /// if needed.
    ///
    /// # Errors
    ///
    /// [`VaultError::NoConfigDir`] when no platform config directory can be
    /// determined, or an I/O error from directory creation.
    pub fn config_path() -> Result<PathBuf, VaultError> {
        let mut path = dirs::config_dir().ok_or(VaultError::NoConfigDir)?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, falling back to defaults when the
    /// file is missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Loads the configuration from disk.
    ///
    /// # Errors
    ///
    /// Propagates path resolution, I/O, and JSON errors unmodified.
    pub fn try_load() -> Result<Self, VaultError> {
        let path = Self::config_path()?;
        debug!(path = %path.display(), "loading display config");
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the configuration to disk as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates path resolution, serialization, and I/O errors unmodified.
    pub fn save(&self) -> Result<(), VaultError> {
        let path = Self::config_path()?;
        debug!(path = %path.display(), "saving display config");
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
