//! Carrier profiles and their loading.
//!
//! A [`BriefConfig`] holds the constants a carrier's paper form prints that
//! do not come from the flight plan: desk phone numbers, the contact
//! directory, EFB data versions. Defaults reproduce the Jetstar form, so the
//! crate works without any configuration file. A JSON file may override any
//! subset of fields.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{BriefError, Result},
    templates::Carrier,
};

/// File name looked up under the XDG config directory.
const CONFIG_FILE: &str = "config.json";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefConfig {
    /// Carrier code used when none is requested explicitly
    pub default_carrier: String,
    pub jetstar: JetstarProfile,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            default_carrier: Carrier::Jetstar.code().to_string(),
            jetstar: JetstarProfile::default(),
        }
    }
}

impl BriefConfig {
    /// Resolves [`BriefConfig::default_carrier`].
    pub fn default_carrier(&self) -> Result<Carrier> {
        self.default_carrier.parse()
    }
}

/// Constants printed on the Jetstar brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JetstarProfile {
    /// Flight dispatch desk extension
    pub desk_extension: String,
    /// Captain's employee number
    pub employee_number: String,
    pub contacts: Vec<Contact>,
    /// Approved iPad OS versions
    pub ios_version_range: String,
    pub efb_reference: String,
    pub efb: Vec<EfbEntry>,
}

impl Default for JetstarProfile {
    fn default() -> Self {
        let contacts = [
            ("Australia", "1800 555555"),
            ("Malaysia", "1 800 555 555"),
            ("New Zealand", "0800 555 555"),
            ("USA", "1 866 555 5555"),
            ("JOCC Direct", "+61 3 5555 5555"),
            ("Singapore", "800 555 5555"),
            ("Indonesia", "001 555 55 555"),
            ("Japan", "0066 33 555 555"),
            ("Thailand", "001 800 555 5555"),
            ("Vietnam", "+848 5555 5555"),
            ("Dispatch Direct", "+61 3 5555 5555"),
            ("Korea", "+820055555555555"),
        ]
        .into_iter()
        .map(|(region, number)| Contact::new(region, number))
        .collect();

        let efb = vec![
            EfbEntry::new("FlySmart", "230901")
                .with_notes("Refer to email from EFB Admin for further details"),
            EfbEntry::new("JetLoad", "23-09-01")
                .with_notes("Refer to applicable INTAP and FSOs for revision details."),
            EfbEntry::new("A320-A321 FSO PACK", "").with_effective_from("07/09/23"),
            EfbEntry::new("A320-A321 FSO PACK", "").with_effective_from("07/09/23"),
            EfbEntry::new("A320-A321 INTAP List", "3993").with_effective_from("07/09/23"),
        ];

        Self {
            desk_extension: "1800 555 555".to_string(),
            employee_number: "123456".to_string(),
            contacts,
            ios_version_range: "16.5 - 16.6".to_string(),
            efb_reference: "Refer to INTAP PER E for further details.".to_string(),
            efb,
        }
    }
}

/// One entry of the operations contact directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub region: String,
    pub number: String,
}

impl Contact {
    pub fn new(region: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            number: number.into(),
        }
    }
}

/// Data version of one EFB application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfbEntry {
    pub application: String,
    pub current_version: String,
    #[serde(default)]
    pub next_version: String,
    #[serde(default)]
    pub effective_from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl EfbEntry {
    pub fn new(application: impl Into<String>, current_version: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            current_version: current_version.into(),
            next_version: String::new(),
            effective_from: String::new(),
            notes: None,
        }
    }

    pub fn with_effective_from(mut self, date: impl Into<String>) -> Self {
        self.effective_from = date.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Builder for locating and loading a [`BriefConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Sets an explicit configuration file.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/flightbrief/config.json` or
    /// `~/.config/flightbrief/config.json`, falling back to built-in defaults
    /// when that file does not exist.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::FileSystem` if an explicit file cannot be read
    /// Returns `BriefError::Configuration` if the file is not valid
    pub fn load(self) -> Result<BriefConfig> {
        let path = match self.config_path {
            Some(path) => path,
            None => match Self::default_config_path() {
                Some(path) => path,
                None => {
                    debug!("No configuration file found, using defaults");
                    return Ok(BriefConfig::default());
                }
            },
        };

        debug!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(&path).map_err(|e| BriefError::FileSystem {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&text).map_err(|e| BriefError::Configuration {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Returns the XDG configuration file if one exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("flightbrief").find_config_file(CONFIG_FILE)
    }
}
