//! # Configuration Management
//!
//! Centralized configuration for registry consumers.
//!
//! This module locates the shared definition file and names the sections
//! each registry reads, so interception tools can keep those choices in a
//! TOML file next to their own settings.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//!
//! The definition file itself is *not* TOML — see
//! [`crate::registry::loader`] for its line format.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RegistryError, Result};
use crate::registry::entry::Direction;
use crate::registry::store::MessageRegistry;
use crate::resolver::HashResolver;

/// Settings for building the incoming/outgoing registry pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path to the shared, build-independent definition file.
    pub identifiers_path: PathBuf,

    /// Section listing every incoming-message name.
    pub incoming_section: String,

    /// Section listing every outgoing-message name.
    pub outgoing_section: String,

    /// Pre-size hint for each registry's indices; 0 means unhinted.
    pub capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            identifiers_path: PathBuf::from("messages.ini"),
            incoming_section: String::from("Incoming"),
            outgoing_section: String::from("Outgoing"),
            capacity: 0,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RegistryError::Config(format!("Failed to read config file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| RegistryError::Config(format!("Failed to parse TOML: {e}")))
    }

    /// Save configuration to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RegistryError::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| RegistryError::Config(format!("Failed to write config file: {e}")))?;
        Ok(())
    }

    /// Generate example configuration file content.
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Validate the configuration for common issues and misconfigurations.
    ///
    /// Returns a list of validation errors. Empty list means the
    /// configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.identifiers_path.as_os_str().is_empty() {
            errors.push("Identifiers path cannot be empty".to_string());
        }

        if self.incoming_section.is_empty() {
            errors.push("Incoming section name cannot be empty".to_string());
        }

        if self.outgoing_section.is_empty() {
            errors.push("Outgoing section name cannot be empty".to_string());
        }

        if !self.incoming_section.is_empty() && self.incoming_section == self.outgoing_section {
            errors.push(format!(
                "Incoming and outgoing sections must differ (both are '{}')",
                self.incoming_section
            ));
        }

        if self.capacity > 100_000 {
            errors.push(format!(
                "Capacity hint very high: {} (a build rarely defines more than a few thousand messages)",
                self.capacity
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method.
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Config(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }

    /// Build and load the incoming/outgoing registry pair described by
    /// this configuration.
    pub fn load_registries(
        &self,
        resolver: &impl HashResolver,
    ) -> Result<(MessageRegistry, MessageRegistry)> {
        self.validate_strict()?;

        let mut incoming =
            MessageRegistry::with_capacity(Direction::Incoming, &*self.incoming_section, self.capacity);
        let mut outgoing =
            MessageRegistry::with_capacity(Direction::Outgoing, &*self.outgoing_section, self.capacity);

        incoming.load(resolver, &self.identifiers_path)?;
        outgoing.load(resolver, &self.identifiers_path)?;
        Ok((incoming, outgoing))
    }
}
