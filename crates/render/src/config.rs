// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixture configuration file.
//!
//! ```yaml
//! fixtures:
//!   - name: chart_manifest
//!     command: [helm, template, .]
//!     on_duplicate: retain
//! ```

use std::collections::HashSet;
use std::path::Path;

use chart_probe::DuplicatePolicy;
use serde::{Deserialize, Serialize};

use crate::command::TemplateCommand;
use crate::error::RenderError;
use crate::fixture::ManifestFixture;

/// The conventional file name for fixture configuration.
pub const CONFIG_FILE_NAME: &str = "chart-probe.yaml";

/// How a configured fixture treats duplicate manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnDuplicate {
    /// Keep every copy; lookups on the duplicate fail.
    #[default]
    Retain,
    /// Keep the first copy in document order.
    #[serde(alias = "ignore")]
    KeepFirst,
    /// Fail when the fixture loads.
    #[serde(alias = "error")]
    Reject,
}

impl From<OnDuplicate> for DuplicatePolicy {
    fn from(value: OnDuplicate) -> Self {
        match value {
            OnDuplicate::Retain => Self::Retain,
            OnDuplicate::KeepFirst => Self::KeepFirst,
            OnDuplicate::Reject => Self::Reject,
        }
    }
}

/// One entry under `fixtures:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureDefinition {
    /// The fixture name.
    pub name: String,
    /// The template command, program first.
    pub command: TemplateCommand,
    /// Duplicate handling. Defaults to `retain`.
    #[serde(default)]
    pub on_duplicate: OnDuplicate,
}

/// Every fixture defined in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Fixture definitions, in file order.
    pub fixtures: Vec<FixtureDefinition>,
}

impl FixtureConfig {
    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// * `Config` if the text is not a valid configuration
    /// * `InvalidFixture` if a fixture name is empty or used twice
    pub fn from_yaml_str(text: &str) -> Result<Self, RenderError> {
        Self::parse(text, "<inline>")
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// * `Config` if the file cannot be read or is not a valid configuration
    /// * `InvalidFixture` if a fixture name is empty or used twice
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path: &Path = path.as_ref();
        let source_name: String = path.display().to_string();
        let text: String = std::fs::read_to_string(path).map_err(|err| RenderError::Config {
            source_name: source_name.clone(),
            message: err.to_string(),
        })?;
        Self::parse(&text, &source_name)
    }

    /// Builds the fixture called `name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownFixture` if no fixture has that name.
    pub fn fixture(&self, name: &str) -> Result<ManifestFixture, RenderError> {
        let Some(definition) = self.fixtures.iter().find(|fixture| fixture.name == name) else {
            return Err(RenderError::UnknownFixture {
                name: name.to_string(),
                available: self.names().map(str::to_string).collect(),
            });
        };

        Ok(
            ManifestFixture::new(definition.name.clone(), definition.command.clone())?
                .on_duplicate(definition.on_duplicate.into()),
        )
    }

    /// Configured fixture names, in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fixtures.iter().map(|fixture| fixture.name.as_str())
    }

    fn parse(text: &str, source_name: &str) -> Result<Self, RenderError> {
        let config: Self = serde_yaml::from_str(text).map_err(|err| RenderError::Config {
            source_name: source_name.to_string(),
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), RenderError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for name in self.names() {
            if name.is_empty() {
                return Err(RenderError::InvalidFixture {
                    reason: String::from("fixture name must be a non-empty string"),
                });
            }
            if !seen.insert(name) {
                return Err(RenderError::InvalidFixture {
                    reason: format!("fixture '{name}' is defined more than once"),
                });
            }
        }
        Ok(())
    }
}
