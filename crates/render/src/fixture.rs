// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chart_probe::{DuplicatePolicy, ManifestIndex};
use tracing::info;

use crate::cache::RenderCache;
use crate::command::TemplateCommand;
use crate::error::RenderError;
use crate::renderer::Renderer;

/// A named manifest fixture: a template command plus how to index its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFixture {
    name: String,
    command: TemplateCommand,
    on_duplicate: DuplicatePolicy,
}

impl ManifestFixture {
    /// Creates a fixture that retains duplicate manifests.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFixture` if `name` is empty.
    pub fn new(name: impl Into<String>, command: TemplateCommand) -> Result<Self, RenderError> {
        let name: String = name.into();
        if name.is_empty() {
            return Err(RenderError::InvalidFixture {
                reason: String::from("fixture name must be a non-empty string"),
            });
        }

        Ok(Self {
            name,
            command,
            on_duplicate: DuplicatePolicy::default(),
        })
    }

    /// Sets the duplicate policy used when indexing.
    #[must_use]
    pub const fn on_duplicate(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate = policy;
        self
    }

    /// The fixture name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template command.
    #[must_use]
    pub const fn command(&self) -> &TemplateCommand {
        &self.command
    }

    /// The duplicate policy used when indexing.
    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.on_duplicate
    }

    /// Renders through `cache` (running the command at most once per cache)
    /// and returns a freshly built index.
    ///
    /// # Errors
    ///
    /// Returns any rendering, parsing or indexing error.
    pub fn load<R: Renderer>(&self, cache: &RenderCache<R>) -> Result<ManifestIndex, RenderError> {
        info!(fixture = %self.name, command = %self.command, "loading manifest fixture");
        cache.load(&self.command, self.on_duplicate)
    }

    /// Renders with `renderer` directly, bypassing any cache.
    ///
    /// # Errors
    ///
    /// Returns any rendering, parsing or indexing error.
    pub fn render_with(&self, renderer: &impl Renderer) -> Result<ManifestIndex, RenderError> {
        let text: String = renderer.render(&self.command)?;
        Ok(ManifestIndex::parse_with(&text, self.on_duplicate)?)
    }
}
