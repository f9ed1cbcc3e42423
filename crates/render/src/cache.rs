// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chart_probe::{DuplicatePolicy, ManifestIndex};
use tracing::debug;

use crate::command::TemplateCommand;
use crate::error::RenderError;
use crate::renderer::{ProcessRenderer, Renderer};

/// Rendered output keyed by the exact template command.
///
/// The cache holds rendered text only. Every [`RenderCache::load`] builds a
/// fresh [`ManifestIndex`] from that text, so indexes are never shared
/// between callers. The cache lives exactly as long as its owner; there is
/// no process-wide instance.
#[derive(Debug, Default)]
pub struct RenderCache<R = ProcessRenderer> {
    renderer: R,
    rendered: Mutex<HashMap<TemplateCommand, Arc<str>>>,
}

impl RenderCache<ProcessRenderer> {
    /// Creates an empty cache that runs commands as child processes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_renderer(ProcessRenderer)
    }
}

impl<R: Renderer> RenderCache<R> {
    /// Creates an empty cache backed by `renderer`.
    #[must_use]
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            rendered: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the rendered text for `command`, running it on first use.
    ///
    /// Failed renders are not cached.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error if the command has to run and fails.
    pub fn rendered(&self, command: &TemplateCommand) -> Result<Arc<str>, RenderError> {
        let mut rendered: MutexGuard<'_, HashMap<TemplateCommand, Arc<str>>> = self.lock();

        if let Some(text) = rendered.get(command) {
            debug!(command = %command, "using cached render");
            return Ok(Arc::clone(text));
        }

        let text: Arc<str> = Arc::from(self.renderer.render(command)?);
        rendered.insert(command.clone(), Arc::clone(&text));
        Ok(text)
    }

    /// Renders (or reuses) `command` and indexes the output.
    ///
    /// # Errors
    ///
    /// * any rendering error
    /// * `Index` if the output cannot be parsed or violates `policy`
    pub fn load(
        &self,
        command: &TemplateCommand,
        policy: DuplicatePolicy,
    ) -> Result<ManifestIndex, RenderError> {
        let text: Arc<str> = self.rendered(command)?;
        Ok(ManifestIndex::parse_with(&text, policy)?)
    }

    /// Forgets the output of one command. Returns whether it was cached.
    pub fn invalidate(&self, command: &TemplateCommand) -> bool {
        self.lock().remove(command).is_some()
    }

    /// Forgets every cached render.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// The number of cached renders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The renderer behind this cache.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TemplateCommand, Arc<str>>> {
        // A panic in another holder cannot leave the map half-updated.
        self.rendered.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
