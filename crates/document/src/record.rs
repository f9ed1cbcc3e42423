// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_yaml::Value;

use crate::error::DocumentError;
use crate::node::Node;

/// One rendered document.
///
/// A record owns its parsed tree and never changes after parsing. All reads
/// go through borrowed [`Node`] views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The 1-based ordinal of this document in the rendered stream.
    position: usize,
    /// The parsed document.
    value: Value,
}

impl Record {
    /// Creates a record from an already-parsed value.
    ///
    /// # Arguments
    ///
    /// * `position` - The 1-based ordinal of the document in its stream
    /// * `value` - The parsed document
    #[must_use]
    pub const fn new(position: usize, value: Value) -> Self {
        Self { position, value }
    }

    /// The 1-based ordinal of this document in the rendered stream.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The parsed document.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// A navigable view of the document root.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node::new(&self.value)
    }

    /// Looks up one top-level key. See [`Node::get`].
    ///
    /// # Errors
    ///
    /// Returns `AttributeMissing` if the key is absent.
    pub fn get(&self, key: &str) -> Result<Node<'_>, DocumentError> {
        self.root().get(key)
    }

    /// Walks a dotted path from the document root. See [`Node::path`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a segment lookup.
    pub fn path(&self, dotted: &str) -> Result<Node<'_>, DocumentError> {
        self.root().path(dotted)
    }

    /// The `apiVersion` field, if present as a non-empty string.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.text_at(&["apiVersion"])
    }

    /// The `kind` field, if present as a non-empty string.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.text_at(&["kind"])
    }

    /// The `metadata.name` field, if present as a non-empty string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text_at(&["metadata", "name"])
    }

    /// Serializes the document back to YAML.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` if the YAML emitter fails.
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        serde_yaml::to_string(&self.value).map_err(|err| DocumentError::Serialize {
            message: err.to_string(),
        })
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialize` if the document cannot be expressed as JSON
    /// (for example a mapping with non-string keys).
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.value).map_err(|err| DocumentError::Serialize {
            message: err.to_string(),
        })
    }

    fn text_at(&self, keys: &[&str]) -> Option<&str> {
        let node: Node<'_> = keys
            .iter()
            .try_fold(self.root(), |node, key| node.get(key).ok())?;
        node.as_str().filter(|text| !text.is_empty())
    }
}
