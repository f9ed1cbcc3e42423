// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::error::IndexError;

/// Addresses one manifest by kind and name, optionally qualified by `apiVersion`.
///
/// Kind and `apiVersion` are matched case-insensitively; the name is an opaque,
/// case-sensitive identifier. Surrounding whitespace is never trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// The `apiVersion` qualifier, if any.
    api_version: Option<String>,
    /// The manifest kind.
    kind: String,
    /// The `metadata.name` of the manifest.
    name: String,
}

impl Selector {
    /// Creates an unqualified `kind/name` selector.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_version: None,
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an `apiVersion/kind/name` selector.
    ///
    /// Unlike [`Selector::parse`], the `apiVersion` may itself contain `/`
    /// (`apps/v1`, `networking.k8s.io/v1`).
    #[must_use]
    pub fn qualified(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            api_version: Some(api_version.into()),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Parses `kind/name` or `apiVersion/kind/name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` if the text does not have exactly two or
    /// three `/`-separated segments, or if any segment is empty.
    pub fn parse(text: &str) -> Result<Self, IndexError> {
        let segments: Vec<&str> = text.split('/').collect();

        match segments.as_slice() {
            [kind, name] if !kind.is_empty() && !name.is_empty() => Ok(Self::new(*kind, *name)),
            [api_version, kind, name]
                if !api_version.is_empty() && !kind.is_empty() && !name.is_empty() =>
            {
                Ok(Self::qualified(*api_version, *kind, *name))
            }
            [_, _] | [_, _, _] => Err(IndexError::InvalidSelector {
                selector: text.to_string(),
                reason: String::from("segments must not be empty"),
            }),
            _ => Err(IndexError::InvalidSelector {
                selector: text.to_string(),
                reason: format!("found {} segments", segments.len()),
            }),
        }
    }

    /// The `apiVersion` qualifier, if any.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// The manifest kind, as written.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The manifest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this selector carries an `apiVersion`.
    #[must_use]
    pub const fn is_qualified(&self) -> bool {
        self.api_version.is_some()
    }
}

impl FromStr for Selector {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.api_version {
            Some(api_version) => write!(f, "{api_version}/{}/{}", self.kind, self.name),
            None => write!(f, "{}/{}", self.kind, self.name),
        }
    }
}

/// Canonical form of a case-insensitive segment (kind or `apiVersion`).
pub(crate) fn fold(segment: &str) -> String {
    segment.to_lowercase()
}
