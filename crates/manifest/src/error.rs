// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chart_probe_document::DocumentError;

/// Errors that can occur while building or querying a manifest index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The rendered text could not be parsed.
    Document(DocumentError),
    /// A selector string is not `kind/name` or `apiVersion/kind/name`.
    InvalidSelector {
        /// The selector as given.
        selector: String,
        /// Why it was rejected.
        reason: String,
    },
    /// No indexed manifest matches the selector.
    NotFound {
        /// The selector as given.
        selector: String,
        /// Every indexed `Kind/name` key.
        known: Vec<String>,
        /// `apiVersion`s present for the selector's kind and name, when the
        /// selector was qualified with a different one.
        api_versions: Vec<String>,
    },
    /// A `kind/name` selector matched manifests under several `apiVersion`s.
    AmbiguousSelector {
        /// The selector as given.
        selector: String,
        /// The colliding `apiVersion`s.
        api_versions: Vec<String>,
    },
    /// More than one manifest shares the same `apiVersion`, kind and name.
    DuplicateRecord {
        /// The shared `apiVersion`.
        api_version: String,
        /// The shared kind.
        kind: String,
        /// The shared name.
        name: String,
        /// Document positions of every copy.
        documents: Vec<usize>,
    },
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document(err) => write!(f, "{err}"),
            Self::InvalidSelector { selector, reason } => {
                write!(
                    f,
                    "Invalid selector '{selector}' ({reason}). Expected 'kind/name' or 'apiVersion/kind/name'"
                )
            }
            Self::NotFound {
                selector,
                known,
                api_versions,
            } => {
                write!(f, "Manifest '{selector}' not found.")?;
                if !api_versions.is_empty() {
                    write!(
                        f,
                        " Available apiVersions for this kind and name: {}.",
                        quoted_list(api_versions)
                    )?;
                }
                if known.is_empty() {
                    write!(f, " Indexed manifests: (none)")
                } else {
                    write!(f, " Indexed manifests: {}", known.join(", "))
                }
            }
            Self::AmbiguousSelector {
                selector,
                api_versions,
            } => {
                write!(
                    f,
                    "Manifest '{selector}' is ambiguous across apiVersions: {}. Use 'apiVersion/kind/name'",
                    quoted_list(api_versions)
                )
            }
            Self::DuplicateRecord {
                api_version,
                kind,
                name,
                documents,
            } => {
                let positions: Vec<String> = documents.iter().map(|doc| format!("#{doc}")).collect();
                write!(
                    f,
                    "Duplicate manifest for apiVersion='{api_version}', kind='{kind}', name='{name}' in documents {}",
                    positions.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Document(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DocumentError> for IndexError {
    fn from(err: DocumentError) -> Self {
        Self::Document(err)
    }
}

fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("'{value}'"))
        .collect::<Vec<String>>()
        .join(", ")
}
