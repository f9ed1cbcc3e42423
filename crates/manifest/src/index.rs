// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use chart_probe_document::{Record, parse_documents};
use tracing::{debug, warn};

use crate::error::IndexError;
use crate::selector::{Selector, fold};
use crate::summary::Summary;

/// What to do with manifests that share `apiVersion`, kind and name.
///
/// `apiVersion` and kind are compared case-insensitively, names exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Keep every copy. Lookups that land on the duplicate fail with
    /// `DuplicateRecord`.
    #[default]
    Retain,
    /// Keep the first copy in document order and drop the rest.
    KeepFirst,
    /// Fail index construction with `DuplicateRecord`.
    Reject,
}

/// An indexed record together with its identity.
#[derive(Debug, Clone)]
struct Entry {
    api_version: String,
    api_version_key: String,
    kind: String,
    record: Record,
}

/// Selector-based lookup over the records of one render.
///
/// The index is built once and never changes afterwards. Records without a
/// `kind` or `metadata.name` are not indexed.
#[derive(Debug, Clone, Default)]
pub struct ManifestIndex {
    /// Indexed records, in document order.
    entries: Vec<Entry>,
    /// Folded kind and exact name to positions in `entries`.
    table: HashMap<(String, String), Vec<usize>>,
}

impl ManifestIndex {
    /// Parses a rendered stream and indexes it, retaining duplicates.
    ///
    /// # Errors
    ///
    /// Returns `Document` if any document fails to parse. No partial index is
    /// produced.
    pub fn parse(text: &str) -> Result<Self, IndexError> {
        Self::parse_with(text, DuplicatePolicy::default())
    }

    /// Parses a rendered stream and indexes it with the given duplicate policy.
    ///
    /// # Errors
    ///
    /// * `Document` if any document fails to parse
    /// * `DuplicateRecord` if `policy` is `Reject` and a duplicate exists
    pub fn parse_with(text: &str, policy: DuplicatePolicy) -> Result<Self, IndexError> {
        let records: Vec<Record> = parse_documents(text)?;
        Self::from_records(records, policy)
    }

    /// Indexes already-parsed records, in order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecord` if `policy` is `Reject` and two records share
    /// `apiVersion`, kind and name.
    pub fn from_records(
        records: impl IntoIterator<Item = Record>,
        policy: DuplicatePolicy,
    ) -> Result<Self, IndexError> {
        let mut index: Self = Self::default();
        let mut first_seen: HashMap<(String, String, String), usize> = HashMap::new();
        let mut skipped: usize = 0;

        for record in records {
            let (kind, name): (String, String) = match (record.kind(), record.name()) {
                (Some(kind), Some(name)) => (kind.to_string(), name.to_string()),
                _ => {
                    debug!(
                        document = record.position(),
                        "skipping document without kind or metadata.name"
                    );
                    skipped += 1;
                    continue;
                }
            };
            let api_version: String = record.api_version().unwrap_or_default().to_string();
            let api_version_key: String = fold(&api_version);
            let kind_key: String = fold(&kind);

            let identity: (String, String, String) =
                (api_version_key.clone(), kind_key.clone(), name.clone());
            if let Some(&first) = first_seen.get(&identity) {
                let first_position: usize = index.entries[first].record.position();
                match policy {
                    DuplicatePolicy::Retain => {}
                    DuplicatePolicy::KeepFirst => {
                        warn!(
                            api_version = %api_version,
                            kind = %kind,
                            name = %name,
                            kept = first_position,
                            dropped = record.position(),
                            "dropping duplicate manifest"
                        );
                        continue;
                    }
                    DuplicatePolicy::Reject => {
                        return Err(IndexError::DuplicateRecord {
                            api_version,
                            kind,
                            name,
                            documents: vec![first_position, record.position()],
                        });
                    }
                }
            } else {
                first_seen.insert(identity, index.entries.len());
            }

            index
                .table
                .entry((kind_key, name))
                .or_default()
                .push(index.entries.len());
            index.entries.push(Entry {
                api_version,
                api_version_key,
                kind,
                record,
            });
        }

        debug!(
            indexed = index.entries.len(),
            skipped, "built manifest index"
        );
        Ok(index)
    }

    /// Looks up one manifest by a `kind/name` or `apiVersion/kind/name` selector.
    ///
    /// # Errors
    ///
    /// * `InvalidSelector` if the selector is malformed
    /// * `NotFound` if nothing matches
    /// * `AmbiguousSelector` if `kind/name` matches several `apiVersion`s
    /// * `DuplicateRecord` if the match is a true duplicate
    pub fn get(&self, selector: &str) -> Result<&Record, IndexError> {
        let selector: Selector = Selector::parse(selector)?;
        self.lookup(&selector)
    }

    /// Looks up one manifest by an already-built selector.
    ///
    /// # Errors
    ///
    /// Same as [`ManifestIndex::get`], minus `InvalidSelector`.
    pub fn lookup(&self, selector: &Selector) -> Result<&Record, IndexError> {
        let key: (String, String) = (fold(selector.kind()), selector.name().to_string());
        let candidates: &[usize] = self.table.get(&key).map(Vec::as_slice).unwrap_or(&[]);

        let Some(api_version) = selector.api_version() else {
            return match candidates {
                [] => Err(self.not_found(selector, Vec::new())),
                [only] => Ok(&self.entries[*only].record),
                many => {
                    let api_versions: Vec<String> = self.distinct_api_versions(many);
                    if api_versions.len() > 1 {
                        Err(IndexError::AmbiguousSelector {
                            selector: selector.to_string(),
                            api_versions,
                        })
                    } else {
                        Err(self.duplicate(many))
                    }
                }
            };
        };

        let api_version_key: String = fold(api_version);
        let matches: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&position| self.entries[position].api_version_key == api_version_key)
            .collect();

        match matches.as_slice() {
            [] => Err(self.not_found(selector, self.distinct_api_versions(candidates))),
            [only] => Ok(&self.entries[*only].record),
            many => Err(self.duplicate(many)),
        }
    }

    /// Returns whether `selector` resolves to exactly one manifest.
    #[must_use]
    pub fn contains(&self, selector: &str) -> bool {
        self.get(selector).is_ok()
    }

    /// Every indexed record of `kind` (case-insensitive), in document order.
    pub fn of_kind<'a>(&'a self, kind: &str) -> impl Iterator<Item = &'a Record> + use<'a> {
        let wanted: String = fold(kind);
        self.entries
            .iter()
            .filter(move |entry| fold(&entry.kind) == wanted)
            .map(|entry| &entry.record)
    }

    /// Every indexed record, in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// The number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no records were indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups every indexed name under its kind.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::collect(
            self.entries
                .iter()
                .filter_map(|entry| Some((entry.kind.as_str(), entry.record.name()?))),
        )
    }

    /// `apiVersion`s of the given entries, de-duplicated case-insensitively and
    /// sorted. The first spelling seen is kept.
    fn distinct_api_versions(&self, positions: &[usize]) -> Vec<String> {
        let mut versions: Vec<&Entry> = Vec::new();
        for &position in positions {
            let entry: &Entry = &self.entries[position];
            if !versions
                .iter()
                .any(|seen| seen.api_version_key == entry.api_version_key)
            {
                versions.push(entry);
            }
        }
        versions.sort_by(|a, b| a.api_version_key.cmp(&b.api_version_key));
        versions
            .into_iter()
            .map(|entry| entry.api_version.clone())
            .collect()
    }

    fn not_found(&self, selector: &Selector, api_versions: Vec<String>) -> IndexError {
        IndexError::NotFound {
            selector: selector.to_string(),
            known: self.summary().keys(),
            api_versions,
        }
    }

    fn duplicate(&self, positions: &[usize]) -> IndexError {
        let first: &Entry = &self.entries[positions[0]];
        IndexError::DuplicateRecord {
            api_version: first.api_version.clone(),
            kind: first.kind.clone(),
            name: first.record.name().unwrap_or_default().to_string(),
            documents: positions
                .iter()
                .map(|&position| self.entries[position].record.position())
                .collect(),
        }
    }
}

impl std::fmt::Display for ManifestIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ManifestIndex {}", self.summary())
    }
}
