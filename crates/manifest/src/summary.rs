// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};

use crate::selector::fold;

/// The indexed names of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSummary {
    /// The kind, spelled as it first appeared in the render.
    kind: String,
    /// Sorted, de-duplicated names.
    names: Vec<String>,
}

impl KindSummary {
    /// The kind, spelled as it first appeared in the render.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Sorted, de-duplicated names indexed under this kind.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Read-only projection of an index: every indexed name grouped by kind.
///
/// Kinds are ordered case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    kinds: Vec<KindSummary>,
}

impl Summary {
    /// Groups `(kind, name)` pairs. The first spelling seen for a kind wins.
    pub(crate) fn collect<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut grouped: BTreeMap<String, (String, BTreeSet<String>)> = BTreeMap::new();

        for (kind, name) in pairs {
            grouped
                .entry(fold(kind))
                .or_insert_with(|| (kind.to_string(), BTreeSet::new()))
                .1
                .insert(name.to_string());
        }

        Self {
            kinds: grouped
                .into_values()
                .map(|(kind, names)| KindSummary {
                    kind,
                    names: names.into_iter().collect(),
                })
                .collect(),
        }
    }

    /// Every kind, in order.
    #[must_use]
    pub fn kinds(&self) -> &[KindSummary] {
        &self.kinds
    }

    /// Names indexed under `kind` (matched case-insensitively).
    #[must_use]
    pub fn names(&self, kind: &str) -> Option<&[String]> {
        let wanted: String = fold(kind);
        self.kinds
            .iter()
            .find(|entry| fold(&entry.kind) == wanted)
            .map(KindSummary::names)
    }

    /// Every `Kind/name` key, grouped by kind.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.kinds
            .iter()
            .flat_map(|entry| {
                entry
                    .names
                    .iter()
                    .map(move |name| format!("{}/{name}", entry.kind))
            })
            .collect()
    }

    /// Returns whether nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kinds.is_empty() {
            return write!(f, "{{}}");
        }
        let entries: Vec<String> = self
            .kinds
            .iter()
            .map(|entry| format!("{}: [{}]", entry.kind, entry.names.join(", ")))
            .collect();
        write!(f, "{{ {} }}", entries.join(", "))
    }
}
