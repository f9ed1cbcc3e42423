// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Selector-based lookup over rendered Kubernetes manifests.
//!
//! ```ignore
//! let manifests = ManifestIndex::parse(&rendered)?;
//! let deployment = manifests.get("deployment/api")?;
//! assert_eq!(deployment.path("spec.replicas")?, 1);
//! ```

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod index;
mod selector;
mod summary;

#[cfg(test)]
mod tests;

pub use chart_probe_document::{DocumentError, Node, Record, Shape, parse_documents};
pub use error::IndexError;
pub use index::{DuplicatePolicy, ManifestIndex};
pub use selector::Selector;
pub use summary::{KindSummary, Summary};
