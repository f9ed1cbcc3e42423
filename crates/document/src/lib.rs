// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multi-document YAML parsing for rendered manifests.
//!
//! [`parse_documents`] turns a rendered stream into [`Record`]s, and
//! [`Node`] walks a record by key, index or dotted path.

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
mod node;
mod parse;
mod record;

#[cfg(test)]
mod tests;

pub use error::DocumentError;
pub use node::{Node, Shape};
pub use parse::parse_documents;
pub use record::Record;
