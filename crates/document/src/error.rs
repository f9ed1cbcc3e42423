// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for document parsing and navigation.

use thiserror::Error;

use crate::node::Shape;

/// Errors raised while splitting a render into records or walking a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// A document in the stream is not valid YAML.
    #[error("YAML document #{document} could not be parsed: {message}")]
    Parse {
        /// The 1-based ordinal of the offending document in the stream.
        document: usize,
        /// The underlying syntax complaint.
        message: String,
    },

    /// A mapping does not contain the requested key.
    #[error("Attribute '{path}' not found. Available keys: {}", format_available(.available))]
    AttributeMissing {
        /// The dotted path that was requested.
        path: String,
        /// The keys present at the parent mapping.
        available: Vec<String>,
    },

    /// A sequence index is past the end of the sequence.
    #[error("Index {index} out of range at '{path}' (sequence has {len} elements)")]
    IndexOutOfRange {
        /// The dotted path of the sequence.
        path: String,
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },

    /// A node does not have the shape an operation needs.
    #[error("Expected {expected} at '{path}', found {found}")]
    UnexpectedShape {
        /// The dotted path of the node.
        path: String,
        /// Description of the accepted shapes.
        expected: &'static str,
        /// The shape that was actually found.
        found: Shape,
    },

    /// A record could not be serialized back to text.
    #[error("Failed to serialize record: {message}")]
    Serialize {
        /// The serializer's error message.
        message: String,
    },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        String::from("(none)")
    } else {
        available.join(", ")
    }
}
