// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Splitting a rendered stream into records.

use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use crate::error::DocumentError;
use crate::node::untagged;
use crate::record::Record;

/// Parses a multi-document YAML stream into records, in stream order.
///
/// Documents are separated by `---`. Empty documents (including ones that
/// hold only comments) produce no record but still count towards the
/// positions of the documents after them. Merge keys (`<<`) are resolved.
///
/// Parsing is all-or-nothing: the first malformed document aborts the whole
/// stream and no records are returned.
///
/// # Arguments
///
/// * `text` - The rendered text
///
/// # Errors
///
/// Returns `Parse` naming the 1-based ordinal of the first document that is
/// not valid YAML.
pub fn parse_documents(text: &str) -> Result<Vec<Record>, DocumentError> {
    let mut records: Vec<Record> = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let position: usize = index + 1;
        let mut value: Value = Value::deserialize(document).map_err(|err| DocumentError::Parse {
            document: position,
            message: err.to_string(),
        })?;

        if untagged(&value).is_null() {
            debug!(document = position, "skipping empty document");
            continue;
        }

        value.apply_merge().map_err(|err| DocumentError::Parse {
            document: position,
            message: err.to_string(),
        })?;

        records.push(Record::new(position, value));
    }

    debug!(records = records.len(), "parsed rendered documents");
    Ok(records)
}
