// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Borrowed, read-only navigation over a parsed YAML tree.
//!
//! A [`Node`] is created on demand for every step of a walk, so large
//! subtrees that a test never touches are never copied or converted.

use serde_yaml::{Mapping, Value};

use crate::error::DocumentError;

/// The structural shape of a YAML value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An explicit or implicit null.
    Null,
    /// `true` or `false`.
    Bool,
    /// An integer or floating point number.
    Number,
    /// A string scalar.
    String,
    /// An ordered sequence.
    Sequence,
    /// A key/value mapping.
    Mapping,
}

impl Shape {
    /// Returns the shape of a YAML value, looking through any tag.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match untagged(value) {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Sequence(_) => Self::Sequence,
            Value::Mapping(_) => Self::Mapping,
            Value::Tagged(tagged) => Self::of(&tagged.value),
        }
    }

    /// Returns whether this shape is a scalar (neither mapping nor sequence).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Sequence | Self::Mapping)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A read-only view of one value inside a record.
///
/// Key lookup and dotted-path lookup resolve identically:
/// `node.get("spec")?.get("replicas")?` and `node.path("spec.replicas")?`
/// return the same value. Missing keys are errors, never a silent null.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    /// Creates a root view over a value.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            value: untagged(value),
            path: String::new(),
        }
    }

    /// The dotted path from the record root to this node. Empty for the root.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.path
    }

    /// The underlying YAML value.
    #[must_use]
    pub const fn value(&self) -> &'a Value {
        self.value
    }

    /// The structural shape of this node.
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::of(self.value)
    }

    /// Looks up one key.
    ///
    /// On a mapping the key is matched against the mapping's keys. On a
    /// sequence the key must be a decimal index.
    ///
    /// # Errors
    ///
    /// * `AttributeMissing` if the mapping has no such key (or the key is not
    ///   an index into a sequence)
    /// * `IndexOutOfRange` if a sequence index is past the end
    /// * `UnexpectedShape` if this node is a scalar or null
    pub fn get(&self, key: &str) -> Result<Self, DocumentError> {
        match self.value {
            Value::Mapping(mapping) => match mapping_entry(mapping, key) {
                Some(value) => Ok(self.child(key, value)),
                None => Err(DocumentError::AttributeMissing {
                    path: self.child_path(key),
                    available: mapping.keys().map(key_text).collect(),
                }),
            },
            Value::Sequence(_) => match key.parse::<usize>() {
                Ok(index) => self.at(index),
                Err(_) => Err(DocumentError::AttributeMissing {
                    path: self.child_path(key),
                    available: Vec::new(),
                }),
            },
            other => Err(DocumentError::UnexpectedShape {
                path: self.display_path(),
                expected: "a mapping or sequence",
                found: Shape::of(other),
            }),
        }
    }

    /// Looks up one element of a sequence.
    ///
    /// # Errors
    ///
    /// * `IndexOutOfRange` if `index` is past the end
    /// * `UnexpectedShape` if this node is not a sequence
    pub fn at(&self, index: usize) -> Result<Self, DocumentError> {
        let sequence = self.sequence()?;
        sequence.get(index).map_or_else(
            || {
                Err(DocumentError::IndexOutOfRange {
                    path: self.display_path(),
                    index,
                    len: sequence.len(),
                })
            },
            |value| Ok(self.child(&index.to_string(), value)),
        )
    }

    /// Walks a dotted path such as `spec.template.spec.containers.0.image`.
    ///
    /// Each segment is resolved with [`Node::get`]. Keys that themselves
    /// contain `.` (annotation and label keys, for example) can only be
    /// reached with `get`. An empty path returns this node.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a segment lookup.
    pub fn path(&self, dotted: &str) -> Result<Self, DocumentError> {
        if dotted.is_empty() {
            return Ok(self.clone());
        }
        dotted
            .split('.')
            .try_fold(self.clone(), |node, segment| node.get(segment))
    }

    /// The elements of a sequence, in order.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedShape` if this node is not a sequence.
    pub fn items(&self) -> Result<Vec<Self>, DocumentError> {
        Ok(self
            .sequence()?
            .iter()
            .enumerate()
            .map(|(index, value)| self.child(&index.to_string(), value))
            .collect())
    }

    /// The key/value pairs of a mapping, in document order.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedShape` if this node is not a mapping.
    pub fn entries(&self) -> Result<Vec<(String, Self)>, DocumentError> {
        Ok(self
            .mapping()?
            .iter()
            .map(|(key, value)| {
                let key: String = key_text(key);
                let node: Self = self.child(&key, value);
                (key, node)
            })
            .collect())
    }

    /// The keys of a mapping, in document order.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedShape` if this node is not a mapping.
    pub fn keys(&self) -> Result<Vec<String>, DocumentError> {
        Ok(self.mapping()?.keys().map(key_text).collect())
    }

    /// Returns whether a mapping contains `key`. Always `false` for other shapes.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        match self.value {
            Value::Mapping(mapping) => mapping_entry(mapping, key).is_some(),
            _ => false,
        }
    }

    /// The string value, if this node is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self.value {
            Value::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The integer value, if this node is an integer that fits in `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// The integer value, if this node is a non-negative integer.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.value.as_u64()
    }

    /// The numeric value as a float, if this node is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// The boolean value, if this node is `true` or `false`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self.value {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns whether this node is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    fn as_i128(&self) -> Option<i128> {
        self.as_i64()
            .map(i128::from)
            .or_else(|| self.as_u64().map(i128::from))
    }

    fn mapping(&self) -> Result<&'a Mapping, DocumentError> {
        match self.value {
            Value::Mapping(mapping) => Ok(mapping),
            other => Err(DocumentError::UnexpectedShape {
                path: self.display_path(),
                expected: "a mapping",
                found: Shape::of(other),
            }),
        }
    }

    fn sequence(&self) -> Result<&'a [Value], DocumentError> {
        match self.value {
            Value::Sequence(sequence) => Ok(sequence.as_slice()),
            other => Err(DocumentError::UnexpectedShape {
                path: self.display_path(),
                expected: "a sequence",
                found: Shape::of(other),
            }),
        }
    }

    fn child(&self, key: &str, value: &'a Value) -> Self {
        Self {
            value: untagged(value),
            path: self.child_path(key),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn display_path(&self) -> String {
        if self.path.is_empty() {
            String::from("(root)")
        } else {
            self.path.clone()
        }
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Value::Null => write!(f, "null"),
            Value::Bool(flag) => write!(f, "{flag}"),
            Value::Number(number) => write!(f, "{number}"),
            Value::String(text) => write!(f, "{text}"),
            other => match serde_yaml::to_string(other) {
                Ok(text) => write!(f, "{}", text.trim_end()),
                Err(_) => Err(std::fmt::Error),
            },
        }
    }
}

impl PartialEq<str> for Node<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Node<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Node<'_> {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<bool> for Node<'_> {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<f64> for Node<'_> {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64().is_some_and(|value| (value - other).abs() < f64::EPSILON)
    }
}

macro_rules! partial_eq_integer {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for Node<'_> {
                fn eq(&self, other: &$ty) -> bool {
                    i128::try_from(*other)
                        .ok()
                        .is_some_and(|wanted| self.as_i128() == Some(wanted))
                }
            }
        )*
    };
}

partial_eq_integer! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize }

/// Looks through YAML tags (`!custom value`) to the tagged value.
pub(crate) fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

/// Finds a mapping value by the textual form of its key.
fn mapping_entry<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.get(key).or_else(|| {
        mapping
            .iter()
            .find(|(candidate, _)| !candidate.is_string() && key_text(candidate) == key)
            .map(|(_, value)| value)
    })
}

/// Renders a mapping key as text for lookup and error messages.
fn key_text(key: &Value) -> String {
    match untagged(key) {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Null => String::from("null"),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim_end().to_string())
            .unwrap_or_default(),
    }
}
