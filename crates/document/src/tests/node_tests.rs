// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for borrowed navigation over records.

use crate::{DocumentError, Node, Record, Shape, parse_documents};

const DEPLOYMENT: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: api
  labels:
    app.kubernetes.io/name: api
spec:
  replicas: 2
  paused: false
  ratio: 0.5
  strategy: ~
  template:
    spec:
      containers:
        - name: web
          image: nginx:1.27.0
          ports:
            - containerPort: 8080
        - name: sidecar
          image: busybox
  tolerance: !custom 7
  "8080": quoted
  9090: bare
"#;

fn deployment() -> Record {
    parse_documents(DEPLOYMENT).unwrap().remove(0)
}

#[test]
fn test_node_path_walks_mappings_and_sequences() {
    let record: Record = deployment();

    let image: Node<'_> = record
        .path("spec.template.spec.containers.1.image")
        .unwrap();

    assert_eq!(image, "busybox");
    assert_eq!(image.location(), "spec.template.spec.containers.1.image");
}

#[test]
fn test_node_at_matches_numeric_get() {
    let record: Record = deployment();
    let containers: Node<'_> = record.path("spec.template.spec.containers").unwrap();

    let by_index: Node<'_> = containers.at(0).unwrap();
    let by_key: Node<'_> = containers.get("0").unwrap();

    assert_eq!(by_index.value(), by_key.value());
    assert_eq!(by_index.get("name").unwrap(), "web");
}

#[test]
fn test_node_get_reaches_dotted_keys() {
    let record: Record = deployment();

    let label: Node<'_> = record
        .path("metadata.labels")
        .unwrap()
        .get("app.kubernetes.io/name")
        .unwrap();

    assert_eq!(label, "api");
}

#[test]
fn test_node_get_matches_non_string_keys_by_text() {
    let record: Record = deployment();
    let spec: Node<'_> = record.get("spec").unwrap();

    assert_eq!(spec.get("8080").unwrap(), "quoted");
    assert_eq!(spec.get("9090").unwrap(), "bare");
}

#[test]
fn test_node_scalar_accessors() {
    let record: Record = deployment();

    assert_eq!(record.path("spec.replicas").unwrap().as_i64(), Some(2));
    assert_eq!(record.path("spec.replicas").unwrap().as_u64(), Some(2));
    assert_eq!(record.path("spec.paused").unwrap().as_bool(), Some(false));
    assert!(
        record
            .path("spec.ratio")
            .unwrap()
            .as_f64()
            .is_some_and(|ratio| (ratio - 0.5).abs() < f64::EPSILON)
    );
    assert!(record.path("spec.strategy").unwrap().is_null());
    assert_eq!(record.path("spec.replicas").unwrap().as_str(), None);
}

#[test]
fn test_node_literal_equality() {
    let record: Record = deployment();

    assert_eq!(record.path("spec.replicas").unwrap(), 2_i64);
    assert_eq!(record.path("spec.replicas").unwrap(), 2_u8);
    assert_eq!(record.path("spec.paused").unwrap(), false);
    assert_eq!(record.path("spec.ratio").unwrap(), 0.5_f64);
    assert_eq!(record.path("metadata.name").unwrap(), String::from("api"));
    assert_ne!(record.path("spec.replicas").unwrap(), "2");
}

#[test]
fn test_node_tags_are_transparent() {
    let record: Record = deployment();

    assert_eq!(record.path("spec.tolerance").unwrap(), 7);
    assert_eq!(record.path("spec.tolerance").unwrap().shape(), Shape::Number);
}

#[test]
fn test_node_shapes_are_preserved() {
    let record: Record = deployment();

    assert_eq!(record.root().shape(), Shape::Mapping);
    assert_eq!(
        record.path("spec.template.spec.containers").unwrap().shape(),
        Shape::Sequence
    );
    assert_eq!(record.path("metadata.name").unwrap().shape(), Shape::String);
    assert_eq!(record.path("spec.paused").unwrap().shape(), Shape::Bool);
    assert_eq!(record.path("spec.strategy").unwrap().shape(), Shape::Null);
    assert!(Shape::Number.is_scalar());
    assert!(!Shape::Mapping.is_scalar());
}

#[test]
fn test_node_every_field_is_reachable_with_equal_value() {
    fn walk(node: &Node<'_>, visited: &mut usize) {
        match node.shape() {
            Shape::Mapping => {
                for (key, child) in node.entries().unwrap() {
                    let again: Node<'_> = node.get(&key).unwrap();
                    assert_eq!(again.value(), child.value());
                    assert_eq!(again.shape(), Shape::of(child.value()));
                    walk(&child, visited);
                }
            }
            Shape::Sequence => {
                for (index, child) in node.items().unwrap().iter().enumerate() {
                    assert_eq!(node.at(index).unwrap().value(), child.value());
                    walk(child, visited);
                }
            }
            _ => *visited += 1,
        }
    }

    let record: Record = deployment();
    let mut visited: usize = 0;
    walk(&record.root(), &mut visited);

    assert_eq!(visited, 16);
}

#[test]
fn test_node_keys_in_document_order() {
    let record: Record = deployment();

    let keys: Vec<String> = record.get("metadata").unwrap().keys().unwrap();

    assert_eq!(keys, vec![String::from("name"), String::from("labels")]);
    assert!(record.root().contains_key("spec"));
    assert!(!record.root().contains_key("status"));
}

#[test]
fn test_node_missing_key_lists_available_keys() {
    let record: Record = deployment();

    let err: DocumentError = record.path("metadata.namespace").unwrap_err();

    assert_eq!(
        err,
        DocumentError::AttributeMissing {
            path: String::from("metadata.namespace"),
            available: vec![String::from("name"), String::from("labels")],
        }
    );
}

#[test]
fn test_node_index_out_of_range() {
    let record: Record = deployment();

    let err: DocumentError = record
        .path("spec.template.spec.containers.5")
        .unwrap_err();

    assert_eq!(
        err,
        DocumentError::IndexOutOfRange {
            path: String::from("spec.template.spec.containers"),
            index: 5,
            len: 2,
        }
    );
}

#[test]
fn test_node_non_numeric_key_on_sequence_is_missing() {
    let record: Record = deployment();

    let result: Result<Node<'_>, DocumentError> =
        record.path("spec.template.spec.containers.first");

    assert!(matches!(
        result,
        Err(DocumentError::AttributeMissing { .. })
    ));
}

#[test]
fn test_node_descending_into_scalar_is_an_error() {
    let record: Record = deployment();

    let err: DocumentError = record.path("spec.replicas.value").unwrap_err();

    assert_eq!(
        err,
        DocumentError::UnexpectedShape {
            path: String::from("spec.replicas"),
            expected: "a mapping or sequence",
            found: Shape::Number,
        }
    );
}

#[test]
fn test_node_items_and_entries_check_shape() {
    let record: Record = deployment();

    assert!(matches!(
        record.get("spec").unwrap().items(),
        Err(DocumentError::UnexpectedShape { .. })
    ));
    assert!(matches!(
        record.path("spec.template.spec.containers").unwrap().entries(),
        Err(DocumentError::UnexpectedShape { .. })
    ));
    assert!(matches!(
        record.path("spec.replicas").unwrap().at(0),
        Err(DocumentError::UnexpectedShape { .. })
    ));
}

#[test]
fn test_node_empty_path_is_identity() {
    let record: Record = deployment();

    let same: Node<'_> = record.path("").unwrap();

    assert_eq!(same.value(), record.value());
    assert_eq!(same.location(), "");
}

#[test]
fn test_node_display() {
    let record: Record = deployment();

    assert_eq!(format!("{}", record.path("metadata.name").unwrap()), "api");
    assert_eq!(format!("{}", record.path("spec.replicas").unwrap()), "2");
    assert_eq!(format!("{}", record.path("spec.strategy").unwrap()), "null");
    assert_eq!(
        format!("{}", record.path("metadata.labels").unwrap()),
        "app.kubernetes.io/name: api"
    );
}
