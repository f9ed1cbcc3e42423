// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ManifestIndex;

pub const SAMPLE_RENDER: &str = include_str!("fixtures/sample_render.yaml");

/// Renders one minimal manifest document.
pub fn manifest(api_version: &str, kind: &str, name: &str) -> String {
    format!("apiVersion: {api_version}\nkind: {kind}\nmetadata:\n  name: {name}\n")
}

/// Joins documents into one `---`-separated stream.
pub fn stream(documents: &[String]) -> String {
    documents.join("---\n")
}

pub fn create_sample_index() -> ManifestIndex {
    ManifestIndex::parse(SAMPLE_RENDER).unwrap()
}

/// Three documents: a ConfigMap and two Deployments with different replica counts.
pub fn create_base_index() -> ManifestIndex {
    let text: &str = r"apiVersion: v1
kind: ConfigMap
metadata:
  name: base-config
data:
  LOG_LEVEL: info
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: api
spec:
  replicas: 1
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: worker
spec:
  replicas: 2
";
    ManifestIndex::parse(text).unwrap()
}

/// Two Services named `api` under `v1` and `v1beta1`.
pub fn create_colliding_index() -> ManifestIndex {
    let text: &str = r"apiVersion: v1
kind: Service
metadata:
  name: api
spec:
  type: ClusterIP
---
apiVersion: v1beta1
kind: Service
metadata:
  name: api
spec:
  type: NodePort
";
    ManifestIndex::parse(text).unwrap()
}
