// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::Cell;

use crate::{RenderError, Renderer, TemplateCommand};

pub const CHART_RENDER: &str = r"---
# Source: example/templates/configmap.yaml
apiVersion: v1
kind: ConfigMap
metadata:
  name: example-config
data:
  LOG_LEVEL: info
---
# Source: example/templates/deployment.yaml
apiVersion: apps/v1
kind: Deployment
metadata:
  name: example-api
spec:
  replicas: 2
";

pub const DUPLICATE_RENDER: &str = r"apiVersion: v1
kind: ConfigMap
metadata:
  name: duplicate
data:
  copy: first
---
apiVersion: v1
kind: ConfigMap
metadata:
  name: duplicate
data:
  copy: second
";

/// A renderer that returns canned output and counts how often it runs.
pub struct CountingRenderer {
    output: Result<String, RenderError>,
    calls: Cell<usize>,
}

impl CountingRenderer {
    pub fn returning(output: &str) -> Self {
        Self {
            output: Ok(output.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: RenderError) -> Self {
        Self {
            output: Err(error),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Renderer for CountingRenderer {
    fn render(&self, _command: &TemplateCommand) -> Result<String, RenderError> {
        self.calls.set(self.calls.get() + 1);
        self.output.clone()
    }
}

pub fn helm_template() -> TemplateCommand {
    TemplateCommand::new("helm", ["template", "."]).unwrap()
}
