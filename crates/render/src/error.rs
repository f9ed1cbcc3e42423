// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for rendering and fixture configuration.

use chart_probe::IndexError;
use thiserror::Error;

/// Errors raised while rendering a chart or loading fixtures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A fixture or command definition is unusable.
    #[error("Invalid fixture: {reason}")]
    InvalidFixture {
        /// What is wrong with the definition.
        reason: String,
    },

    /// A fixture name is not present in the configuration.
    #[error("Fixture '{name}' is not configured. Available fixtures: {}", available_text(.available))]
    UnknownFixture {
        /// The requested fixture.
        name: String,
        /// Every configured fixture name.
        available: Vec<String>,
    },

    /// The template command could not be started.
    #[error("Failed to execute template command: {command}. Cause: {message}")]
    Spawn {
        /// The command line.
        command: String,
        /// The operating system error.
        message: String,
    },

    /// The template command exited unsuccessfully.
    #[error("Template command failed with exit code {}: {command}\nstderr:\n{}", code_text(.code), stderr_text(.stderr))]
    CommandFailed {
        /// The command line.
        command: String,
        /// The exit code, if the process exited normally.
        code: Option<i32>,
        /// Everything the command wrote to stderr.
        stderr: String,
    },

    /// The template command wrote something other than UTF-8.
    #[error("Template command produced non-UTF-8 output: {command}")]
    NonUtf8Output {
        /// The command line.
        command: String,
    },

    /// A fixture configuration file could not be read or parsed.
    #[error("Failed to load fixture configuration {source_name}: {message}")]
    Config {
        /// The file path, or `<inline>` for in-memory text.
        source_name: String,
        /// The underlying error.
        message: String,
    },

    /// The rendered text could not be indexed.
    #[error(transparent)]
    Index(#[from] IndexError),
}

fn available_text(available: &[String]) -> String {
    if available.is_empty() {
        String::from("(none)")
    } else {
        available.join(", ")
    }
}

#[allow(clippy::ref_option)] // called with a field reference from the error attribute
fn code_text(code: &Option<i32>) -> String {
    code.map_or_else(|| String::from("(signal)"), |code| code.to_string())
}

fn stderr_text(stderr: &str) -> &str {
    let trimmed: &str = stderr.trim();
    if trimmed.is_empty() { "(empty)" } else { trimmed }
}
