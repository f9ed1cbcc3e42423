// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// A templating command line, such as `helm template . -f values.yaml`.
///
/// The command is kept as an argument vector and never passed through a
/// shell. It is also the cache key for rendered output, so two commands are
/// equal only if every argument matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TemplateCommand {
    program: String,
    args: Vec<String>,
}

impl TemplateCommand {
    /// Creates a command from a program and its arguments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFixture` if the program or any argument is empty.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let program: String = program.into();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        if program.is_empty() {
            return Err(RenderError::InvalidFixture {
                reason: String::from("template command must name a program"),
            });
        }
        if args.iter().any(String::is_empty) {
            return Err(RenderError::InvalidFixture {
                reason: String::from("template command must contain only non-empty strings"),
            });
        }

        Ok(Self { program, args })
    }

    /// Creates a command from a full argument vector, program first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFixture` if `parts` is empty or contains an empty string.
    pub fn from_parts<I, S>(parts: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = parts.into_iter().map(Into::into);
        let Some(program) = parts.next() else {
            return Err(RenderError::InvalidFixture {
                reason: String::from("template command must be a non-empty sequence of strings"),
            });
        };
        Self::new(program, parts)
    }

    /// The program to run.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments passed to the program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl TryFrom<Vec<String>> for TemplateCommand {
    type Error = RenderError;

    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl From<TemplateCommand> for Vec<String> {
    fn from(command: TemplateCommand) -> Self {
        std::iter::once(command.program)
            .chain(command.args)
            .collect()
    }
}

impl std::fmt::Display for TemplateCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| quote(part))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Quotes an argument for display when it would not survive a shell as-is.
fn quote(part: &str) -> String {
    let plain: bool = part.chars().all(|c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | ',' | '@' | '+')
    });
    if plain {
        part.to_string()
    } else {
        format!("'{}'", part.replace('\'', r"'\''"))
    }
}
