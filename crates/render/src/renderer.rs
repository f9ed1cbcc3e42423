// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io;
use std::process::Output;

use duct::cmd;
use tracing::{error, info};

use crate::command::TemplateCommand;
use crate::error::RenderError;

/// Produces rendered manifest text for a template command.
pub trait Renderer {
    /// Runs `command` and returns everything it wrote to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started, exits
    /// unsuccessfully, or writes output that is not UTF-8.
    fn render(&self, command: &TemplateCommand) -> Result<String, RenderError>;
}

/// Runs the template command as a child process.
///
/// The child inherits the current environment and working directory. There
/// is no timeout and no retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRenderer;

impl Renderer for ProcessRenderer {
    fn render(&self, command: &TemplateCommand) -> Result<String, RenderError> {
        let output: Output = cmd(command.program(), command.args())
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run_with_trace()
            .map_err(|err| RenderError::Spawn {
                command: command.to_string(),
                message: err.to_string(),
            })?;

        if !output.status.success() {
            error!(command = %command, code = ?output.status.code(), "template command failed");
            return Err(RenderError::CommandFailed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| RenderError::NonUtf8Output {
            command: command.to_string(),
        })
    }
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            error!("failed to run command: {:?}", self);
        })
    }
}
