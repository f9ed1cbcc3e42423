// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

//! Rendering glue for chart manifest tests.
//!
//! A [`ManifestFixture`] names a [`TemplateCommand`]. Loading it through a
//! [`RenderCache`] runs the command once per cache and returns a fresh
//! [`chart_probe::ManifestIndex`] on every load.

mod cache;
mod command;
mod config;
mod error;
mod fixture;
mod renderer;

#[cfg(test)]
mod tests;

pub use cache::RenderCache;
pub use command::TemplateCommand;
pub use config::{CONFIG_FILE_NAME, FixtureConfig, FixtureDefinition, OnDuplicate};
pub use error::RenderError;
pub use fixture::ManifestFixture;
pub use renderer::{ProcessRenderer, Renderer};
