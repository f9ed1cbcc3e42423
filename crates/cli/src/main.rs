// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `chart-probe`: scaffold chart manifest tests and query rendered manifests.
//!
//! - `chart-probe init` writes `chart-probe.yaml` and `tests/chart_manifest.rs`
//! - `chart-probe inspect --file rendered.yaml` lists every indexed manifest
//! - `chart-probe get deployment/api -- helm template .` prints one manifest

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

mod scaffold;
mod source;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use chart_probe::{ManifestIndex, Record, Selector, Summary};
use chart_probe_render::RenderCache;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::bail};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

use crate::source::SourceArgs;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(output) => print!("{output}"),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<String> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scaffold a fixture configuration and a starter test
    Init {
        /// Overwrite scaffold files if they already exist
        #[arg(long)]
        force: bool,

        /// Directory to scaffold into
        #[arg(long, value_name = "PATH", default_value = ".")]
        dir: PathBuf,
    },

    /// List every indexed manifest, grouped by kind
    #[command(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print one manifest
    #[command(visible_alias = "g")]
    Get {
        /// `kind/name` or `apiVersion/kind/name`
        selector: String,

        /// `apiVersion` to match when it contains `/`, such as `apps/v1`
        #[arg(long, value_name = "VERSION")]
        api_version: Option<String>,

        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Command {
    fn run(self) -> Result<String> {
        match self {
            Self::Init { force, dir } => init(&dir, force),
            Self::Inspect { source } => {
                let index: ManifestIndex = load(&source)?;
                Ok(inspect(&index))
            }
            Self::Get {
                selector,
                api_version,
                json,
                source,
            } => {
                let selector: Selector = selector_for(&selector, api_version.as_deref())?;
                let index: ManifestIndex = load(&source)?;
                get(&index, &selector, json)
            }
        }
    }
}

fn init(dir: &Path, force: bool) -> Result<String> {
    let created: Vec<PathBuf> = scaffold::scaffold(dir, force)?;
    let mut output: String = String::from("Scaffolded files:\n");
    for path in created {
        output.push_str(&format!("- {}\n", path.display()));
    }
    Ok(output)
}

fn load(source: &SourceArgs) -> Result<ManifestIndex> {
    let (source, policy) = source.resolve()?;
    let cache: RenderCache = RenderCache::new();
    source.load(&cache, policy)
}

/// Lists every kind with its names, one kind per line.
fn inspect(index: &ManifestIndex) -> String {
    let summary: Summary = index.summary();
    let mut output: String = format!("{} manifests indexed\n", index.len());
    for kind in summary.kinds() {
        output.push_str(&format!("{}: {}\n", kind.kind(), kind.names().join(", ")));
    }
    output
}

fn selector_for(selector: &str, api_version: Option<&str>) -> Result<Selector> {
    let parsed: Selector = Selector::parse(selector)?;
    match api_version {
        None => Ok(parsed),
        Some(_) if parsed.is_qualified() => {
            bail!("--api-version cannot be combined with a three-segment selector '{selector}'")
        }
        Some(api_version) => Ok(Selector::qualified(
            api_version,
            parsed.kind(),
            parsed.name(),
        )),
    }
}

fn get(index: &ManifestIndex, selector: &Selector, json: bool) -> Result<String> {
    let record: &Record = index.lookup(selector)?;
    let mut output: String = if json {
        record.to_json()?
    } else {
        record.to_yaml()?
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
