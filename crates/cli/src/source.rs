// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use chart_probe::{DuplicatePolicy, ManifestIndex};
use chart_probe_render::{
    CONFIG_FILE_NAME, FixtureConfig, ManifestFixture, RenderCache, Renderer, TemplateCommand,
};
use clap::ValueEnum;
use color_eyre::{Result, eyre::Context, eyre::bail};
use tracing::debug;

/// Where rendered manifests come from.
#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Read rendered manifests from a file, or `-` for stdin
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["fixture", "command"])]
    file: Option<PathBuf>,

    /// Fixture configuration file used with --fixture
    #[arg(short, long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Render the named fixture from the configuration file
    #[arg(long, value_name = "NAME", conflicts_with = "command")]
    fixture: Option<String>,

    /// How to treat manifests sharing `apiVersion`, kind and name
    #[arg(long, value_enum)]
    on_duplicate: Option<DuplicateArg>,

    /// Template command to run, for example `-- helm template .`
    #[arg(last = true, value_name = "CMD")]
    command: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DuplicateArg {
    Retain,
    KeepFirst,
    Reject,
}

impl From<DuplicateArg> for DuplicatePolicy {
    fn from(value: DuplicateArg) -> Self {
        match value {
            DuplicateArg::Retain => Self::Retain,
            DuplicateArg::KeepFirst => Self::KeepFirst,
            DuplicateArg::Reject => Self::Reject,
        }
    }
}

/// A resolved manifest source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Rendered text on standard input.
    Stdin,
    /// Rendered text in a file.
    File(PathBuf),
    /// A fixture from a configuration file.
    Fixture(ManifestFixture),
    /// A template command given on the command line.
    Command(TemplateCommand),
}

impl SourceArgs {
    /// Resolves the flags into one source and the duplicate policy override.
    pub fn resolve(&self) -> Result<(Source, Option<DuplicatePolicy>)> {
        let policy: Option<DuplicatePolicy> = self.on_duplicate.map(DuplicatePolicy::from);

        let source: Source = match (&self.file, &self.fixture, self.command.as_slice()) {
            (Some(file), _, _) if file == Path::new("-") => Source::Stdin,
            (Some(file), _, _) => Source::File(file.clone()),
            (None, Some(name), _) => {
                let config: FixtureConfig = FixtureConfig::from_path(&self.config)?;
                Source::Fixture(config.fixture(name)?)
            }
            (None, None, [_, ..]) => {
                Source::Command(TemplateCommand::from_parts(self.command.iter().cloned())?)
            }
            (None, None, []) => {
                bail!("No manifest source given. Use --file PATH, --fixture NAME or -- CMD...")
            }
        };

        Ok((source, policy))
    }
}

impl Source {
    /// Reads or renders the manifests and indexes them.
    ///
    /// `policy` overrides the fixture's own duplicate policy when set.
    pub fn load<R: Renderer>(
        &self,
        cache: &RenderCache<R>,
        policy: Option<DuplicatePolicy>,
    ) -> Result<ManifestIndex> {
        debug!(source = ?self, "loading manifests");
        let index: ManifestIndex = match self {
            Self::Stdin => {
                let text: String = std::io::read_to_string(std::io::stdin())
                    .wrap_err("failed to read manifests from stdin")?;
                ManifestIndex::parse_with(&text, policy.unwrap_or_default())?
            }
            Self::File(path) => {
                let text: String = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                ManifestIndex::parse_with(&text, policy.unwrap_or_default())?
            }
            Self::Fixture(fixture) => match policy {
                Some(policy) => fixture.clone().on_duplicate(policy).load(cache)?,
                None => fixture.load(cache)?,
            },
            Self::Command(command) => cache.load(command, policy.unwrap_or_default())?,
        };
        Ok(index)
    }
}
