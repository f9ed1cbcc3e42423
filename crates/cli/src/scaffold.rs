// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use chart_probe_render::CONFIG_FILE_NAME;
use color_eyre::{Result, eyre::Context, eyre::bail};
use tracing::debug;

const CONFIG_TEMPLATE: &str = include_str!("templates/chart-probe.yaml");
const TEST_TEMPLATE: &str = include_str!("templates/chart_manifest.rs.tmpl");

/// Files written by `chart-probe init`, relative to the target directory.
fn scaffold_files() -> [(PathBuf, &'static str); 2] {
    [
        (PathBuf::from(CONFIG_FILE_NAME), CONFIG_TEMPLATE),
        (Path::new("tests").join("chart_manifest.rs"), TEST_TEMPLATE),
    ]
}

/// Writes the starter configuration and test file under `root`.
///
/// Returns the written paths relative to `root`. Nothing is written if any
/// target already exists and `force` is not set.
pub fn scaffold(root: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let files: [(PathBuf, &str); 2] = scaffold_files();

    let mut existing: Vec<&PathBuf> = files
        .iter()
        .map(|(relative, _)| relative)
        .filter(|relative| root.join(relative).exists())
        .collect();
    if !existing.is_empty() && !force {
        existing.sort();
        let listed: Vec<String> = existing
            .iter()
            .map(|relative| relative.display().to_string())
            .collect();
        bail!(
            "Refusing to overwrite existing files: {}. Re-run with --force to overwrite.",
            listed.join(", ")
        );
    }

    let mut created: Vec<PathBuf> = Vec::with_capacity(files.len());
    for (relative, contents) in files {
        let path: PathBuf = root.join(&relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, contents)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote scaffold file");
        created.push(relative);
    }

    Ok(created)
}
