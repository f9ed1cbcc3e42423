// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chart_probe::{DuplicatePolicy, ManifestIndex};

use super::helpers::{CHART_RENDER, CountingRenderer, DUPLICATE_RENDER, helm_template};
use crate::{ManifestFixture, RenderCache, RenderError};

#[test]
fn test_new_rejects_empty_name() {
    let result: Result<ManifestFixture, RenderError> = ManifestFixture::new("", helm_template());

    assert!(matches!(
        result,
        Err(RenderError::InvalidFixture { ref reason }) if reason == "fixture name must be a non-empty string"
    ));
}

#[test]
fn test_new_defaults_to_retain() {
    let fixture: ManifestFixture = ManifestFixture::new("chart_manifest", helm_template()).unwrap();

    assert_eq!(fixture.name(), "chart_manifest");
    assert_eq!(fixture.command(), &helm_template());
    assert_eq!(fixture.duplicate_policy(), DuplicatePolicy::Retain);
}

#[test]
fn test_fixtures_sharing_a_command_share_one_render() {
    let cache: RenderCache<CountingRenderer> =
        RenderCache::with_renderer(CountingRenderer::returning(CHART_RENDER));
    let first: ManifestFixture = ManifestFixture::new("chart_manifest", helm_template()).unwrap();
    let second: ManifestFixture = ManifestFixture::new("other_manifest", helm_template()).unwrap();

    let first_index: ManifestIndex = first.load(&cache).unwrap();
    let second_index: ManifestIndex = second.load(&cache).unwrap();

    assert_eq!(cache.renderer().calls(), 1);
    assert_eq!(first_index.to_string(), second_index.to_string());
}

#[test]
fn test_load_with_retain_fails_only_on_lookup() {
    let cache: RenderCache<CountingRenderer> =
        RenderCache::with_renderer(CountingRenderer::returning(DUPLICATE_RENDER));
    let fixture: ManifestFixture = ManifestFixture::new("chart_manifest", helm_template()).unwrap();

    let index: ManifestIndex = fixture.load(&cache).unwrap();

    assert_eq!(index.len(), 2);
    assert!(!index.contains("configmap/duplicate"));
}

#[test]
fn test_load_with_reject_fails() {
    let cache: RenderCache<CountingRenderer> =
        RenderCache::with_renderer(CountingRenderer::returning(DUPLICATE_RENDER));
    let fixture: ManifestFixture = ManifestFixture::new("chart_manifest", helm_template())
        .unwrap()
        .on_duplicate(DuplicatePolicy::Reject);

    assert!(matches!(fixture.load(&cache), Err(RenderError::Index(_))));
}

#[test]
fn test_render_with_bypasses_cache() {
    let renderer: CountingRenderer = CountingRenderer::returning(CHART_RENDER);
    let fixture: ManifestFixture = ManifestFixture::new("chart_manifest", helm_template()).unwrap();

    fixture.render_with(&renderer).unwrap();
    let index: ManifestIndex = fixture.render_with(&renderer).unwrap();

    assert_eq!(renderer.calls(), 2);
    assert!(index.contains("configmap/example-config"));
}
