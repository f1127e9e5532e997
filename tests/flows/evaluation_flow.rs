//! Evaluation flow tests
//!
//! Settings file → repository → rule evaluation, over the real
//! file-backed store.

#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{blacklist_patch, whitelist_patch};
use common::TestStore;
use umbra_application::ports::SettingsRepository;
use umbra_application::use_cases::CheckPageUseCase;
use umbra_domain::SettingsPatch;

// ============================================================================
// Blacklist mode
// ============================================================================

#[tokio::test]
async fn blacklist_mode_applies_everywhere_except_exclusions() {
    let store = TestStore::new();
    store
        .repository
        .save(blacklist_patch(&["example.com"]))
        .await
        .unwrap();

    let check = CheckPageUseCase::new(store.repository.clone());
    assert!(!check.execute("example.com").await.apply);
    assert!(!check.execute("sub.example.com").await.apply);
    assert!(check.execute("other.com").await.apply);
    assert!(check.execute("").await.apply);
}

// ============================================================================
// Whitelist mode
// ============================================================================

#[tokio::test]
async fn whitelist_mode_applies_only_on_allowances() {
    let store = TestStore::new();
    store
        .repository
        .save(whitelist_patch(&["example.com"]))
        .await
        .unwrap();

    let check = CheckPageUseCase::new(store.repository.clone());
    assert!(check.execute("example.com").await.apply);
    assert!(check.execute("sub.example.com").await.apply);
    assert!(!check.execute("other.com").await.apply);
    assert!(!check.execute("").await.apply);
}

// ============================================================================
// Global switch and fail-safe
// ============================================================================

#[tokio::test]
async fn global_off_disables_every_host() {
    let store = TestStore::new();
    store
        .repository
        .save(SettingsPatch {
            global_enabled: Some(false),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();

    let check = CheckPageUseCase::new(store.repository.clone());
    assert!(!check.execute("example.com").await.apply);
    assert!(!check.execute("").await.apply);
}

#[tokio::test]
async fn corrupt_store_degrades_to_off() {
    let store = TestStore::new();
    store.corrupt("{ not json at all");

    let check = CheckPageUseCase::new(store.repository.clone());
    let verdict = check.execute("example.com").await;
    assert!(!verdict.apply);
}

#[tokio::test]
async fn intensity_flows_through_clamped() {
    let store = TestStore::new();
    store
        .repository
        .save(SettingsPatch {
            intensity: Some(0.3),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();

    let check = CheckPageUseCase::new(store.repository.clone());
    let verdict = check.execute("example.com").await;
    assert!(verdict.apply);
    assert_eq!(verdict.intensity, 0.3);
}
