//! Transfer flow tests
//!
//! Export → import round trips and import failure isolation, over the
//! real file-backed store.

#[path = "../common/mod.rs"]
mod common;

use common::TestStore;
use umbra_application::ports::SettingsRepository;
use umbra_application::use_cases::{ExportSettingsUseCase, ImportSettingsUseCase};
use umbra_domain::{FilterMode, SettingsPatch};

#[tokio::test]
async fn export_import_round_trip_between_stores() {
    let source = TestStore::new();
    source
        .repository
        .save(SettingsPatch {
            global_enabled: Some(false),
            mode: Some(FilterMode::Whitelist),
            excluded_hosts: Some(vec!["ads.example.com".into()]),
            allowed_hosts: Some(vec!["docs.example.com".into(), "news.example.com".into()]),
            intensity: Some(0.45),
        })
        .await
        .unwrap();

    let exported = ExportSettingsUseCase::new(source.repository.clone())
        .execute()
        .await
        .unwrap();

    let target = TestStore::new();
    ImportSettingsUseCase::new(target.repository.clone())
        .execute(&exported)
        .await
        .unwrap();

    let source_settings = source.repository.load().await.unwrap();
    let target_settings = target.repository.load().await.unwrap();
    assert_eq!(source_settings, target_settings);
}

#[tokio::test]
async fn exported_profile_carries_the_wire_field_names() {
    let store = TestStore::new();
    store
        .repository
        .save(SettingsPatch {
            excluded_hosts: Some(vec!["example.com".into()]),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();

    let exported = ExportSettingsUseCase::new(store.repository.clone())
        .execute()
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();

    assert!(value.get("globalEnabled").is_some());
    assert!(value.get("excludedHosts").is_some());
    assert!(value.get("allowedHosts").is_some());
    assert!(value.get("mode").is_some());
    assert!(value.get("intensity").is_some());
}

#[tokio::test]
async fn malformed_import_leaves_the_stored_file_untouched() {
    let store = TestStore::new();
    store
        .repository
        .save(SettingsPatch {
            excluded_hosts: Some(vec!["example.com".into()]),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();
    let before = std::fs::read_to_string(store.repository.path()).unwrap();

    let result = ImportSettingsUseCase::new(store.repository.clone())
        .execute("[1, 2, 3]")
        .await;
    assert!(result.is_err());

    let after = std::fs::read_to_string(store.repository.path()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn import_renormalizes_foreign_host_lists() {
    let store = TestStore::new();

    ImportSettingsUseCase::new(store.repository.clone())
        .execute(
            r#"{
                "excludedHosts": ["HTTPS://Tracking.Example.com/x", ".example.org", "example.org"],
                "intensity": 9000
            }"#,
        )
        .await
        .unwrap();

    let settings = store.repository.load().await.unwrap();
    assert_eq!(
        settings.excluded_hosts,
        vec!["tracking.example.com", "example.org"]
    );
    assert_eq!(settings.intensity, 1.0);
}

#[tokio::test]
async fn a_settings_file_is_itself_a_valid_profile() {
    let source = TestStore::new();
    source
        .repository
        .save(SettingsPatch {
            mode: Some(FilterMode::Whitelist),
            allowed_hosts: Some(vec!["example.com".into()]),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();

    let raw_file = std::fs::read_to_string(source.repository.path()).unwrap();

    let target = TestStore::new();
    ImportSettingsUseCase::new(target.repository.clone())
        .execute(&raw_file)
        .await
        .unwrap();

    assert_eq!(
        source.repository.load().await.unwrap(),
        target.repository.load().await.unwrap()
    );
}
