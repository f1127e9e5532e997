//! Agent flow tests
//!
//! Full trigger loop over the real store and document: startup apply,
//! change-notification re-apply, re-check acknowledgment, idempotent
//! re-presentation.

#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex};

use common::fixtures::wait_for;
use common::TestStore;
use umbra_application::messaging::{recheck_channel, RecheckSender};
use umbra_application::ports::SettingsRepository;
use umbra_application::services::PageAgent;
use umbra_infrastructure::{MarkerPresenter, PageDocument};
use umbra_domain::SettingsPatch;

struct RunningAgent {
    agent: Arc<PageAgent>,
    document: Arc<Mutex<PageDocument>>,
    sender: RecheckSender,
    handle: tokio::task::JoinHandle<()>,
}

impl RunningAgent {
    fn start(host: &str, store: &TestStore) -> Self {
        let document = Arc::new(Mutex::new(PageDocument::new()));
        let presenter = Arc::new(MarkerPresenter::with_defaults(document.clone()));
        let agent = Arc::new(PageAgent::new(
            host,
            store.repository.clone(),
            presenter,
        ));
        let (sender, mailbox) = recheck_channel();
        let handle = {
            let agent = agent.clone();
            tokio::spawn(async move { agent.run(mailbox).await })
        };
        Self {
            agent,
            document,
            sender,
            handle,
        }
    }

    fn marker_on(&self) -> bool {
        self.document.lock().unwrap().has_attribute("data-dark-mode")
    }

    fn mutations(&self) -> u64 {
        self.document.lock().unwrap().mutations()
    }

    async fn stop(self) {
        drop(self.sender);
        self.handle.await.unwrap();
    }
}

#[tokio::test]
async fn applies_at_startup_and_reacts_to_changes() {
    let store = TestStore::new();
    let running = RunningAgent::start("example.com", &store);

    wait_for(|| running.marker_on()).await;

    store
        .repository
        .save(SettingsPatch {
            excluded_hosts: Some(vec!["example.com".into()]),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();

    wait_for(|| !running.marker_on()).await;
    assert!(!running.agent.current().apply);

    running.stop().await;
}

#[tokio::test]
async fn recheck_is_acknowledged_and_idempotent() {
    let store = TestStore::new();
    let running = RunningAgent::start("example.com", &store);

    wait_for(|| running.marker_on()).await;
    let settled = running.mutations();

    // Re-checks without a settings change re-present the same verdict;
    // the document must not be touched again.
    for _ in 0..3 {
        let ack = running.sender.request().await.unwrap();
        assert!(ack.ok);
    }
    assert_eq!(running.mutations(), settled);

    running.stop().await;
}

#[tokio::test]
async fn intensity_changes_update_the_style_property() {
    let store = TestStore::new();
    let running = RunningAgent::start("example.com", &store);

    wait_for(|| running.marker_on()).await;

    store
        .repository
        .save(SettingsPatch {
            intensity: Some(0.25),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();

    wait_for(|| {
        running
            .document
            .lock()
            .unwrap()
            .style_property("--dm-i")
            .map(|v| v == "0.25")
            .unwrap_or(false)
    })
    .await;

    running.stop().await;
}

#[tokio::test]
async fn two_agents_react_independently_to_the_same_store() {
    let store = TestStore::new();
    let first = RunningAgent::start("example.com", &store);
    let second = RunningAgent::start("other.com", &store);

    wait_for(|| first.marker_on() && second.marker_on()).await;

    store
        .repository
        .save(SettingsPatch {
            excluded_hosts: Some(vec!["example.com".into()]),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();

    wait_for(|| !first.marker_on()).await;
    assert!(second.marker_on());

    first.stop().await;
    second.stop().await;
}
