use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, instrument, warn};
use umbra_domain::{evaluate, Verdict};

use crate::messaging::RecheckMailbox;
use crate::ports::{PagePresenter, SettingsRepository};

/// Drives one page: re-evaluates the rules on every trigger and hands the
/// verdict to the presenter.
///
/// Every trigger runs a full load → evaluate → present pass from the
/// current stored settings; nothing is incremental, so duplicate or
/// out-of-order notifications are harmless. Each page runs its own agent;
/// the settings store is the only shared state.
pub struct PageAgent {
    host: Arc<str>,
    repository: Arc<dyn SettingsRepository>,
    presenter: Arc<dyn PagePresenter>,
    current: ArcSwap<Verdict>,
}

impl PageAgent {
    pub fn new(
        host: impl Into<Arc<str>>,
        repository: Arc<dyn SettingsRepository>,
        presenter: Arc<dyn PagePresenter>,
    ) -> Self {
        Self {
            host: host.into(),
            repository,
            presenter,
            current: ArcSwap::from_pointee(Verdict::off()),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Verdict from the most recent application (lock-free snapshot).
    pub fn current(&self) -> Verdict {
        **self.current.load()
    }

    /// Recompute from the stored settings and present the result.
    ///
    /// A storage failure degrades to the fail-safe off verdict instead of
    /// propagating.
    #[instrument(skip(self), fields(host = %self.host))]
    pub async fn refresh(&self) -> Verdict {
        let verdict = match self.repository.load().await {
            Ok(settings) => evaluate(&self.host, &settings),
            Err(e) => {
                warn!(error = %e, "Settings read failed, disabling dark mode");
                Verdict::off()
            }
        };

        self.presenter.present(&verdict);
        self.current.store(Arc::new(verdict));
        debug!(apply = verdict.apply, intensity = verdict.intensity, "Verdict applied");
        verdict
    }

    /// Run the trigger loop: apply once at startup, then react to settings
    /// changes and re-check requests until both sources are gone.
    ///
    /// Re-check requests are acknowledged after the re-evaluation has been
    /// applied, closing the request channel. A lagged notification stream
    /// just forces another full re-evaluation.
    pub async fn run(&self, mut mailbox: RecheckMailbox) {
        let mut changes = self.repository.subscribe();
        self.refresh().await;

        loop {
            tokio::select! {
                change = changes.recv() => match change {
                    Ok(change) => {
                        debug!(host = %self.host, keys = ?change.keys, "Settings changed");
                        self.refresh().await;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        debug!(host = %self.host, skipped, "Notifications lagged, re-evaluating");
                        self.refresh().await;
                    }
                    Err(RecvError::Closed) => break,
                },
                request = mailbox.recv() => match request {
                    Some(request) => {
                        self.refresh().await;
                        request.acknowledge();
                    }
                    None => break,
                },
            }
        }

        info!(host = %self.host, "Page agent stopped");
    }
}
