use std::sync::{Arc, Mutex};

use tracing::info;
use umbra_application::messaging::recheck_channel;
use umbra_application::services::PageAgent;
use umbra_domain::host::normalize_host;
use umbra_domain::Config;
use umbra_infrastructure::{MarkerPresenter, PageDocument};

use crate::di::Repositories;

/// Run a live page agent for one host: applies once at startup, then
/// re-applies on every settings change until Ctrl-C.
pub async fn watch(
    host: &str,
    config: &Config,
    repositories: &Repositories,
) -> anyhow::Result<()> {
    // An unparseable host is watched as an internal page.
    let host = normalize_host(host).unwrap_or_default();

    let document = Arc::new(Mutex::new(PageDocument::new()));
    let presenter = Arc::new(MarkerPresenter::new(
        document.clone(),
        config.presentation.clone(),
    ));

    let agent = Arc::new(PageAgent::new(
        host.as_str(),
        repositories.settings.clone(),
        presenter,
    ));
    let (sender, mailbox) = recheck_channel();

    let runner = {
        let agent = agent.clone();
        tokio::spawn(async move { agent.run(mailbox).await })
    };

    info!(host = %host, "Watching; press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    // Closing the mailbox ends the agent loop.
    drop(sender);
    runner.await?;

    let verdict = agent.current();
    println!(
        "{host}: dark mode {} (intensity {})",
        if verdict.apply { "on" } else { "off" },
        verdict.intensity
    );
    Ok(())
}
