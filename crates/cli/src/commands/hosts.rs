use umbra_domain::FilterMode;

use super::ListAction;
use crate::di::UseCases;

pub async fn exclude(use_cases: &UseCases, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Add { host } => {
            let hosts = use_cases.add_excluded.execute(&host).await?;
            print_list(&hosts);
        }
        ListAction::Remove { host } => {
            let hosts = use_cases.remove_excluded.execute(&host).await?;
            print_list(&hosts);
        }
        ListAction::List => {
            let settings = use_cases.get_settings.execute().await?;
            print_list(&settings.excluded_hosts);
        }
    }
    Ok(())
}

pub async fn allow(use_cases: &UseCases, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Add { host } => {
            let hosts = use_cases.add_allowed.execute(&host).await?;
            print_list(&hosts);
        }
        ListAction::Remove { host } => {
            let hosts = use_cases.remove_allowed.execute(&host).await?;
            print_list(&hosts);
        }
        ListAction::List => {
            let settings = use_cases.get_settings.execute().await?;
            print_list(&settings.allowed_hosts);
        }
    }
    Ok(())
}

pub async fn toggle(use_cases: &UseCases, host: &str) -> anyhow::Result<()> {
    let toggle = use_cases.toggle_site.execute(host).await?;

    match (toggle.mode, toggle.listed) {
        (FilterMode::All, true) => println!("{} excluded", toggle.host),
        (FilterMode::All, false) => println!("{} no longer excluded", toggle.host),
        (FilterMode::Whitelist, true) => println!("{} allowed", toggle.host),
        (FilterMode::Whitelist, false) => println!("{} no longer allowed", toggle.host),
    }
    Ok(())
}

fn print_list(hosts: &[String]) {
    if hosts.is_empty() {
        println!("(none)");
        return;
    }
    for host in hosts {
        println!("{host}");
    }
}
