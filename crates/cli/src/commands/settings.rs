use umbra_domain::{FilterMode, SettingsPatch};

use crate::di::UseCases;

pub async fn status(use_cases: &UseCases, host: Option<&str>) -> anyhow::Result<()> {
    let settings = use_cases.get_settings.execute().await?;

    println!(
        "Global:    {}",
        if settings.global_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("Mode:      {}", settings.mode);
    println!("Intensity: {}", settings.intensity);
    println!("Excluded:  {}", format_list(&settings.excluded_hosts));
    println!("Allowed:   {}", format_list(&settings.allowed_hosts));

    if let Some(host) = host {
        let verdict = use_cases.check_page.execute(host).await;
        println!();
        println!(
            "{host}: dark mode {} (intensity {})",
            if verdict.apply { "on" } else { "off" },
            verdict.intensity
        );
    }
    Ok(())
}

pub async fn set_global(use_cases: &UseCases, enabled: bool) -> anyhow::Result<()> {
    use_cases
        .update_settings
        .execute(SettingsPatch {
            global_enabled: Some(enabled),
            ..SettingsPatch::default()
        })
        .await?;

    println!(
        "Dark mode {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub async fn set_mode(use_cases: &UseCases, mode: FilterMode) -> anyhow::Result<()> {
    use_cases
        .update_settings
        .execute(SettingsPatch {
            mode: Some(mode),
            ..SettingsPatch::default()
        })
        .await?;

    println!("Mode set to {mode}");
    Ok(())
}

pub async fn set_intensity(use_cases: &UseCases, value: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&value),
        "intensity must be between 0 and 1"
    );

    use_cases
        .update_settings
        .execute(SettingsPatch {
            intensity: Some(value),
            ..SettingsPatch::default()
        })
        .await?;

    println!("Intensity set to {value}");
    Ok(())
}

pub async fn clear(use_cases: &UseCases, yes: bool) -> anyhow::Result<()> {
    anyhow::ensure!(yes, "refusing to clear both host lists without --yes");

    use_cases.clear_host_lists.execute().await?;
    println!("Host lists cleared");
    Ok(())
}

fn format_list(hosts: &[String]) -> String {
    if hosts.is_empty() {
        "(none)".to_string()
    } else {
        hosts.join(", ")
    }
}
