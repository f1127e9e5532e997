use std::path::Path;

use crate::di::UseCases;

pub async fn export(use_cases: &UseCases, output: Option<&Path>) -> anyhow::Result<()> {
    let json = use_cases.export_settings.execute().await?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &json).await?;
            println!("Settings exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub async fn import(use_cases: &UseCases, file: &Path) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(file).await?;
    let change = use_cases.import_settings.execute(&text).await?;

    if change.is_empty() {
        println!("Nothing to import: settings already match");
    } else {
        println!("Imported {} setting(s)", change.keys.len());
    }
    Ok(())
}
