use std::path::Path;

use umbra_domain::{CliOverrides, Config};

pub fn load_config(
    config_path: Option<&Path>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
