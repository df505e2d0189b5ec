use anyhow::{anyhow, Result};
use std::path::Path;

use crate::config::CopydeskConfig;

use super::Command;

const CONFIG_PATH: &str = "copydesk.toml";

pub struct InitCommand {
    pub force: bool,
}

impl Command for InitCommand {
    async fn execute(&self) -> Result<()> {
        if Path::new(CONFIG_PATH).exists() && !self.force {
            return Err(anyhow!(
                "{CONFIG_PATH} already exists; use --force to overwrite"
            ));
        }

        CopydeskConfig::default().save_to_file(CONFIG_PATH)?;
        println!("wrote {CONFIG_PATH}");
        println!("edit service.base_url to point at your editorial data service");
        Ok(())
    }
}
