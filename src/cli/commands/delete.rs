use anyhow::{anyhow, Result};
use std::io::{self, BufRead, Write};

use crate::config::CopydeskConfig;
use crate::service::{ArticleService, HttpArticleService};

use super::Command;

pub struct DeleteCommand {
    pub config: CopydeskConfig,
    pub id: u64,
    pub yes: bool,
}

impl Command for DeleteCommand {
    async fn execute(&self) -> Result<()> {
        if !self.yes && !confirm(self.id)? {
            println!("aborted");
            return Ok(());
        }

        let service = HttpArticleService::new(&self.config.service)?;
        service.delete_article(self.id).await?;
        println!("article {} deleted", self.id);
        Ok(())
    }
}

fn confirm(id: u64) -> Result<bool> {
    print!("delete article {id}? This is not a workflow move and cannot be undone [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| anyhow!("failed to read confirmation: {e}"))?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
