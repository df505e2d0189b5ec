use anyhow::Result;

use crate::config::CopydeskConfig;
use crate::service::HttpArticleService;
use crate::workers::{fetch_board, WorkerStatus};

use super::Command;

pub struct WorkersCommand {
    pub config: CopydeskConfig,
}

impl Command for WorkersCommand {
    async fn execute(&self) -> Result<()> {
        let service = HttpArticleService::new(&self.config.service)?;
        let board = fetch_board(&service, &self.config.workers).await?;

        println!("{:<10} {:<28} STATE", "WORKER", "NAME");
        let mut running = 0;
        for card in &board {
            if card.status == WorkerStatus::Running {
                running += 1;
            }
            println!("{:<10} {:<28} {}", card.key, card.label, card.status.as_str());
        }
        println!();
        println!("{running} of {} worker(s) running", board.len());
        Ok(())
    }
}
