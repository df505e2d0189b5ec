use anyhow::{anyhow, Result};

use crate::config::CopydeskConfig;
use crate::service::{ArticleService, HttpArticleService};
use crate::workflow::{legal_transitions, ArticleStatus};

use super::Command;

pub struct SetStatusCommand {
    pub config: CopydeskConfig,
    pub id: u64,
    pub current: String,
    pub target: String,
}

impl Command for SetStatusCommand {
    async fn execute(&self) -> Result<()> {
        let current: ArticleStatus = self
            .current
            .parse()
            .map_err(|e| anyhow!("current status: {e}"))?;
        let target: ArticleStatus = self
            .target
            .parse()
            .map_err(|e| anyhow!("target status: {e}"))?;

        // Validate against the transition table before touching the
        // network, so an illegal pair fails fast and offline.
        let legal = legal_transitions(current);
        let Some(transition) = legal.iter().find(|t| t.target == target) else {
            let options = legal
                .iter()
                .map(|t| format!("{} (-> {})", t.action.label(), t.target))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(anyhow!(
                "illegal transition {current} -> {target}; from {current} you can: {options}"
            ));
        };

        let service = HttpArticleService::new(&self.config.service)?;
        service.set_status(self.id, target).await?;

        println!(
            "article {} {}: {} -> {}",
            self.id,
            transition.action.label(),
            current,
            target
        );
        Ok(())
    }
}
