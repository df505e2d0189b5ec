use anyhow::{anyhow, Result};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::CopydeskConfig;
use crate::controller::ListController;
use crate::query::{self, ListQuery, Sort, SortField, SortOrder};
use crate::service::HttpArticleService;
use crate::workflow::{legal_transitions, ArticleStatus};

use super::Command;

pub struct ListCommand {
    pub config: CopydeskConfig,
    pub status: Vec<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
    pub page: u32,
    pub page_size: Option<u32>,
    pub location: Option<String>,
}

impl ListCommand {
    fn build_query(&self) -> Result<ListQuery> {
        // A pasted location descriptor wins over individual flags, so an
        // operator can reopen exactly the view a colleague printed.
        if let Some(location) = &self.location {
            return Ok(query::decode(location));
        }

        let mut filters = BTreeSet::new();
        for token in &self.status {
            let status: ArticleStatus = token
                .parse()
                .map_err(|e| anyhow!("--status {token}: {e}"))?;
            filters.insert(status);
        }

        let sort = match &self.sort {
            Some(spec) => Some(parse_sort(spec)?),
            None => None,
        };

        let mut query = ListQuery::default()
            .with_filters(filters)
            .with_sort(sort)
            .with_page(self.page);
        query.page_size = self.page_size.or(self.config.list.default_page_size);
        if let Some(search) = &self.search {
            query = query.with_search(search);
        }
        Ok(query)
    }
}

/// Parse `field[:order]`; a bare field starts ascending, the same as a
/// first click on a column header.
fn parse_sort(spec: &str) -> Result<Sort> {
    match spec.split_once(':') {
        Some((field, order)) => {
            let field: SortField = field.parse().map_err(|e| anyhow!("--sort: {e}"))?;
            let order: SortOrder = order.parse().map_err(|e| anyhow!("--sort: {e}"))?;
            Ok(Sort::new(field, order))
        }
        None => {
            let field: SortField = spec.parse().map_err(|e| anyhow!("--sort: {e}"))?;
            Ok(Sort::ascending(field))
        }
    }
}

impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        let query = self.build_query()?;
        let service = Arc::new(HttpArticleService::new(&self.config.service)?);
        let mut controller = ListController::new(service);

        controller.open(&query);
        controller.run_until_idle().await;

        if let Some(error) = controller.last_error() {
            return Err(anyhow!("list fetch failed: {error}"));
        }

        render(&controller);
        Ok(())
    }
}

fn render(controller: &ListController) {
    let state = controller.state();
    let query = controller.query();

    println!(
        "{:<6} {:<40} {:<8} {:<12} {:<17} ACTIONS",
        "ID", "TITLE", "STATUS", "AUTHOR", "UPDATED"
    );
    for article in &state.items {
        let actions = legal_transitions(article.status)
            .iter()
            .map(|t| t.action.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<6} {:<40} {:<8} {:<12} {:<17} {}",
            article.id,
            truncate(&article.title, 40),
            article.status,
            truncate(&article.author, 12),
            article.updated_at.format("%Y-%m-%d %H:%M"),
            actions
        );
    }

    let page_size = query.page_size.unwrap_or(10).max(1) as u64;
    let pages = state.total_count.div_ceil(page_size).max(1);
    println!();
    println!(
        "page {} of {} - {} matching article(s)",
        query.page, pages, state.total_count
    );
    if let Some(location) = controller.locations().current() {
        println!("location: {location}");
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
