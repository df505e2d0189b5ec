use anyhow::Result;

pub mod delete;
pub mod init;
pub mod list;
pub mod set_status;
pub mod workers;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

pub async fn show_how_to_use() -> Result<()> {
    println!("copydesk - editorial console");
    println!();
    println!("To get started:");
    println!("  copydesk list                      # Browse articles");
    println!("  copydesk list --status draft       # Only drafts");
    println!("  copydesk list --search dijkstra    # Free-text search");
    println!("  copydesk workers                   # Crawler roster");
    println!();
    println!("Workflow:");
    println!("  copydesk set-status 42 draft publish   # Publish a draft");
    println!("  copydesk set-status 42 pinned publish  # Un-pin");
    println!();
    println!("Setup:");
    println!("  copydesk init                      # Write a default copydesk.toml");
    Ok(())
}
