use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "copydesk")]
#[command(about = "Operator console for the editorial content service")]
#[command(long_about = "Copydesk is a terminal console over the editorial data service: \
                       browse, filter, sort and search articles, drive their publication \
                       workflow, and watch the crawler worker roster. List views are \
                       addressed by a shareable query descriptor, so any view can be \
                       reproduced exactly from its printed location.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the article list with filters, sort, search and paging
    List {
        /// Status filter, repeatable (recycle, draft, publish, pinned)
        #[arg(long = "status", help = "Only show articles with this status (repeatable)")]
        status: Vec<String>,
        /// Sort specification, e.g. updated_at:descend or title
        #[arg(long, help = "Sort as field[:order]; order is ascend or descend, ascend by default")]
        sort: Option<String>,
        /// Free-text search
        #[arg(long, help = "Free-text search over articles")]
        search: Option<String>,
        /// Page number (1-based)
        #[arg(long, default_value = "1", help = "Page to show, starting at 1")]
        page: u32,
        /// Items per page
        #[arg(long, help = "Page size; the service default applies when omitted")]
        page_size: Option<u32>,
        /// Resume a view from a previously printed location descriptor
        #[arg(long, help = "Location descriptor to reopen, overrides the other list flags")]
        location: Option<String>,
    },
    /// Apply a workflow status transition to one article
    SetStatus {
        /// Article id
        id: u64,
        /// Current status of the article (as listed)
        current: String,
        /// Target status to transition to
        target: String,
    },
    /// Destructively remove an article (not a workflow transition)
    Delete {
        /// Article id
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long, help = "Do not ask for confirmation")]
        yes: bool,
    },
    /// Show the crawler worker roster and which workers are running
    Workers,
    /// Write a default copydesk.toml into the working directory
    Init {
        /// Overwrite an existing copydesk.toml
        #[arg(long, help = "Overwrite copydesk.toml if it already exists")]
        force: bool,
    },
}
