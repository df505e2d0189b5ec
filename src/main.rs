use anyhow::Result;
use clap::Parser;

use copydesk::cli::commands::{self, Command};
use copydesk::cli::{Cli, Commands};
use copydesk::config::CopydeskConfig;
use copydesk::telemetry::init_telemetry;

fn main() -> Result<()> {
    let _ = CopydeskConfig::load_env_file();
    let cli = Cli::parse();

    let config = CopydeskConfig::load()?;
    init_telemetry(&config.observability)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        match cli.command {
            // Default behavior: no subcommand - explain how to use the console
            None => commands::show_how_to_use().await,
            Some(Commands::List {
                status,
                sort,
                search,
                page,
                page_size,
                location,
            }) => {
                commands::list::ListCommand {
                    config,
                    status,
                    sort,
                    search,
                    page,
                    page_size,
                    location,
                }
                .execute()
                .await
            }
            Some(Commands::SetStatus { id, current, target }) => {
                commands::set_status::SetStatusCommand {
                    config,
                    id,
                    current,
                    target,
                }
                .execute()
                .await
            }
            Some(Commands::Delete { id, yes }) => {
                commands::delete::DeleteCommand { config, id, yes }
                    .execute()
                    .await
            }
            Some(Commands::Workers) => {
                commands::workers::WorkersCommand { config }.execute().await
            }
            Some(Commands::Init { force }) => {
                commands::init::InitCommand { force }.execute().await
            }
        }
    })
}
