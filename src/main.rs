use clap::Parser;
use colored::*;
use std::process;
use std::sync::Arc;

use command_center::cli::{Args, Command};
use command_center::commands::{run_config, run_page};
use command_center::config::{ApiConfigUpdate, ConfigStore, Settings};
use command_center::error::Result;
use command_center::pages::PageKind;
use command_center::storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let settings = Settings::from_env_and_args(&args);

    if let Err(e) = run(args, settings).await {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

async fn run(args: Args, settings: Settings) -> Result<()> {
    let storage = open_storage(&settings);
    let store = ConfigStore::new(storage, settings.default_api_base.clone());
    store.hydrate();

    let (kind, page_args) = match args.command {
        Command::Config(command) => return run_config(command, &store),
        Command::Dashboard(page_args) => (PageKind::Dashboard, page_args),
        Command::Pipeline(page_args) => (PageKind::Pipeline, page_args),
        Command::Agents(page_args) => (PageKind::Agents, page_args),
        Command::Approvals(page_args) => (PageKind::Approvals, page_args),
        Command::Analytics(page_args) => (PageKind::Analytics, page_args),
    };

    // --base applies to this run only, so it goes to an unsaved copy
    let store = match &settings.base_override {
        Some(base) => {
            let overlay = store.detached();
            overlay.update(ApiConfigUpdate::api_base(base.clone()));
            overlay
        }
        None => store,
    };

    run_page(kind, &page_args, &store, &settings).await
}

fn open_storage(settings: &Settings) -> Arc<dyn KeyValueStore> {
    match settings
        .storage_dir
        .clone()
        .or_else(FileKeyValueStore::default_dir)
    {
        Some(dir) => {
            let store = FileKeyValueStore::new(dir, settings.verbose);
            if settings.verbose {
                eprintln!(
                    "{}",
                    format!("[CC] Storage: {}", store.path().display()).dimmed()
                );
            }
            Arc::new(store)
        }
        None => {
            eprintln!(
                "{}",
                "Warning: no data directory found; settings will not be saved".yellow()
            );
            Arc::new(MemoryKeyValueStore::new())
        }
    }
}
