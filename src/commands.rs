use crate::cli::{ConfigCommand, PageArgs};
use crate::config::{ApiConfigUpdate, ConfigStore, Settings, SettingsFile};
use crate::error::{CommandCenterError, Result};
use crate::pages::{watch_page, Page, PageKind, WatchOptions};
use crate::ui::{mask_secret, print_frame, print_page, Renderer};
use colored::*;
use std::time::Duration;

pub async fn run_page(
    kind: PageKind,
    page_args: &PageArgs,
    store: &ConfigStore,
    settings: &Settings,
) -> Result<()> {
    let renderer = if page_args.raw {
        Renderer::plain()
    } else {
        Renderer::styled()
    };
    let mut page = Page::new(kind);

    if !page_args.watch {
        page.refresh(store, settings.timeout, settings.verbose).await;
        print_page(&page.render(&renderer));
        return Ok(());
    }

    let options = WatchOptions {
        interval: Duration::from_secs(page_args.interval.max(1)),
        timeout_secs: settings.timeout,
        verbose: settings.verbose,
        ..WatchOptions::default()
    };
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    watch_page(
        &mut page,
        store,
        &options,
        |page| print_frame(&page.render(&renderer), chrono::Local::now(), !page_args.raw),
        shutdown,
    )
    .await;
    Ok(())
}

pub fn run_config(command: ConfigCommand, store: &ConfigStore) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            show_config(store);
            Ok(())
        }
        ConfigCommand::Set {
            api_base,
            api_key,
            client_id,
        } => {
            let update = ApiConfigUpdate {
                api_key,
                client_id,
                api_base,
            };
            if update.is_empty() {
                return Err(CommandCenterError::ConfigError(
                    "nothing to set; pass --api-base, --api-key or --client-id".to_string(),
                ));
            }
            store.update(update);
            println!("{}", "Settings saved.".green());
            show_config(store);
            Ok(())
        }
        ConfigCommand::Clear => {
            store.update(ApiConfigUpdate::clear());
            println!("{}", "Settings cleared.".green());
            Ok(())
        }
        ConfigCommand::Init { path, force } => {
            let path = path
                .or_else(|| SettingsFile::user_config_dir().map(|dir| dir.join("command-center.yaml")))
                .ok_or_else(|| {
                    CommandCenterError::ConfigError("could not determine home directory".to_string())
                })?;
            SettingsFile::write_example(&path, force)?;
            println!(
                "{}",
                format!("Wrote example settings to {}", path.display()).green()
            );
            Ok(())
        }
    }
}

fn show_config(store: &ConfigStore) {
    let config = store.get();
    let or_unset = |value: String| {
        if value.is_empty() {
            "(not set)".dimmed().to_string()
        } else {
            value
        }
    };
    let resolved = store.resolved_api_base();

    println!("{:<16}{}", "API base:", or_unset(config.api_base));
    println!("{:<16}{}", "API key:", or_unset(mask_secret(&config.api_key)));
    println!("{:<16}{}", "Client ID:", or_unset(config.client_id));
    println!("{:<16}{}", "Resolved base:", or_unset(resolved));
}
