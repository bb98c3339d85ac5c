use std::sync::Arc;

use common::capabilities::{Notifier, PermissionProvider};
use common::config::Config;
use common::logger;
use dotenvy::dotenv;
use offline_shell::{CacheStorage, HttpAssetFetcher, OfflineShell};
use signal_feed::SignalsClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use watcher::{PermissionGate, SignalWatcher};

use crate::commands::Command;
use crate::services::console_notifier::ConsoleNotifier;
use crate::services::notification_center::NotificationCenter;
use crate::services::telegram_service::TelegramNotifier;
use crate::services::terminal::{FilePermissions, TerminalDialog};

mod commands;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger();

    let command = Command::parse(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    debug!("Starting {:?} against {}", command, config.base_url);

    match command {
        Command::Watch => watch(&config).await,
        Command::EnableNotifications => {
            gate(&config).request_permission().await;
            Ok(())
        }
        Command::TestNotification => {
            // The gate already told the user what went wrong.
            if let Err(e) = gate(&config).send_test_notification().await {
                debug!("Test notification not sent: {}", e);
            }
            Ok(())
        }
        Command::Offline => offline(&config).await,
    }
}

fn notification_center(config: &Config) -> NotificationCenter {
    let mut center = NotificationCenter::new();
    if config.console_notifications {
        center = center.with_channel(Arc::new(ConsoleNotifier));
    }
    if let Some(ref telegram) = config.telegram {
        center = center.with_channel(Arc::new(TelegramNotifier::new(telegram)));
    }

    if center.is_empty() {
        warn!(
            "No notification channel configured \
             (enable CONSOLE_NOTIFICATIONS or set TELEGRAM_BOT_TOKEN)"
        );
    } else {
        info!("Notification channels: {}", center.channel_names().join(", "));
    }
    center
}

fn permissions(config: &Config, center: &NotificationCenter) -> Arc<dyn PermissionProvider> {
    Arc::new(FilePermissions::new(
        &config.permission_file,
        !center.is_empty(),
        BufReader::new(tokio::io::stdin()),
    ))
}

fn gate(config: &Config) -> PermissionGate {
    let center = notification_center(config);
    let permissions = permissions(config, &center);
    let notifier: Arc<dyn Notifier> = Arc::new(center);
    PermissionGate::new(permissions, notifier, Arc::new(TerminalDialog), &config.icon)
}

async fn watch(config: &Config) -> anyhow::Result<()> {
    let center = notification_center(config);
    let permissions = permissions(config, &center);
    let source = SignalsClient::new(&config.base_url, config.http_timeout)?;
    info!("Polling {}", source.endpoint());

    let watcher = SignalWatcher::new(Arc::new(source), Arc::new(center), permissions, &config.icon)
        .with_interval(config.poll_interval);

    tokio::select! {
        _ = watcher.start_polling() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received, stopping live signal polling.");
        }
    }
    Ok(())
}

async fn offline(config: &Config) -> anyhow::Result<()> {
    let network = HttpAssetFetcher::new(config.base_url.clone(), config.http_timeout)?;
    let storage = Arc::new(CacheStorage::new());
    let shell = OfflineShell::new(storage, Arc::new(network), &config.cache_name);
    shell.install().await?;

    println!("Offline shell ready. Enter one path per line, Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        match shell.fetch(path).await {
            Ok(fetched) => println!(
                "{} {} {} bytes ({:?})",
                fetched.asset.status,
                path,
                fetched.asset.body.len(),
                fetched.source
            ),
            Err(e) => warn!("Could not serve {}: {}", path, e),
        }
    }
    Ok(())
}
