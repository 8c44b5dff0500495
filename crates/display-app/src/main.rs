use std::env;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::{info, warn};

use display_app::{detail, load_snapshot, DisplayConfig};
use meter_registry::{MeterRegistry, RegistryError};
use meter_view::summarize;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = parse_arg("config");
    let selected = parse_arg("meter");
    let config = DisplayConfig::load_with_path(config_path).context("load config failed")?;
    config.validate().context("config validation failed")?;

    let registry = load_snapshot(&config.snapshot_path).context("snapshot load failed")?;
    info!(path = %config.snapshot_path, meters = registry.len(), "snapshot loaded");
    render(&registry, &config, selected.as_deref())?;

    let Some(interval) = config.refresh_interval() else {
        return Ok(());
    };

    let (snapshot_tx, snapshot_rx) = watch::channel(registry);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let render_handle = tokio::spawn(render_task(
        snapshot_rx,
        shutdown_rx,
        config.clone(),
        selected,
    ));

    let shutdown_signal = tokio::signal::ctrl_c();
    tokio::pin!(shutdown_signal);
    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = &mut shutdown_signal => {
                info!("shutdown signal received");
                let _ = shutdown_tx.send(true);
                break;
            }
            _ = ticker.tick() => {
                match load_snapshot(&config.snapshot_path) {
                    Ok(next) => {
                        let (updated, reports) = snapshot_tx
                            .borrow()
                            .apply_update(next, config.reject_out_of_order);
                        let kept_previous = reports
                            .iter()
                            .filter(|report| report.kept_previous)
                            .count();
                        info!(meters = updated.len(), kept_previous, "snapshot refreshed");
                        let _ = snapshot_tx.send(updated);
                    }
                    Err(err) => {
                        warn!(error = %format!("{err:#}"), "snapshot reload failed");
                    }
                }
            }
        }
    }

    let _ = render_handle.await;
    Ok(())
}

async fn render_task(
    mut snapshots: watch::Receiver<MeterRegistry>,
    mut shutdown: watch::Receiver<bool>,
    config: DisplayConfig,
    selected: Option<String>,
) {
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let registry = snapshots.borrow_and_update().clone();
                if let Err(err) = render(&registry, &config, selected.as_deref()) {
                    warn!(error = %err, "render failed");
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    info!("render shutdown requested");
                    break;
                }
            }
        }
    }
}

fn render(registry: &MeterRegistry, config: &DisplayConfig, selected: Option<&str>) -> Result<()> {
    log_summaries(registry);
    match selected {
        Some(id) => print_detail(registry, id, config.history_limit),
        None => Ok(()),
    }
}

fn log_summaries(registry: &MeterRegistry) {
    for entity in registry.list() {
        let summary = summarize(entity);
        if summary.alert {
            warn!(
                id = %entity.id(),
                kind = %summary.variant_kind,
                value = %summary.primary_value,
                unit = %summary.unit,
                detail = %summary.secondary_text,
                "meter requires attention"
            );
        } else {
            info!(
                id = %entity.id(),
                kind = %summary.variant_kind,
                value = %summary.primary_value,
                unit = %summary.unit,
                detail = %summary.secondary_text,
                "meter summary"
            );
        }
    }
}

fn print_detail(registry: &MeterRegistry, id: &str, history_limit: Option<usize>) -> Result<()> {
    let detail = match detail::build(registry, id, history_limit) {
        Ok(detail) => detail,
        Err(RegistryError::NotFound(_)) => {
            warn!(id, "meter not found");
            return Ok(());
        }
        Err(err) => return Err(err).context("build meter detail"),
    };

    if detail.tariffs.is_none() {
        info!(id, "no tariff data");
    }
    let json = serde_json::to_string_pretty(&detail).context("serialize meter detail")?;
    println!("{json}");
    Ok(())
}

fn parse_arg(name: &str) -> Option<String> {
    let flag = format!("--{name}");
    let prefix = format!("--{name}=");
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == flag {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value.to_string());
        }
    }
    None
}
