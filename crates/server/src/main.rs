//! Headless simulation server.
//!
//! Loads a scenario from the content directory, plays its scripted orders
//! and logs every published event.
mod config;

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use unit_content::ContentFactory;
use unit_core::EntityId;
use unit_runtime::{Event, FactionRules, Runtime, RuntimeConfig, RuntimeHandle, Topic};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::from_env();
    info!(?config, "server starting");

    let factory = ContentFactory::new(&config.data_dir);
    let game_config = factory.load_config().context("loading config.toml")?;
    let spells = factory.load_spells().context("loading spells.ron")?;
    let scenario = factory
        .load_scenario(&config.scenario)
        .with_context(|| format!("loading scenario `{}`", config.scenario))?;

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config,
            role: config.role,
            ..RuntimeConfig::default()
        })
        .scenario(&scenario, spells, FactionRules::new())?
        .build()
        .await?;

    let logger = tokio::spawn(log_events(runtime.handle()));

    let handle = runtime.handle();
    let mut now = 0u64;
    for scripted in scenario.timeline() {
        if scripted.at >= config.ticks {
            break;
        }
        if scripted.at > now {
            advance(&runtime, &config, scripted.at - now).await?;
            now = scripted.at;
        }
        if let Err(error) = handle.order(EntityId(scripted.unit), scripted.order).await {
            warn!(unit = scripted.unit, %error, "scripted order rejected");
        }
    }
    advance(&runtime, &config, config.ticks - now).await?;

    let world = handle.query_world().await?;
    for unit in world.units() {
        info!(
            unit = %unit.id,
            position = %unit.position,
            health = unit.stats.health,
            mana = unit.stats.mana,
            alive = unit.alive,
            "final"
        );
    }

    drop(handle);
    runtime.shutdown().await?;
    logger.await.context("event logger panicked")?;
    Ok(())
}

async fn advance(runtime: &Runtime, config: &ServerConfig, ticks: u64) -> Result<()> {
    if config.unpaced {
        let ticks = u32::try_from(ticks).context("tick count too large")?;
        runtime.handle().step(ticks).await?;
    } else {
        runtime.run_ticks(ticks).await?;
    }
    Ok(())
}

/// Logs state and notification events until the runtime shuts down.
async fn log_events(handle: RuntimeHandle) {
    let mut states = handle.subscribe(Topic::State);
    let mut notifications = handle.subscribe(Topic::Notification);
    drop(handle);

    loop {
        let received = tokio::select! {
            event = states.recv() => event,
            event = notifications.recv() => event,
        };
        match received {
            Ok(Event::State(event)) => info!(?event, "state"),
            Ok(Event::Notification(event)) => debug!(tick = %event.tick, notification = ?event.notification, "notification"),
            Ok(Event::Tick(_)) => {}
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "event logger lagged"),
            Err(RecvError::Closed) => break,
        }
    }
}
