//! Headless bot entry point.
//!
//! Runs the brain against the simulated framework for a fixed-length demo
//! match and reports how it went.
mod demo;

use std::sync::Arc;

use anyhow::Result;
use bot_api::{BotEvent, BotFramework, SimulatedBot};
use ctf_runtime::{BotConfig, configure_bot};
use demo::DemoConfig;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _log_guard = setup_logging()?;

    let config = BotConfig::from_env();
    let demo = DemoConfig::from_env();
    info!(
        "Starting demo match for {} ({}s)",
        demo.username,
        demo.duration.as_secs()
    );

    let bot = Arc::new(SimulatedBot::new(demo::arena(&demo.username)));
    let framework: Arc<dyn BotFramework> = bot.clone();
    let controller = configure_bot(framework, config).await?;

    let (tx, rx) = mpsc::channel(16);
    let driver = tokio::spawn(controller.drive(rx));

    tx.send(BotEvent::MatchStarted {
        info: bot.match_info(),
    })
    .await?;
    tx.send(BotEvent::Spawn).await?;

    let deadline = Instant::now() + demo.duration;
    let mut ticker = tokio::time::interval(demo.step_interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if Instant::now() >= deadline {
                    break;
                }
                bot.advance(demo.step);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, ending the match early");
                break;
            }
        }
    }

    tx.send(BotEvent::MatchEnded {
        info: demo::final_info(&bot),
    })
    .await?;
    drop(tx);

    match driver.await?? {
        Some(exit) => info!(
            "Loop generation {} stopped after {} iterations ({:?})",
            exit.generation, exit.iterations, exit.reason
        ),
        None => info!("No loop was running"),
    }
    info!("Captured the flag {} times", bot.world().captures);

    Ok(())
}

/// Setup logging to stderr, plus a log file when `CTF_LOG_DIR` is set.
fn setup_logging() -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match std::env::var_os("CTF_LOG_DIR") {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(&dir, "ctf-bot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
