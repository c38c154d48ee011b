//! Logging setup and configuration

use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console plus hourly file output. Keep the returned guard alive until
/// exit or buffered file lines are lost.
pub fn setup_logging(output_dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::hourly(output_dir.as_ref().join("logs"), "arb-economics.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_level(true)
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(false)
                .with_level(true)
                .with_ansi(false)
                .compact()
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse()?)
        )
        .init();

    Ok(guard)
}

pub fn setup_output_directories(output_dir: impl AsRef<Path>) -> Result<()> {
    use std::fs;

    let root = output_dir.as_ref();
    fs::create_dir_all(root.join("logs"))?;
    fs::create_dir_all(root.join("simulations"))?;
    fs::create_dir_all(root.join("reports"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn guard_is_handed_back_to_the_caller() {
        let dir = std::env::temp_dir().join(format!("arb-economics-{}", uuid::Uuid::new_v4()));
        setup_output_directories(&dir).unwrap();
        assert!(dir.join("simulations").is_dir());
        assert!(dir.join("reports").is_dir());

        let guard: WorkerGuard = setup_logging(&dir).unwrap();
        tracing::info!("logging ready");
        drop(guard);
        assert!(dir.join("logs").is_dir());

        fs::remove_dir_all(&dir).unwrap();
    }
}
