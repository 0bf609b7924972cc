use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LoggingConfig, ResolvedOutputs};

const EVENTS_FILE: &str = "events.jsonl";

/// Keeps the background log writer alive; dropping it flushes pending events.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub events_path: PathBuf,
}

/// Where the event log for a run lands: beside the summary table.
pub fn events_path(outputs: &ResolvedOutputs) -> PathBuf {
    outputs
        .summary_md
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EVENTS_FILE)
}

/// Rules-engine and harness events at `level`; dependencies only at warn.
pub fn filter_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    format!("warn,kaiser_core={level},kaiser_bench={level}")
}

/// Installs a JSON subscriber for the rules-engine events of a run, or does
/// nothing when structured logging is disabled.
///
/// Each line carries the innermost open span, so events raised while a
/// match is being played are tagged with its index and seed. `RUST_LOG`
/// replaces the configured filter when set.
pub fn init_logging(
    logging: &LoggingConfig,
    outputs: &ResolvedOutputs,
) -> Result<Option<LoggingGuard>> {
    if !logging.enable_structured {
        return Ok(None);
    }

    let events_path = events_path(outputs);
    if let Some(dir) = events_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating event log directory at {}", dir.display()))?;
    }
    let file = File::create(&events_path)
        .with_context(|| format!("creating event log at {}", events_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let level = logging.level().unwrap_or(Level::INFO);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_writer(writer)
        .finish();

    // A subscriber may already be installed when running under tests.
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(LoggingGuard {
        _guard: guard,
        events_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::{events_path, filter_directives, init_logging};
    use crate::config::{LoggingConfig, ResolvedOutputs};
    use std::path::PathBuf;
    use tracing::Level;

    fn outputs(summary: &str) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: PathBuf::from("out/hands.jsonl"),
            summary_md: PathBuf::from(summary),
        }
    }

    #[test]
    fn event_log_sits_beside_the_summary() {
        assert_eq!(
            events_path(&outputs("bench/out/demo/summary.md")),
            PathBuf::from("bench/out/demo/events.jsonl")
        );
        assert_eq!(
            events_path(&outputs("summary.md")),
            PathBuf::from("./events.jsonl")
        );
    }

    #[test]
    fn directives_scope_the_level_to_workspace_crates() {
        assert_eq!(
            filter_directives(Level::DEBUG),
            "warn,kaiser_core=debug,kaiser_bench=debug"
        );
    }

    #[test]
    fn disabled_logging_installs_nothing() {
        let guard = init_logging(
            &LoggingConfig::default(),
            &outputs("does/not/exist/summary.md"),
        )
        .unwrap();
        assert!(guard.is_none());
        assert!(!PathBuf::from("does/not/exist").exists());
    }
}
