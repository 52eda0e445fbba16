//! Opt-in JSON trace log for host apps (`trace` feature).

/// Used when `RUST_LOG` is unset or unparsable.
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "pali_viewer=debug,pali_session=debug,pali_core=debug";

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "pali-viewer-trace.jsonl";

#[cfg(feature = "trace")]
fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER))
}

/// Install the file subscriber once per process. Later calls, and calls made
/// after the host installed its own global subscriber, are no-ops.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &std::path::Path) {
    use std::sync::Once;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // the viewer lives until the host exits; nothing is left to flush after that
        std::mem::forget(guard);

        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE);
        let installed = tracing_subscriber::registry()
            .with(env_filter())
            .with(layer)
            .try_init()
            .is_ok();
        tracing::debug!(installed, dir = %log_dir.display(), "trace log");
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
