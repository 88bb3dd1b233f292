use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs the global subscriber: stderr plus a daily file in `log_dir`
/// when one is given. Call once near the start of `main`.
pub fn init_tracing(default_level: &str, log_dir: Option<&Path>) {
    let filter = || {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter());

    let file_layer = log_dir
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, "folio.log"))
                .with_ansi(false)
                .with_filter(filter())
        });

    if tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
