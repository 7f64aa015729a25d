/// Installs a `tracing` subscriber for hosts that do not bring their own.
///
/// The filter is read from `RUST_LOG`; without it, only errors are shown
/// except for the reveal crates, which log at `info`. Calling this more than
/// once is a no-op.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,reveal_ui=info,reveal_components=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
