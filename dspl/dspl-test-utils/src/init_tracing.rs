use tracing_subscriber::{EnvFilter, FmtSubscriber, fmt::format::FmtSpan};

/// Install a test-writer subscriber filtered by `RUST_LOG`.
///
/// Span events are selected with `RUST_LOG_SPAN_EVENTS`, for example `new,close`.
pub fn init_test_tracing() {
    let span_events = match std::env::var("RUST_LOG_SPAN_EVENTS") {
        Ok(value) => value
            .to_ascii_lowercase()
            .split(',')
            .map(|filter| match filter.trim() {
                "new" => FmtSpan::NEW,
                "enter" => FmtSpan::ENTER,
                "exit" => FmtSpan::EXIT,
                "close" => FmtSpan::CLOSE,
                "active" => FmtSpan::ACTIVE,
                "full" => FmtSpan::FULL,
                _ => FmtSpan::NONE,
            })
            .fold(FmtSpan::NONE, |acc, filter| filter | acc),
        Err(_) => FmtSpan::NONE,
    };

    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(span_events)
        .with_test_writer()
        .try_init();
}
