use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Filter built from `RUST_LOG`-style directives, falling back to `info`
/// when none are given.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Install the global fmt subscriber, reading directives from `RUST_LOG`
pub fn init() {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .init();
}
