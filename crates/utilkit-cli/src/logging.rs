use tracing_subscriber::EnvFilter;

/// Targets that get the `-v` level; everything else stays at the default.
const CRATE_TARGETS: &[&str] = &["utilkit", "utilkit_cli"];

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG`, when set, replaces the filter
/// derived from `-v`, so stdout only ever carries command output.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
