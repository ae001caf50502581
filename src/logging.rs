/// Installs the process logger. `RUST_LOG` wins over the level derived from `debug`;
/// HTTP client internals stay at `warn` either way.
pub fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = format!("{level},reqwest=warn,hyper=warn,hyper_util=warn,h2=warn");

    let _ = env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(filter))
        .format_timestamp_secs()
        .try_init();
}
