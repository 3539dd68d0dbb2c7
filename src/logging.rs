use tracing_subscriber::EnvFilter;

/// Initialize tracing and bridge `log` to `tracing`.
/// Calling this multiple times is safe (subsequent attempts are ignored where possible).
pub fn init_tracing(enable_debug: bool) {
    // The UI layer logs through `log`; route those records into the subscriber
    let _ = tracing_log::LogTracer::init();

    let env_filter = if enable_debug {
        EnvFilter::new("rcarousel=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(false)
        .try_init()
        .ok();
}

/// True when `RCAROUSEL_DEBUG` is set to something other than `0`.
pub fn debug_requested() -> bool {
    std::env::var("RCAROUSEL_DEBUG")
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}
