use env_logger::{Builder, Env};

/// Install the process logger. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    init_logging_with_default("info");
}

pub fn init_logging_with_default(default_filter: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(false)
        .try_init();
}
