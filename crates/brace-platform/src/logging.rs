/// Installs the process logger. `RUST_LOG` wins over `default_filter`.
/// Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging(default_filter: &str) {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let level = default_filter.parse::<log::Level>().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
}
