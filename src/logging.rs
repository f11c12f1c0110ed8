use log::{info, LevelFilter};
use std::env;

pub const PALETTE_NAMESPACE: &str = "qstyles::palette";
pub const THEME_NAMESPACE: &str = "qstyles::theme";
pub const SINK_NAMESPACE: &str = "qstyles::sink";

pub fn init_logging() {
    // RUST_LOG takes precedence over the info default
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "info");
        }
    }

    // try_init: tests and embedders may already have installed a logger
    let result = env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp_millis()
        .format_module_path(true)
        .format_target(true)
        .filter(Some(PALETTE_NAMESPACE), LevelFilter::Debug)
        .filter(Some(THEME_NAMESPACE), LevelFilter::Debug)
        .filter(Some(SINK_NAMESPACE), LevelFilter::Debug)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized");
    }
}

// Convenience macros for each namespace
#[macro_export]
macro_rules! palette_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::PALETTE_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! theme_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::THEME_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! sink_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::SINK_NAMESPACE, $($arg)*)
    };
}
