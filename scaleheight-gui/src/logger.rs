use scaleheight::dir::SignupDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

pub const LOG_FILE_NAME: &str = "scaleheight-signup.log";

/// Targets too chatty to be of any help while debugging the signup.
const NOISY_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "wgpu_core",
    "wgpu_hal",
    "gfx_backend_vulkan",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

fn is_noisy(target: &str) -> bool {
    NOISY_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &SignupDirectory,
) -> Result<(), Box<dyn Error>> {
    let log_path = datadir.path().join(LOG_FILE_NAME);

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Applies to *both* layers.
                .with_filter(filter::filter_fn(|metadata| !is_noisy(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

/// The configured level, unless overridden by the environment.
pub fn effective_level(configured: log::LevelFilter, env: Option<LevelFilter>) -> LevelFilter {
    env.unwrap_or(match configured {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noisy_targets() {
        assert!(is_noisy("wgpu_core::device"));
        assert!(is_noisy("reqwest::connect"));
        assert!(!is_noisy("scaleheight::flow"));
        assert!(!is_noisy("scaleheight_gui::app"));
    }

    #[test]
    fn level_override() {
        assert_eq!(
            effective_level(log::LevelFilter::Warn, None),
            LevelFilter::WARN
        );
        assert_eq!(
            effective_level(log::LevelFilter::Warn, Some(LevelFilter::TRACE)),
            LevelFilter::TRACE
        );
    }
}
