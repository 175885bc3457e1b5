//! Structured logging setup.
//!
//! The library itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init_logging`] once at startup.

use crate::config::LoggingConfig;
use crate::error::{CodecError, Result};
use tracing::info;

/// Install a global `tracing-subscriber` formatter built from `config`.
///
/// # Errors
/// Returns [`CodecError::ConfigError`] if the configuration is invalid or a
/// global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(CodecError::ConfigError(errors.join("; ")));
    }

    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(true)
        .with_ansi(!config.json_format);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| CodecError::ConfigError(format!("Failed to install logger: {e}")))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected_before_install() {
        let config = LoggingConfig {
            app_name: String::new(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(CodecError::ConfigError(_))
        ));
    }
}
