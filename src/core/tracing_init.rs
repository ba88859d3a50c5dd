use crate::core::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Target used by utility code for suppressible debug output
pub const DIAGNOSTICS_TARGET: &str = "diagnostics";

/// Build the event filter.
///
/// `RUST_LOG` style directives replace the configured level when given.
/// The `diagnostics` target is pinned to `debug` or `off` from config unless
/// the directives already mention it.
pub fn build_filter(config: &LoggingConfig, directives: Option<&str>) -> Result<EnvFilter> {
    let base = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(config.level.as_str());

    let directives = if base.contains(DIAGNOSTICS_TARGET) {
        base.to_string()
    } else {
        let level = if config.diagnostics { "debug" } else { "off" };
        format!("{},{}={}", base, DIAGNOSTICS_TARGET, level)
    };

    EnvFilter::try_new(&directives)
        .context(format!("Invalid log filter '{}'", directives))
}

/// Install the global subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, directives.as_deref())?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.console || config.format == "console" {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    };

    installed.context("Failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str, diagnostics: bool) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            diagnostics,
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_diagnostics_off_by_default() {
        let filter = build_filter(&logging("info", false), None).unwrap();
        assert!(filter.to_string().contains("diagnostics=off"));
    }

    #[test]
    fn test_diagnostics_enabled() {
        let filter = build_filter(&logging("warn", true), None).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("diagnostics=debug"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn test_directives_replace_level() {
        let filter = build_filter(&logging("info", false), Some("trace")).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("trace"));
        assert!(rendered.contains("diagnostics=off"));
    }

    #[test]
    fn test_directives_mentioning_diagnostics_kept() {
        let filter = build_filter(&logging("info", false), Some("info,diagnostics=trace")).unwrap();
        assert!(filter.to_string().contains("diagnostics=trace"));
    }

    #[test]
    fn test_blank_directives_fall_back_to_level() {
        let filter = build_filter(&logging("error", true), Some("  ")).unwrap();
        assert!(filter.to_string().contains("error"));
    }
}
