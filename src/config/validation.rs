//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Upper bound on concurrent download workers.
const MAX_WORKERS: usize = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_workers(config.download.workers)?;
    validate_range(
        "download.min_delay_ms",
        config.download.min_delay_ms,
        config.download.max_delay_ms,
    )?;

    if config.download.directory.as_os_str().is_empty() {
        return Err(Error::MissingConfig("download.directory".to_string()));
    }

    if config.harvest.scroll_steps == 0 {
        return Err(Error::ConfigValidation {
            field: "harvest.scroll_steps".to_string(),
            message: "At least one scroll step is required".to_string(),
        });
    }
    validate_range(
        "harvest.scroll_min_px",
        config.harvest.scroll_min_px,
        config.harvest.scroll_max_px,
    )?;
    validate_range(
        "harvest.min_delay_ms",
        config.harvest.min_delay_ms,
        config.harvest.max_delay_ms,
    )?;
    validate_range(
        "harvest.settle_min_ms",
        config.harvest.settle_min_ms,
        config.harvest.settle_max_ms,
    )?;

    validate_endpoint(&config.resolver.endpoint)?;

    if config.resolver.user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("resolver.user_agent".to_string()));
    }

    Ok(())
}

/// Validate the worker count.
pub fn validate_workers(workers: usize) -> Result<()> {
    if workers == 0 || workers > MAX_WORKERS {
        return Err(Error::ConfigValidation {
            field: "download.workers".to_string(),
            message: format!(
                "Worker count must be between 1 and {} (got {})",
                MAX_WORKERS, workers
            ),
        });
    }
    Ok(())
}

/// Validate that a lower bound does not exceed its upper bound.
fn validate_range<T: PartialOrd + std::fmt::Display>(field: &str, min: T, max: T) -> Result<()> {
    if min > max {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Lower bound {} exceeds upper bound {}", min, max),
        });
    }
    Ok(())
}

/// Validate the resolver endpoint.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = url::Url::parse(endpoint).map_err(|e| Error::ConfigValidation {
        field: "resolver.endpoint".to_string(),
        message: format!("'{}' is not a valid URL: {}", endpoint, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "resolver.endpoint".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_workers() {
        assert!(validate_workers(0).is_err());
        assert!(validate_workers(65).is_err());
        assert!(validate_workers(1).is_ok());
    }

    #[test]
    fn test_inverted_range() {
        let mut config = Config::default();
        config.harvest.scroll_min_px = 4000;
        config.harvest.scroll_max_px = 100;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { ref field, .. } if field == "harvest.scroll_min_px"));
    }

    #[test]
    fn test_zero_scroll_steps() {
        let mut config = Config::default();
        config.harvest.scroll_steps = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(validate_endpoint("not a url").is_err());
        assert!(validate_endpoint("ftp://example.com/api").is_err());
        assert!(validate_endpoint("https://www.tikwm.com/api/").is_ok());
    }
}
