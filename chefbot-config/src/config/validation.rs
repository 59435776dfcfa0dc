//! Semantic validation for `Config`, run after every successful parse.

use super::config_struct::Config;
use crate::error::ConfigError;
use crate::types::ReplyStrategy;

impl Config {
    /// Check field values that serde cannot express.
    ///
    /// The query endpoint is only checked when the remote strategy is
    /// selected, so a simulated-only config may leave it unresolved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.panel_width > 0.0 && self.panel_height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "panel_width and panel_height must be positive (got {}x{})",
                self.panel_width, self.panel_height
            )));
        }

        if self.reply.max_response_bytes == 0 {
            return Err(ConfigError::Validation(
                "max_response_bytes must be greater than zero".to_string(),
            ));
        }

        if let Some(action) = self
            .quick_actions
            .iter()
            .find(|a| a.action.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "quick action '{}' has an empty action text",
                action.label
            )));
        }

        if self.reply.reply_strategy == ReplyStrategy::Remote {
            validate_endpoint(&self.reply.query_endpoint)?;
        }

        Ok(())
    }
}

/// Require an absolute `http` or `https` URL with a host.
pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(endpoint).map_err(|e| {
        ConfigError::Validation(format!("query_endpoint '{endpoint}' is not a valid URL: {e}"))
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ConfigError::Validation(format!(
                "query_endpoint scheme '{scheme}' is not supported; use http or https"
            )));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::Validation(format!(
            "query_endpoint '{endpoint}' has no host"
        )));
    }

    Ok(())
}
