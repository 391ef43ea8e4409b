use anyhow::{bail, Context, Result};

use crate::evaluation::templates::{find_template, DEFAULT_TEMPLATE_ID};
use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// Template used when a request does not name one.
    pub default_template: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_template = resolve_default_template(std::env::var("DEFAULT_TEMPLATE").ok())?;

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            default_template,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Falls back to `DEFAULT_TEMPLATE_ID`; rejects ids missing from the registry.
fn resolve_default_template(configured: Option<String>) -> Result<String> {
    let id = configured.unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string());
    if find_template(&id).is_none() {
        bail!("DEFAULT_TEMPLATE '{id}' does not name a known template");
    }
    Ok(id)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_falls_back_when_unset() {
        assert_eq!(resolve_default_template(None).unwrap(), DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn test_default_template_accepts_known_id() {
        assert_eq!(
            resolve_default_template(Some("eeat_rubric".to_string())).unwrap(),
            "eeat_rubric"
        );
    }

    #[test]
    fn test_default_template_rejects_unknown_id() {
        let err = resolve_default_template(Some("eeat_bogus".to_string())).unwrap_err();
        assert!(err.to_string().contains("'eeat_bogus' does not name a known template"));
    }

    #[test]
    fn test_require_env_names_missing_variable() {
        let err = require_env("EEAT_TEST_VARIABLE_THAT_IS_NEVER_SET").unwrap_err();
        assert!(err
            .to_string()
            .contains("'EEAT_TEST_VARIABLE_THAT_IS_NEVER_SET' is not set"));
    }
}
