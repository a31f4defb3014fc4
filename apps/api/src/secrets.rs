//! LLM credential retrieval.
//!
//! The API key lives in AWS Secrets Manager under a fixed secret name and
//! region. Retrieval failure is not fatal: the service proceeds with an empty
//! key and subsequent model calls fail at the transport layer, where the
//! screening flow already degrades.

use anyhow::{anyhow, Context, Result};
use aws_config::Region;
use tracing::{info, warn};

use crate::config::Config;

/// Stored secret payload: `{"API_KEY": "..."}`.
#[derive(serde::Deserialize)]
struct ApiKeySecret {
    #[serde(rename = "API_KEY")]
    api_key: String,
}

/// Fetches the LLM API key from Secrets Manager.
pub async fn fetch_api_key(secret_name: &str, region: &str) -> Result<String> {
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;
    let client = aws_sdk_secretsmanager::Client::new(&aws_config);

    let value = client
        .get_secret_value()
        .secret_id(secret_name)
        .send()
        .await
        .with_context(|| format!("failed to read secret '{secret_name}'"))?;

    let secret = value
        .secret_string()
        .ok_or_else(|| anyhow!("secret '{secret_name}' has no string payload"))?;

    let parsed: ApiKeySecret =
        serde_json::from_str(secret).context("secret payload is not the expected JSON shape")?;

    Ok(parsed.api_key)
}

/// Resolves the LLM API key: env override first, then Secrets Manager.
pub async fn resolve_api_key(config: &Config) -> String {
    if let Some(key) = &config.anthropic_api_key {
        info!("Using LLM API key from environment");
        return key.clone();
    }

    match fetch_api_key(&config.secret_name, &config.aws_region).await {
        Ok(key) => {
            info!("LLM API key retrieved from Secrets Manager");
            key
        }
        Err(e) => {
            warn!("API key retrieval failed, continuing without a key: {e:#}");
            String::new()
        }
    }
}
