use crate::utils::error::{CalcError, Result};
use reqwest::Client;
use std::time::Duration;

pub fn build_client(timeout_seconds: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!("tasa-calc/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// GETs `url` and returns the body. Non-2xx responses are errors.
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if !status.is_success() {
        return Err(CalcError::HttpStatusError {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}
