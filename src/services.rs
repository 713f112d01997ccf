use crate::config::Config;
use crate::errors::AppError;
use crate::models::{normalize_code, AddressRecord};
use reqwest::Client;
use std::time::Duration;

/// Client for the ViaCEP address lookup service.
pub struct ViaCepService {
    client: Client,
    base_url: String,
}

impl ViaCepService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.viacep_base_url.clone(),
        })
    }

    /// Looks up the address for a postal code.
    ///
    /// The code is dash-stripped before the request. ViaCEP answers
    /// `{"erro": true}` with a 200 status for unknown codes; that body is
    /// reported as `NotFound`.
    pub async fn lookup(&self, raw_code: &str) -> Result<AddressRecord, AppError> {
        let code = normalize_code(raw_code);
        let url = format!("{}/ws/{}/json/", self.base_url, code);

        tracing::info!("Looking up CEP {} via ViaCEP", code);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("ViaCEP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("ViaCEP returned error {}: {}", status, error_text);
            return Err(AppError::NetworkError(format!(
                "ViaCEP returned status {}: {}",
                status, error_text
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            AppError::MalformedResponse(format!("Failed to parse ViaCEP response: {}", e))
        })?;

        // Older deployments answer `"erro": true`, newer ones `"erro": "true"`.
        let not_found = body
            .get("erro")
            .map(|v| v.as_bool().unwrap_or(false) || v.as_str() == Some("true"))
            .unwrap_or(false);
        if not_found {
            tracing::warn!("ViaCEP reported no address for CEP {}", code);
            return Err(AppError::NotFound(format!("No address for CEP {}", code)));
        }

        let record: AddressRecord = serde_json::from_value(body).map_err(|e| {
            AppError::MalformedResponse(format!("Unexpected ViaCEP payload: {}", e))
        })?;

        tracing::info!("✓ Resolved CEP {}", code);
        Ok(record)
    }
}
