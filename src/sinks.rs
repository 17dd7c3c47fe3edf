use crate::config::Config;
use crate::errors::AppError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Client for the hosting platform's static-form intake endpoint.
///
/// Delivers the Lead Record as URL-encoded form data, the way a plain HTML
/// form POST would, including the `form-name` discriminator and the honeypot
/// field.
#[derive(Clone)]
pub struct FormEndpointService {
    client: Client,
    endpoint_url: String,
}

impl FormEndpointService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let endpoint_url = reqwest::Url::parse(&config.form_endpoint_url)
            .map_err(|e| AppError::Internal(format!("Invalid form endpoint URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.submit_timeout_secs))
            .build()
            .map_err(|e| {
                AppError::Internal(format!("Failed to create form endpoint client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.to_string(),
        })
    }

    /// Delivers one payload. A non-success status is an error; the caller
    /// decides whether that error is surfaced (the submission orchestrator
    /// deliberately does not).
    pub async fn deliver<T: Serialize>(&self, payload: &T) -> Result<(), AppError> {
        tracing::debug!("Delivering form payload to {}", self.endpoint_url);

        let response = self
            .client
            .post(&self.endpoint_url)
            .form(payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Form endpoint request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApi(format!(
                "Form endpoint returned {}: {}",
                status, error_text
            )));
        }

        tracing::debug!("Form endpoint accepted payload");
        Ok(())
    }
}

/// Client for the workflow-automation webhook sink.
///
/// Delivers the same logical Lead Record as a JSON body to a fixed catch URL.
#[derive(Clone)]
pub struct WebhookService {
    client: Client,
    webhook_url: String,
}

impl WebhookService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let webhook_url = reqwest::Url::parse(&config.webhook_url)
            .map_err(|e| AppError::Internal(format!("Invalid webhook URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.submit_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create webhook client: {}", e)))?;

        Ok(Self {
            client,
            webhook_url: webhook_url.to_string(),
        })
    }

    pub async fn deliver<T: Serialize>(&self, payload: &T) -> Result<(), AppError> {
        tracing::debug!("Delivering webhook payload to {}", self.webhook_url);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApi(format!(
                "Webhook returned {}: {}",
                status, error_text
            )));
        }

        tracing::debug!("Webhook accepted payload");
        Ok(())
    }
}
