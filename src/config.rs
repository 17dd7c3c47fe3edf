use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub form_endpoint_url: String,
    pub webhook_url: String,
    pub static_dir: String,
    pub submit_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            form_endpoint_url: std::env::var("FORM_ENDPOINT_URL")
                .map_err(|_| anyhow::anyhow!("FORM_ENDPOINT_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("FORM_ENDPOINT_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("FORM_ENDPOINT_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            webhook_url: std::env::var("WEBHOOK_URL")
                .map_err(|_| anyhow::anyhow!("WEBHOOK_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("WEBHOOK_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("WEBHOOK_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            static_dir: std::env::var("STATIC_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "dist".to_string()),
            submit_timeout_secs: std::env::var("SUBMIT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SUBMIT_TIMEOUT_SECS must be a valid number"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Form endpoint URL: {}", config.form_endpoint_url);
        tracing::debug!("Webhook URL: {}", config.webhook_url);
        tracing::debug!("Static dir: {}", config.static_dir);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
