use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

#[derive(Debug, Clone)]
pub struct Config {
    pub viacep_base_url: String,
    pub history_path: PathBuf,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let viacep_base_url = match std::env::var("VIACEP_BASE_URL") {
            Ok(url) => {
                if url.trim().is_empty() {
                    anyhow::bail!("VIACEP_BASE_URL cannot be empty");
                }
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("VIACEP_BASE_URL must start with http:// or https://");
                }
                url.trim_end_matches('/').to_string()
            }
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        let history_path = std::env::var("BUSCACEP_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_history_path());

        let request_timeout_secs = std::env::var("BUSCACEP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| {
                anyhow::anyhow!("BUSCACEP_TIMEOUT_SECS must be a valid number of seconds")
            })?;

        let config = Self {
            viacep_base_url,
            history_path,
            request_timeout_secs,
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("ViaCEP base URL: {}", config.viacep_base_url);
        tracing::debug!("History path: {}", config.history_path.display());
        tracing::debug!("Request timeout: {}s", config.request_timeout_secs);

        Ok(config)
    }
}

/// `buscaCEP-history.json` under the platform data directory, falling back
/// to the current directory when no data directory is available.
fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("buscacep"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("buscaCEP-history.json")
}
