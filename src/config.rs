use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("SHOPFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SHOPFORM_HOST: {e}"))?;

        let port: u16 = env_or("SHOPFORM_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid SHOPFORM_PORT: {e}"))?;

        // Comma-separated allowed origins; "*" opens the API to any origin.
        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_body_size: usize = env_or("SHOPFORM_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid SHOPFORM_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("SHOPFORM_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            cors_origins,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
