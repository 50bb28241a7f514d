use std::env;
use std::time::Duration;

use logstorm_client::PayloadMode;

const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub workers: usize,
    pub fixed_wait: Duration,
    pub payload: PayloadMode,
    /// Minimum wall-clock age of the token before a completion event
    /// triggers a refresh.
    pub refresh_interval: Duration,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `HOST` and `PORT` fall back to empty strings; `WORKERS` and
    /// `FIXEDWAIT` silently coerce to zero when missing or non-numeric.
    /// `PAYLOAD` selects the payload variant and defaults to random.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_default(),
            port: env::var("PORT").unwrap_or_default(),
            workers: parse_number(env::var("WORKERS").ok()) as usize,
            fixed_wait: Duration::from_millis(parse_number(env::var("FIXEDWAIT").ok())),
            payload: parse_payload(env::var("PAYLOAD").ok()),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_number(value: Option<String>) -> u64 {
    value.and_then(|s| s.parse().ok()).unwrap_or(0)
}

fn parse_payload(value: Option<String>) -> PayloadMode {
    match value.as_deref().map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("fixed") || s.eq_ignore_ascii_case("morpheus") => {
            PayloadMode::Fixed
        }
        _ => PayloadMode::Random,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_parse_or_coerce_to_zero() {
        assert_eq!(parse_number(Some("12".to_string())), 12);
        assert_eq!(parse_number(Some("twelve".to_string())), 0);
        assert_eq!(parse_number(Some("".to_string())), 0);
        assert_eq!(parse_number(None), 0);
    }

    #[test]
    fn payload_mode_defaults_to_random() {
        assert_eq!(parse_payload(None), PayloadMode::Random);
        assert_eq!(parse_payload(Some("random".to_string())), PayloadMode::Random);
        assert_eq!(parse_payload(Some("unknown".to_string())), PayloadMode::Random);
    }

    #[test]
    fn payload_mode_accepts_fixed_aliases() {
        assert_eq!(parse_payload(Some("fixed".to_string())), PayloadMode::Fixed);
        assert_eq!(parse_payload(Some("Morpheus".to_string())), PayloadMode::Fixed);
    }

    #[test]
    fn base_url_joins_host_and_port() {
        let config = Config {
            host: "localhost".to_string(),
            port: "8080".to_string(),
            workers: 0,
            fixed_wait: Duration::ZERO,
            payload: PayloadMode::Random,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        };
        assert_eq!(config.base_url(), "http://localhost:8080");
    }
}
