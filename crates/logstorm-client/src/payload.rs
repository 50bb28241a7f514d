use rand::{Rng, distr::Alphanumeric};
use serde::Serialize;

/// Content sent by the fixed-payload variant.
pub const FIXED_CONTENT: &str = "morpheus";

const RANDOM_CONTENT_LEN: usize = 128;

/// Body of one log-ingestion request.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    #[serde(rename = "logContent")]
    pub log_content: String,
}

/// Selects what each worker puts into `logContent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadMode {
    /// 128 random alphanumeric characters per request.
    #[default]
    Random,
    /// The fixed literal `"morpheus"` on every request.
    Fixed,
}

impl PayloadMode {
    pub fn entry(&self) -> LogEntry {
        let log_content = match self {
            PayloadMode::Random => random_content(RANDOM_CONTENT_LEN),
            PayloadMode::Fixed => FIXED_CONTENT.to_string(),
        };
        LogEntry { log_content }
    }
}

fn random_content(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_entry_serializes_to_exact_body() {
        let entry = PayloadMode::Fixed.entry();
        let body = serde_json::to_string(&entry).unwrap();
        assert_eq!(body, r#"{"logContent":"morpheus"}"#);
    }

    #[test]
    fn random_entry_is_128_alphanumeric_chars() {
        let entry = PayloadMode::Random.entry();
        assert_eq!(entry.log_content.len(), 128);
        assert!(entry.log_content.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn random_entries_differ_between_calls() {
        let a = PayloadMode::Random.entry();
        let b = PayloadMode::Random.entry();
        assert_ne!(a.log_content, b.log_content);
    }
}
