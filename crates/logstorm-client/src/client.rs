use serde::Deserialize;

use crate::errors::ClientError;
use crate::payload::LogEntry;

const AUTH_SCOPE: &str = "SEND_LOGS";

/// Credentials for the token endpoint.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// HTTP client for the log-ingestion service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a bearer token.
    ///
    /// Form POST to `/api/v1/auth/token` with `username`, `password` and
    /// `scope=SEND_LOGS`; the response body must carry an `access_token`
    /// string.
    pub async fn request_token(&self, creds: &Credentials) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/v1/auth/token", self.base_url))
            .form(&[
                ("username", creds.username.as_str()),
                ("password", creds.password.as_str()),
                ("scope", AUTH_SCOPE),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            ClientError::InvalidResponse(format!("failed to parse response: {}, body: {}", e, body))
        })?;

        Ok(token.access_token)
    }

    /// Submit one log entry.
    ///
    /// PUT to `/api/v1/log/create` with a JSON body and the bearer token.
    /// The response body is returned verbatim, whatever the status code.
    pub async fn create_log(&self, token: &str, entry: &LogEntry) -> Result<String, ClientError> {
        let response = self
            .http
            .put(format!("{}/api/v1/log/create", self.base_url))
            .bearer_auth(token)
            .json(entry)
            .send()
            .await?;

        Ok(response.text().await?)
    }
}
