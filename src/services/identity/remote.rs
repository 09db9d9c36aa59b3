/*
 * Responsibility
 * - Validate a session token by calling the identity provider's HTTP API
 * - One POST per request, bounded by a client timeout, no retries
 */
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use super::credential::BearerCredential;
use super::provider::{ProviderError, ProviderSession, SessionProvider};

const VALIDATE_PATH: &str = "v1/auth/validate";

#[derive(Clone, Debug)]
pub struct RemoteSessionProvider {
    client: reqwest::Client,
    validate_url: Url,
    project_id: String,
}

impl RemoteSessionProvider {
    pub fn new(
        base_url: &str,
        project_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| ProviderError::Config(format!("invalid provider url: {e}")))?;

        // `join` replaces the last segment unless the base path ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let validate_url = base
            .join(VALIDATE_PATH)
            .map_err(|e| ProviderError::Config(format!("invalid provider url: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Config(format!("http client: {e}")))?;

        Ok(Self {
            client,
            validate_url,
            project_id: project_id.into(),
        })
    }

    fn map_transport_error(err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Unavailable(err.to_string())
        }
    }
}

#[async_trait]
impl SessionProvider for RemoteSessionProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn validate_session(
        &self,
        credential: &BearerCredential,
    ) -> Result<ProviderSession, ProviderError> {
        let response = self
            .client
            .post(self.validate_url.clone())
            .bearer_auth(format!("{}:{}", self.project_id, credential.as_str()))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::Rejected(format!("provider returned {status}")));
        }
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "provider returned {status}"
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::Malformed(e.to_string())
            }
        })?;

        // Claims come either at the top level or wrapped in a `token` object.
        let claims = match body {
            Value::Object(mut map) => match map.remove("token") {
                Some(Value::Object(token)) => token,
                Some(other) => {
                    map.insert("token".to_string(), other);
                    map
                }
                None => map,
            },
            _ => return Err(ProviderError::Malformed("expected a JSON object".into())),
        };

        Ok(ProviderSession::from_claims(claims))
    }
}
