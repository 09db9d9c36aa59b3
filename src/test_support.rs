//! Shared test fixtures: a scripted session provider and a fully layered router backed
//! by the in-memory student repo.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Map, Value};
use tower::ServiceExt;

use crate::app::build_router;
use crate::config::Config;
use crate::repos::memory_repo::MemoryStudentRepo;
use crate::services::identity::{
    BearerCredential, IdentityValidator, OwnerIdPolicy, ProviderError, ProviderSession,
    SessionProvider,
};
use crate::services::students::ScopedStudentStore;
use crate::state::AppState;

/// Accepts only the tokens it was told about; everything else is `Rejected`.
#[derive(Debug, Default)]
pub struct FakeSessionProvider {
    sessions: HashMap<String, Map<String, Value>>,
    fail: bool,
    pub calls: AtomicUsize,
}

impl FakeSessionProvider {
    pub fn with_subject(self, token: &str, subject: &str) -> Self {
        self.with_claims(token, serde_json::json!({ "sub": subject }))
    }

    pub fn with_claims(mut self, token: &str, claims: Value) -> Self {
        let claims = match claims {
            Value::Object(map) => map,
            other => panic!("claims must be a JSON object, got {other}"),
        };
        self.sessions.insert(token.to_string(), claims);
        self
    }

    /// Every call fails as if the provider were down.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl SessionProvider for FakeSessionProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn validate_session(
        &self,
        credential: &BearerCredential,
    ) -> Result<ProviderSession, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Unavailable("connection refused".into()));
        }
        self.sessions
            .get(credential.as_str())
            .cloned()
            .map(ProviderSession::from_claims)
            .ok_or_else(|| ProviderError::Rejected("unknown session".into()))
    }
}

/// Config with only the required keys set, plus `overrides`.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::from_lookup(|key| {
        if let Some((_, value)) = overrides.iter().find(|(k, _)| *k == key) {
            return Some(value.to_string());
        }
        match key {
            "DATABASE_URL" => Some("postgres://localhost/students_test".into()),
            "IDENTITY_PROJECT_ID" => Some("P-test".into()),
            _ => None,
        }
    })
    .expect("test config")
}

/// Router with every production layer applied, plus handles to its fakes.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub repo: Arc<MemoryStudentRepo>,
    pub provider: Arc<FakeSessionProvider>,
}

impl TestApp {
    /// Tokens `tok-t1` and `tok-t2` authenticate as owners `t1` and `t2`.
    pub fn new() -> Self {
        Self::with_provider(
            FakeSessionProvider::default()
                .with_subject("tok-t1", "t1")
                .with_subject("tok-t2", "t2"),
        )
    }

    pub fn with_provider(provider: FakeSessionProvider) -> Self {
        Self::build(provider, test_config(&[]))
    }

    pub fn build(provider: FakeSessionProvider, config: Config) -> Self {
        let provider = Arc::new(provider);
        let repo = Arc::new(MemoryStudentRepo::default());

        let identity = Arc::new(IdentityValidator::new(
            provider.clone(),
            OwnerIdPolicy::Subject,
        ));
        let state = AppState::new(identity, ScopedStudentStore::new(repo.clone()));

        Self {
            router: build_router(state.clone(), &config),
            state,
            repo,
            provider,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn json(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        read_json(self.request(method, uri, token, body).await).await
    }
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
