use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

use super::credential::BearerCredential;
use super::provider::{ProviderError, ProviderSession, SessionProvider};

/// RS256 session-token verifier.
///
/// Used instead of the remote provider when the project's public key is configured.
/// `jsonwebtoken::Validation` checks:
/// - signature
/// - `exp` (with leeway)
/// - `iss` when an issuer is configured
///
/// `aud` is not checked; session tokens are scoped by issuer.
/// Key material stays out of Debug output.
#[derive(Clone)]
pub struct JwtSessionProvider {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtSessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionProvider")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtSessionProvider {
    pub fn new(
        public_key_pem: &str,
        issuer: Option<&str>,
        leeway_seconds: u64,
    ) -> Result<Self, ProviderError> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| ProviderError::Config(format!("invalid rsa public key pem: {e}")))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = leeway_seconds;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

#[async_trait]
impl SessionProvider for JwtSessionProvider {
    fn name(&self) -> &'static str {
        "jwt"
    }

    async fn validate_session(
        &self,
        credential: &BearerCredential,
    ) -> Result<ProviderSession, ProviderError> {
        let data = jsonwebtoken::decode::<Map<String, Value>>(
            credential.as_str(),
            &self.decoding_key,
            &self.validation,
        )
        .map_err(|e| ProviderError::Rejected(e.to_string()))?;

        Ok(ProviderSession::from_claims(data.claims))
    }
}
