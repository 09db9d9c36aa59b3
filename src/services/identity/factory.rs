/// Factory: build the `IdentityValidator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::identity::{
    IdentityValidator, JwtSessionProvider, OwnerIdPolicy, ProviderError, RemoteSessionProvider,
    SessionProvider,
};

pub fn build_identity_validator(config: &Config) -> Result<Arc<IdentityValidator>, ProviderError> {
    let provider: Arc<dyn SessionProvider> = match &config.session_jwt {
        Some(jwt) => Arc::new(JwtSessionProvider::new(
            &jwt.public_key_pem,
            jwt.issuer.as_deref(),
            jwt.leeway_seconds,
        )?),
        None => Arc::new(RemoteSessionProvider::new(
            &config.identity_provider_url,
            config.identity_project_id.clone(),
            config.identity_provider_timeout,
        )?),
    };

    let owner_policy = OwnerIdPolicy::from_claim_name(config.owner_id_claim.as_deref());

    tracing::info!(
        provider = provider.name(),
        owner_policy = ?owner_policy,
        "identity validator configured"
    );

    Ok(Arc::new(IdentityValidator::new(provider, owner_policy)))
}
