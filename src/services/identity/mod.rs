pub mod credential;
pub mod factory;
pub mod jwt;
pub mod owner;
pub mod provider;
pub mod remote;
pub mod types;
pub mod validator;

pub use credential::BearerCredential;
pub use factory::build_identity_validator;
pub use jwt::JwtSessionProvider;
pub use owner::OwnerIdPolicy;
pub use provider::{ProviderError, ProviderSession, SessionProvider};
pub use remote::RemoteSessionProvider;
pub use types::{OwnerId, VerifiedIdentity};
pub use validator::{AuthError, IdentityValidator};
