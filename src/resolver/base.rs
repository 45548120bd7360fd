use async_trait::async_trait;

use crate::models::{AuthContext, TorqueUser};

/// Resolves "who is this credential" against the identity endpoint.
///
/// Both entry points share one failure policy: any transport error, non-2xx
/// status, or schema mismatch collapses to `TorqueUser::Unknown`. Resolution
/// never returns an error and never yields a partially-populated user — an
/// invalid or expired credential simply looks logged-out.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a bare token (e.g. fresh from an auth callback). The returned
    /// user embeds the canonical token/expiry pair from the server response,
    /// which is not necessarily the token supplied here.
    async fn resolve_from_token(&self, auth_token: &str) -> TorqueUser;

    /// Resolve a persisted context. The supplied context is treated as
    /// canonical for the returned user's `auth` field.
    async fn resolve_from_context(&self, context: &AuthContext) -> TorqueUser;
}
