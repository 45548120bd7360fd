use async_trait::async_trait;
use tracing::debug;

use super::base::IdentityResolver;
use crate::client::ApiClient;
use crate::models::{AuthContext, TorqueUser, UserMeResponse};

const USER_ME_PATH: &str = "/user/me";
const USER_ME_AUTH_PATH: &str = "/user/me/auth";

/// Identity resolver backed by the remote `/user/me` endpoints.
pub struct ApiIdentityResolver {
    client: ApiClient,
}

impl ApiIdentityResolver {
    pub fn new(client: ApiClient) -> Self {
        ApiIdentityResolver { client }
    }
}

#[async_trait]
impl IdentityResolver for ApiIdentityResolver {
    async fn resolve_from_token(&self, auth_token: &str) -> TorqueUser {
        match self
            .client
            .get_json_with_token::<UserMeResponse>(USER_ME_AUTH_PATH, auth_token)
            .await
        {
            Ok(response) => TorqueUser::Authenticated(response.into_user()),
            Err(e) => {
                debug!("Token resolution failed, treating as unknown user: {}", e);
                TorqueUser::Unknown
            }
        }
    }

    async fn resolve_from_context(&self, context: &AuthContext) -> TorqueUser {
        match self
            .client
            .get_json_with_token::<UserMeResponse>(USER_ME_PATH, &context.auth_token)
            .await
        {
            Ok(response) => {
                // The stored context stays canonical for this session.
                TorqueUser::Authenticated(response.user.into_user_with_context(context.clone()))
            }
            Err(e) => {
                debug!("Context resolution failed, treating as unknown user: {}", e);
                TorqueUser::Unknown
            }
        }
    }
}
