use async_trait::async_trait;

use crate::api::FoodsApi;
use crate::error::ApiError;
use crate::models::{RestaurantRegistration, UserRegistration};

/// An authenticated session against the Foods24 API.
///
/// Created by login/register, passed by reference to every authorized call,
/// and destroyed by dropping it. This is the whole lifecycle — the library
/// never stashes the token in any global.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The opaque bearer token attached to API requests.
    pub fn token(&self) -> &str {
        &self.token
    }
}

// Mask the credential in debug output.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.token.chars().take(6).collect();
        write!(f, "Session({}…)", shown)
    }
}

/// Common login surface for the two account kinds, so callers can dispatch
/// on a role name and run the same flow against either.
#[async_trait]
pub trait AuthFlow: Send + Sync {
    fn role(&self) -> &str;

    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;
}

/// End-user authentication (`/auth/user/*`).
pub struct UserAuth {
    api: FoodsApi,
}

impl UserAuth {
    pub fn new(api: FoodsApi) -> Self {
        Self { api }
    }

    pub async fn register(&self, registration: &UserRegistration) -> Result<Session, ApiError> {
        self.api.register_user(registration).await
    }
}

#[async_trait]
impl AuthFlow for UserAuth {
    fn role(&self) -> &str {
        "user"
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.api.login_user(email, password).await
    }
}

/// Restaurant-partner authentication (`/auth/restaurant/*`).
pub struct RestaurantAuth {
    api: FoodsApi,
}

impl RestaurantAuth {
    pub fn new(api: FoodsApi) -> Self {
        Self { api }
    }

    pub async fn register(
        &self,
        registration: &RestaurantRegistration,
    ) -> Result<Session, ApiError> {
        self.api.register_restaurant(registration).await
    }
}

#[async_trait]
impl AuthFlow for RestaurantAuth {
    fn role(&self) -> &str {
        "restaurant"
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.api.login_restaurant(email, password).await
    }
}
