use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::error::ApiError;
use crate::models::{
    Menu, NewMenuItem, Order, OrderRequest, Restaurant, RestaurantRegistration, UserProfile,
    UserRegistration,
};

/// Production deployment of the Foods24 backend.
pub const DEFAULT_API_URL: &str = "https://foods24-be.vercel.app";

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Typed client for the Foods24 REST API.
///
/// Holds the base URL and a shared `reqwest::Client`. Authorized calls take
/// an explicit [`Session`] and attach its bearer token; there is no ambient
/// token storage anywhere in the library.
pub struct FoodsApi {
    api_url: String,
    client: reqwest::Client,
}

impl FoodsApi {
    pub fn new(api_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            api_url: crate::utils::remove_trailing_slash(api_url),
            client,
        }
    }

    pub fn with_client(api_url: &str, client: reqwest::Client) -> Self {
        Self {
            api_url: crate::utils::remove_trailing_slash(api_url),
            client,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let mut request = self.client.request(method, self.build_url(path));
        if let Some(session) = session {
            request = request.bearer_auth(session.token());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_for_status(path, status, &text, session.is_some()));
        }
        Ok(text)
    }

    async fn request_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let text = self.send(method, path, session, body).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Parse {
            endpoint: path.to_string(),
            source: e,
        })
    }

    /// For endpoints where only the status matters (profile update, menu
    /// mutations, order submission). The body is discarded.
    async fn request_status<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.send(method, path, session, body).await?;
        Ok(())
    }

    // ── Auth ────────────────────────────────────────────────────────────

    pub async fn login_user(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.login("/auth/user/login", email, password).await
    }

    pub async fn login_restaurant(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.login("/auth/restaurant/login", email, password).await
    }

    async fn login(&self, path: &str, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp: AuthResponse = self
            .request_json(Method::POST, path, None, Some(&body))
            .await?;
        Ok(Session::new(resp.token))
    }

    pub async fn register_user(&self, registration: &UserRegistration) -> Result<Session, ApiError> {
        let resp: AuthResponse = self
            .request_json(Method::POST, "/auth/user/register", None, Some(registration))
            .await?;
        Ok(Session::new(resp.token))
    }

    pub async fn register_restaurant(
        &self,
        registration: &RestaurantRegistration,
    ) -> Result<Session, ApiError> {
        let resp: AuthResponse = self
            .request_json(
                Method::POST,
                "/auth/restaurant/register",
                None,
                Some(registration),
            )
            .await?;
        Ok(Session::new(resp.token))
    }

    // ── Browsing ────────────────────────────────────────────────────────

    pub async fn restaurants(&self, session: &Session) -> Result<Vec<Restaurant>, ApiError> {
        self.request_json::<_, ()>(Method::GET, "/api/restaurants", Some(session), None)
            .await
    }

    pub async fn restaurant(&self, session: &Session, id: &str) -> Result<Restaurant, ApiError> {
        let path = format!("/api/restaurants/{}", id);
        self.request_json::<_, ()>(Method::GET, &path, Some(session), None)
            .await
    }

    // ── Orders ──────────────────────────────────────────────────────────

    pub async fn submit_order(
        &self,
        session: &Session,
        order: &OrderRequest,
    ) -> Result<(), ApiError> {
        self.request_status(Method::POST, "/order", Some(session), Some(order))
            .await
    }

    pub async fn order_history(&self, session: &Session) -> Result<Vec<Order>, ApiError> {
        self.request_json::<_, ()>(Method::GET, "/order/user", Some(session), None)
            .await
    }

    // ── Profile ─────────────────────────────────────────────────────────

    pub async fn profile(&self, session: &Session) -> Result<UserProfile, ApiError> {
        self.request_json::<_, ()>(Method::GET, "/auth/user/me", Some(session), None)
            .await
    }

    pub async fn update_profile(
        &self,
        session: &Session,
        profile: &UserProfile,
    ) -> Result<(), ApiError> {
        self.request_status(Method::PUT, "/auth/user/me", Some(session), Some(profile))
            .await
    }

    // ── Partner menu management ─────────────────────────────────────────

    pub async fn partner_menu(&self, session: &Session) -> Result<Menu, ApiError> {
        self.request_json::<_, ()>(Method::GET, "/restaurant/menu", Some(session), None)
            .await
    }

    pub async fn add_menu_item(
        &self,
        session: &Session,
        item: &NewMenuItem,
    ) -> Result<(), ApiError> {
        self.request_status(Method::POST, "/restaurant/menu/item", Some(session), Some(item))
            .await
    }

    pub async fn update_menu_item(
        &self,
        session: &Session,
        item_id: &str,
        item: &NewMenuItem,
    ) -> Result<(), ApiError> {
        let path = format!("/restaurant/menu/item/{}", item_id);
        self.request_status(Method::PUT, &path, Some(session), Some(item))
            .await
    }

    pub async fn delete_menu_item(&self, session: &Session, item_id: &str) -> Result<(), ApiError> {
        let path = format!("/restaurant/menu/item/{}", item_id);
        self.request_status::<()>(Method::DELETE, &path, Some(session), None)
            .await
    }
}

/// Classify a non-2xx response. A 401 on a call that carried a session token
/// means the session is stale and the caller should go back through login; a
/// 401 on the auth endpoints themselves is an ordinary rejection (bad
/// credentials) whose server message must survive.
fn error_for_status(
    endpoint: &str,
    status: StatusCode,
    body: &str,
    authorized: bool,
) -> ApiError {
    if authorized && status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthenticated;
    }
    ApiError::Status {
        endpoint: endpoint.to_string(),
        status,
        message: extract_error_message(body),
    }
}

/// Pull the `{ "error": "..." }` message out of a failure body, falling back
/// to the raw (trimmed) body when the server didn't send JSON.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(msg) }) => msg,
        _ => body.trim().to_string(),
    }
}
