#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use http_body_util::BodyExt;
use rental_service::domain::auth::ports::CredentialStore;
use rental_service::domain::auth::ports::TokenSigner;
use rental_service::domain::auth::service::AuthService;
use rental_service::domain::user::models::User;
use rental_service::domain::user::models::UserId;
use rental_service::domain::user::models::UserRole;
use rental_service::domain::user::ports::UserRepository;
use rental_service::domain::user::service::UserService;
use rental_service::inbound::http::router::create_router;
use rental_service::user::errors::UserError;
use serde_json::json;
use serde_json::Value;
use tower::ServiceExt;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Repository keeping users in memory, with the same uniqueness rules as the
/// `users` table.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    fn email_taken_by_other(users: &HashMap<UserId, User>, user: &User) -> bool {
        users
            .values()
            .any(|u| u.id != user.id && u.email.as_str() == user.email.as_str())
    }

    fn lookup_email(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned()
    }

    pub fn set_role(&self, email: &str, role: UserRole) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.values_mut().find(|u| u.email.as_str() == email) {
            user.role = role;
        }
    }

    pub fn stored(&self, email: &str) -> Option<User> {
        self.lookup_email(email)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.lookup_email(email))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if Self::email_taken_by_other(&users, &user) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl CredentialStore for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.lookup_email(email))
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if Self::email_taken_by_other(&users, &user) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Test application driving the real router without a network listener.
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<InMemoryUserRepository>,
    pub jwt_handler: JwtHandler,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::spawn_with_gate_signer(Arc::new(Authenticator::new(JWT_SECRET)))
    }

    /// Spawn with a separate signer guarding the protected routes, while
    /// login and refresh keep using the real authenticator.
    pub fn spawn_with_gate_signer(gate_signer: Arc<dyn TokenSigner>) -> Self {
        let repository = Arc::new(InMemoryUserRepository::default());
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));

        let auth_service = Arc::new(AuthService::new(Arc::clone(&repository), authenticator));
        let user_service = Arc::new(UserService::new(Arc::clone(&repository)));

        Self {
            router: create_router(auth_service, user_service, gate_signer),
            repository,
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Body>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Failed to parse response")
        };

        TestResponse { status, body }
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, None, Some(Body::from(body.to_string())))
            .await
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        self.request(Method::POST, uri, None, Some(Body::from(body)))
            .await
    }

    pub async fn get_authorized(&self, uri: &str, authorization: &str) -> TestResponse {
        self.request(Method::GET, uri, Some(authorization), None)
            .await
    }

    pub async fn patch_authorized(&self, uri: &str, token: &str, body: Value) -> TestResponse {
        self.request(
            Method::PATCH,
            uri,
            Some(&format!("Bearer {token}")),
            Some(Body::from(body.to_string())),
        )
        .await
    }

    pub async fn delete_authorized(&self, uri: &str, token: &str) -> TestResponse {
        self.request(Method::DELETE, uri, Some(&format!("Bearer {token}")), None)
            .await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> TestResponse {
        self.post(
            "/v1/auth/register",
            json!({ "username": name, "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post(
            "/v1/auth/login",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Register and log in, returning the login response body.
    pub async fn signed_in(&self, name: &str, email: &str, password: &str) -> Value {
        let registered = self.register(name, email, password).await;
        assert_eq!(registered.status, StatusCode::CREATED);

        let logged_in = self.login(email, password).await;
        assert_eq!(logged_in.status, StatusCode::OK);
        logged_in.body
    }
}
