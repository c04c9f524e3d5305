//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the configured secret, and injects an `AuthContext` into the
//! request so handlers know which user and email address they act on.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

/// JWT claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user identifier
    pub sub: String,
    /// Email address on file for the user
    pub email: String,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
    /// Email address on file, extracted from JWT claims
    pub email: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, String> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| "Subject claim is not a valid user id".to_string())?;
        Ok(Self {
            user_id,
            email: claims.email,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    jwt_secret: Option<String>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware from the environment
    pub fn new() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET").ok(),
        }
    }

    /// Creates a new JWT authentication middleware with a specific secret
    pub fn with_secret(secret: String) -> Self {
        Self {
            jwt_secret: Some(secret),
        }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_secret: self.jwt_secret.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_secret: Option<String>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(ErrorUnauthorized("Missing or invalid Authorization header"));
                }
            };

            let secret = match jwt_secret {
                Some(secret) => secret,
                None => return Err(ErrorUnauthorized("JWT verification not configured")),
            };

            let auth_context = match verify_token(&token, &secret) {
                Ok(context) => context,
                Err(e) => {
                    return Err(ErrorUnauthorized(format!(
                        "Token verification failed: {}",
                        e
                    )))
                }
            };

            req.extensions_mut().insert(auth_context);

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Verify a token signature and expiry and build the auth context
fn verify_token(token: &str, secret: &str) -> Result<AuthContext, String> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Token decode error: {}", e))?;

    AuthContext::from_claims(token_data.claims)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
