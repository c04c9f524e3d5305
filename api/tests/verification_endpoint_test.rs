//! End-to-end tests for the verification endpoints
//!
//! Runs the full actix service with in-memory collaborators: the infra mock
//! mailer, a local session store, and the core in-memory identity
//! repository. JWT auth uses a fixed test secret.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use tokio::sync::RwLock;
use uuid::Uuid;

use vf_api::app;
use vf_api::middleware::auth::Claims;
use vf_api::routes::verification::AppState;

use vf_core::repositories::MockEmailIdentityRepository;
use vf_core::services::verification::{
    SessionStoreTrait, VerificationService, VerificationServiceConfig,
};
use vf_infra::mail::MockMailer;

const TEST_SECRET: &str = "test-jwt-secret";
const TEST_EMAIL: &str = "user@example.com";

/// Local session store mirroring Redis semantics
struct TestSessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl TestSessionStore {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionStoreTrait for TestSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

type TestState = AppState<MockMailer, TestSessionStore, MockEmailIdentityRepository>;

fn test_state() -> (web::Data<TestState>, Arc<TestSessionStore>) {
    let mailer = Arc::new(MockMailer::with_options(false, false));
    let sessions = Arc::new(TestSessionStore::new());
    let identities = Arc::new(MockEmailIdentityRepository::new());

    let service = VerificationService::new(
        mailer,
        Arc::clone(&sessions),
        identities,
        VerificationServiceConfig::default(),
    );

    (
        web::Data::new(AppState {
            verification_service: Arc::new(service),
        }),
        sessions,
    )
}

fn bearer_token(user_id: Uuid) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: TEST_EMAIL.to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}

macro_rules! init_app {
    ($state:expr) => {{
        std::env::set_var("JWT_SECRET", TEST_SECRET);
        test::init_service(
            App::new().app_data($state.clone()).configure(
                app::configure::<MockMailer, TestSessionStore, MockEmailIdentityRepository>,
            ),
        )
        .await
    }};
}

#[actix_rt::test]
async fn test_health_check_is_public() {
    let (state, _) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_send_code_requires_auth() {
    let (state, _) = test_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .to_request();
    let resp = test::try_call_service(&app, req).await;

    let err = resp.expect_err("request without a token must be rejected");
    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_rt::test]
async fn test_send_code_success() {
    let (state, _) = test_state();
    let app = init_app!(state);
    let user_id = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Verification code has been sent to your email!"
    );
}

#[actix_rt::test]
async fn test_resend_within_cooldown_returns_429() {
    let (state, _) = test_state();
    let app = init_app!(state);
    let user_id = Uuid::new_v4();

    let first = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .to_request();
    assert_eq!(
        test::call_service(&app, first).await.status(),
        StatusCode::OK
    );

    let second = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .to_request();
    let resp = test::call_service(&app, second).await;

    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "COOLDOWN_ACTIVE");
    let remaining = body["seconds_remaining"].as_i64().unwrap();
    assert!((1..=60).contains(&remaining));
}

#[actix_rt::test]
async fn test_verify_code_full_flow() {
    let (state, sessions) = test_state();
    let app = init_app!(state);
    let user_id = Uuid::new_v4();

    let send = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .to_request();
    assert_eq!(test::call_service(&app, send).await.status(), StatusCode::OK);

    // Read the issued code back from the session store
    let code = sessions
        .get(&vf_core::services::verification::code_key(user_id))
        .await
        .unwrap()
        .unwrap();

    let verify = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .set_json(serde_json::json!({ "code": code }))
        .to_request();
    let resp = test::call_service(&app, verify).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Email verified successfully!");
}

#[actix_rt::test]
async fn test_verify_code_mismatch_returns_400() {
    let (state, _) = test_state();
    let app = init_app!(state);
    let user_id = Uuid::new_v4();

    let send = test::TestRequest::post()
        .uri("/api/v1/verification/send-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .to_request();
    assert_eq!(test::call_service(&app, send).await.status(), StatusCode::OK);

    let verify = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .set_json(serde_json::json!({ "code": "000000" }))
        .to_request();
    let resp = test::call_service(&app, verify).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CODE_MISMATCH");
}

#[actix_rt::test]
async fn test_verify_without_pending_code_returns_400() {
    let (state, _) = test_state();
    let app = init_app!(state);
    let user_id = Uuid::new_v4();

    let verify = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .set_json(serde_json::json!({ "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, verify).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NO_PENDING_CODE");
}

#[actix_rt::test]
async fn test_verify_rejects_empty_code() {
    let (state, _) = test_state();
    let app = init_app!(state);
    let user_id = Uuid::new_v4();

    let verify = test::TestRequest::post()
        .uri("/api/v1/verification/verify-code")
        .insert_header(("Authorization", bearer_token(user_id)))
        .set_json(serde_json::json!({ "code": "" }))
        .to_request();
    let resp = test::call_service(&app, verify).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
