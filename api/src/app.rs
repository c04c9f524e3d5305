//! Application route assembly
//!
//! `configure` registers everything an `App` needs: the public health check
//! and the JWT-protected verification scope. It is generic over the service
//! collaborators so tests can plug in mocks while `main` wires the real
//! Redis, MySQL, and mail implementations.

use actix_web::{web, HttpResponse};

use vf_core::repositories::EmailIdentityRepository;
use vf_core::services::verification::{MailerTrait, SessionStoreTrait};

use crate::middleware::auth::JwtAuth;
use crate::routes::verification;

/// Register API routes on the application
///
/// The verification scope requires a valid bearer token; the health check
/// stays open for load balancers and monitoring.
pub fn configure<M, S, I>(cfg: &mut web::ServiceConfig)
where
    M: MailerTrait + 'static,
    S: SessionStoreTrait + 'static,
    I: EmailIdentityRepository + 'static,
{
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1/verification")
            .wrap(JwtAuth::new())
            .route(
                "/send-code",
                web::post().to(verification::send_code::<M, S, I>),
            )
            .route(
                "/verify-code",
                web::post().to(verification::verify_code::<M, S, I>),
            ),
    );
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "veriflow-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
