use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::verification::VerifyCodeRequest;
use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;
use crate::routes::verification::AppState;

use vf_core::repositories::EmailIdentityRepository;
use vf_core::services::verification::{MailerTrait, SessionStoreTrait};
use vf_shared::types::ApiResponse;

/// Handler for POST /api/v1/verification/verify-code
///
/// Confirms the submitted code against the pending record and marks the
/// authenticated user's email verified on success.
///
/// # Request Body
///
/// ```json
/// { "code": "482913" }
/// ```
///
/// # Responses
/// - `200` - Email verified, pending record cleared
/// - `400 NO_PENDING_CODE` - Nothing to verify for this account
/// - `400 CODE_EXPIRED` - The code outlived its expiry window
/// - `400 CODE_MISMATCH` - Wrong code; the pending record stays intact
pub async fn verify_code<M, S, I>(
    auth: AuthContext,
    state: web::Data<AppState<M, S, I>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    M: MailerTrait + 'static,
    S: SessionStoreTrait + 'static,
    I: EmailIdentityRepository + 'static,
{
    if request.validate().is_err() {
        log::warn!(
            "Rejecting malformed verify_code request for user: {}",
            auth.user_id
        );
        return HttpResponse::BadRequest().json(ApiResponse::error(
            "VALIDATION_ERROR",
            "Invalid request data. Please provide a verification code.",
        ));
    }

    log::info!("Processing verify_code request for user: {}", auth.user_id);

    match state
        .verification_service
        .verify_code(auth.user_id, &auth.email, &request.code)
        .await
    {
        Ok(()) => {
            log::info!("Email verified for user: {}", auth.user_id);
            HttpResponse::Ok().json(ApiResponse::success("Email verified successfully!"))
        }
        Err(error) => {
            log::warn!(
                "Verification attempt failed for user {}: {}",
                auth.user_id,
                error
            );
            to_response(&error)
        }
    }
}
