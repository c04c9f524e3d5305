use actix_web::{web, HttpResponse};

use crate::handlers::error::to_response;
use crate::middleware::auth::AuthContext;
use crate::routes::verification::AppState;

use vf_core::repositories::EmailIdentityRepository;
use vf_core::services::verification::{mask_email, MailerTrait, SessionStoreTrait};
use vf_shared::types::ApiResponse;

/// Handler for POST /api/v1/verification/send-code
///
/// Issues a six-digit code for the authenticated user and emails it to the
/// address on file. The request carries no body; the recipient comes from
/// the token claims.
///
/// # Responses
/// - `200` - Code generated and dispatched
/// - `400 ALREADY_VERIFIED` - The address is already verified
/// - `429 COOLDOWN_ACTIVE` - A code was sent too recently (`seconds_remaining` set)
/// - `500 DISPATCH_FAILED` - The mail provider rejected the message
pub async fn send_code<M, S, I>(
    auth: AuthContext,
    state: web::Data<AppState<M, S, I>>,
) -> HttpResponse
where
    M: MailerTrait + 'static,
    S: SessionStoreTrait + 'static,
    I: EmailIdentityRepository + 'static,
{
    log::info!(
        "Processing send_code request for user: {}, email: {}",
        auth.user_id,
        mask_email(&auth.email)
    );

    match state
        .verification_service
        .send_verification_code(auth.user_id, &auth.email)
        .await
    {
        Ok(outcome) => {
            log::info!(
                "Verification code sent to: {}, message_id: {}",
                mask_email(&auth.email),
                outcome.message_id
            );

            HttpResponse::Ok().json(ApiResponse::success(
                "Verification code has been sent to your email!",
            ))
        }
        Err(error) => {
            log::warn!(
                "Failed to send verification code for user {}: {}",
                auth.user_id,
                error
            );
            to_response(&error)
        }
    }
}
