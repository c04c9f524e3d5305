//! Session key naming for per-user verification state
//!
//! The session store is a flat key-value map; the verification record is
//! spread across three identity-scoped keys. Issuing a code overwrites the
//! first two, a successful verify clears all three.

use uuid::Uuid;

/// Key holding the pending 6-digit code
pub fn code_key(user_id: Uuid) -> String {
    format!("verification:code:{}", user_id)
}

/// Key holding the RFC 3339 issue timestamp
pub fn issued_at_key(user_id: Uuid) -> String {
    format!("verification:issued_at:{}", user_id)
}

/// Key holding the RFC 3339 timestamp of the last successful dispatch
pub fn last_sent_key(user_id: Uuid) -> String {
    format!("verification:last_sent:{}", user_id)
}
