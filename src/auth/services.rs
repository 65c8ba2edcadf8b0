use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::auth::dto::{LoginRequest, PublicUser, RegisterRequest};
use crate::auth::error::AuthError;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::AccountStore;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Create an account for an unused email. The duplicate check and the
/// insert are two store calls; the UNIQUE constraint on users.email
/// backs them up, so neither step is ever retried here.
pub async fn register(
    store: &dyn AccountStore,
    req: RegisterRequest,
) -> Result<PublicUser, AuthError> {
    if store.find_by_email(&req.email).await?.is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(AuthError::DuplicateAccount);
    }

    let hash = hash_password(&req.password).map_err(|e| AuthError::Internal(e.to_string()))?;

    let user = store
        .create(&req.email, &hash, &req.role, &req.first_name, &req.last_name)
        .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user.into())
}

/// Verify credentials. Unknown email and wrong password are reported
/// with the same error.
pub async fn login(store: &dyn AccountStore, req: LoginRequest) -> Result<PublicUser, AuthError> {
    let user = match store.find_by_email(&req.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %req.email, "login unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    let ok = verify_password(&req.password, &user.password_hash)
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    if !ok {
        warn!(email = %req.email, user_id = %user.id, "login invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(user.into())
}
