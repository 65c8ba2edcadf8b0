use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Errors produced by the registration and login flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("User already exists")]
    DuplicateAccount,

    /// Same message whether the email is unknown or the password is
    /// wrong, so responses cannot be used to enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("Database error")]
    Store(#[source] sqlx::Error),

    #[error("Internal error")]
    Internal(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::DuplicateAccount | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Store(e) => {
                tracing::error!(error = %e, "store error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AuthError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(serde_json::json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Store(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_email_and_wrong_password_render_identically() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            AuthError::InvalidCredentials.to_string()
        );
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn store_error_message_does_not_leak_detail() {
        let err = AuthError::Store(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Database error");
    }

    #[test]
    fn duplicate_account_message_matches_api_contract() {
        assert_eq!(AuthError::DuplicateAccount.to_string(), "User already exists");
    }
}
