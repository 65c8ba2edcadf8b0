use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_uses_camel_case_keys() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            role: "employer".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
        assert!(!json.contains("first_name"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn register_request_accepts_camel_case_body() {
        let body = serde_json::json!({
            "email": "a@x.com",
            "password": "secret1",
            "role": "seeker",
            "firstName": "A",
            "lastName": "B"
        });
        let req: RegisterRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.first_name, "A");
        assert_eq!(req.last_name, "B");
    }
}
