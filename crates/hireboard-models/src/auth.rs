use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use hireboard_core::UserType;

use crate::users::UserResponse;
use crate::validation::validate_plain_text;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100), custom(function = "validate_plain_text"))]
    pub name: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn bearer(access_token: String, expires_in: i64, user: UserResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_unknown_fields() {
        let json = r#"{"email":"a@b.com","name":"A","password":"password1","user_type":"Employer","is_moderator":true}"#;
        assert!(serde_json::from_str::<RegisterDto>(json).is_err());
    }

    #[test]
    fn test_register_validation() {
        let json = r#"{"email":"not-an-email","name":"A<b>","password":"short","user_type":"Job Seeker"}"#;
        let dto: RegisterDto = serde_json::from_str(json).unwrap();
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
    }
}
