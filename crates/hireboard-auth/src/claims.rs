use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"user-id-456","email":"user@test.com","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user-id-456");
        assert_eq!(claims.exp, 9999999999);
        assert!(claims.user_id().is_none());
    }

    #[test]
    fn test_user_id_parses_subject() {
        let id = Uuid::new_v4();
        let claims = Claims {
            sub: id.to_string(),
            email: "a@b.com".to_string(),
            exp: 1,
            iat: 0,
        };
        assert_eq!(claims.user_id(), Some(id));
    }
}
