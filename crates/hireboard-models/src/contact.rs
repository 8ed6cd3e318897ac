use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use hireboard_core::PaginationMeta;

use crate::validation::validate_plain_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct ContactMessage {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateContactMessageDto {
    #[validate(length(min = 1, max = 100), custom(function = "validate_plain_text"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 2000), custom(function = "validate_plain_text"))]
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl From<CreateContactMessageDto> for NewContactMessage {
    fn from(dto: CreateContactMessageDto) -> Self {
        Self {
            full_name: dto.full_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            message: dto.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedContactMessagesResponse {
    pub data: Vec<ContactMessage>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_rules() {
        let dto = CreateContactMessageDto {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello, I'd like to post a job.".into(),
        };
        assert!(dto.validate().is_ok());

        let dto = CreateContactMessageDto {
            message: "<b>spam</b>".into(),
            ..dto
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }
}
