use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use hireboard_auth::verify_token;
use hireboard_core::{Action, Actor, AppError, Resource, authorize};
use hireboard_models::User;

use crate::metrics::track_authorization_check;
use crate::state::AppState;

/// Extractor that validates the bearer token and loads the identity behind it.
///
/// The role is derived from the stored record on every request, so the token
/// itself carries nothing but the identity.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub actor: Actor,
}

impl AuthUser {
    pub fn new(user: User) -> Self {
        let actor = user.actor();
        Self { user, actor }
    }

    pub fn id(&self) -> Uuid {
        self.actor.id
    }

    pub fn is_moderator(&self) -> bool {
        self.actor.is_moderator()
    }

    /// Runs the permission gate for this caller and turns a deny into a 403.
    pub fn authorize(&self, action: Action, resource: Resource) -> Result<(), AppError> {
        let decision = authorize(&self.actor, action, resource);
        track_authorization_check(decision.is_allowed(), &self.actor.role.to_string());
        decision.into_result()
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid authorization header format")))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = verify_token(token, &state.jwt_config)?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid user ID in token")))?;

        let user = state
            .store
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow!("User no longer exists")))?;

        Ok(AuthUser::new(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use hireboard_core::{Role, UserType};

    fn user(user_type: UserType, is_moderator: bool, completed: bool) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
            name: "Someone".to_string(),
            password_hash: String::new(),
            user_type,
            is_moderator,
            is_profile_completed: completed,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_actor_follows_stored_flags() {
        let auth = AuthUser::new(user(UserType::JobSeeker, true, false));
        assert_eq!(auth.actor.role, Role::Moderator);
        assert!(auth.is_moderator());

        let auth = AuthUser::new(user(UserType::Employer, false, true));
        assert_eq!(auth.actor.role, Role::Employer);
        assert!(auth.actor.profile_completed);
    }

    #[test]
    fn test_authorize_maps_deny_to_forbidden() {
        let auth = AuthUser::new(user(UserType::JobSeeker, false, true));
        let err = auth
            .authorize(Action::Create, Resource::Job { employer: None })
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(
            err.public_message(),
            "You don't have permissions to create a job"
        );
    }

    #[test]
    fn test_bearer_token_parsing() {
        let (parts, _) = Request::builder()
            .header("authorization", "Bearer abc.def")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def");

        let (parts, _) = Request::builder()
            .header("authorization", "Basic abc")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(
            bearer_token(&parts).unwrap_err().status,
            StatusCode::UNAUTHORIZED
        );

        let (parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert!(bearer_token(&parts).is_err());
    }
}
