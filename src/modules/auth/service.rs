use anyhow::anyhow;
use tracing::{info, instrument};

use hireboard_auth::{create_access_token, hash_password, verify_password};
use hireboard_config::JwtConfig;
use hireboard_core::AppError;
use hireboard_db::JobBoardStore;
use hireboard_models::{AuthResponse, LoginDto, NewUser, RegisterDto, User, UserResponse};

use crate::metrics::{track_jwt_issued, track_login, track_user_registered};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    fn issue_token(user: User, jwt_config: &JwtConfig) -> Result<AuthResponse, AppError> {
        let token = create_access_token(user.id, &user.email, jwt_config)?;
        track_jwt_issued();
        Ok(AuthResponse::bearer(
            token,
            jwt_config.access_token_expiry,
            UserResponse::from(user),
        ))
    }

    /// Registers an Employer or a Job Seeker. Moderators are only created
    /// from the command line.
    #[instrument(skip(store, dto, jwt_config), fields(email = %dto.email))]
    pub async fn register(
        store: &dyn JobBoardStore,
        dto: RegisterDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let user = store
            .insert_user(NewUser {
                email: dto.email.trim().to_lowercase(),
                name: dto.name.trim().to_string(),
                password_hash,
                user_type: dto.user_type,
                is_moderator: false,
            })
            .await?;

        info!(user_id = %user.id, user_type = %user.user_type, "User registered");
        track_user_registered(user.user_type.as_str());

        Self::issue_token(user, jwt_config)
    }

    #[instrument(skip(store, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        store: &dyn JobBoardStore,
        dto: LoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let Some(user) = store.find_user_by_email(&dto.email).await? else {
            track_login(false);
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        };

        if !verify_password(&dto.password, &user.password_hash)? {
            track_login(false);
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        }

        track_login(true);
        Self::issue_token(user, jwt_config)
    }
}
