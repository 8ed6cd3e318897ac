//! Moderator accounts. The API never creates them.

use anyhow::{Context, anyhow};

use hireboard_auth::hash_password_with_cost;
use hireboard_core::UserType;
use hireboard_db::JobBoardStore;
use hireboard_models::{NewUser, User};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Inserts a moderator identity. A taken e-mail fails with the store's
/// conflict message.
pub async fn create_moderator(
    store: &dyn JobBoardStore,
    name: &str,
    email: &str,
    password: &str,
    cost: u32,
) -> anyhow::Result<User> {
    let name = name.trim();
    let email = email.trim().to_lowercase();

    if name.is_empty() {
        return Err(anyhow!("Name must not be empty"));
    }
    if !email.contains('@') {
        return Err(anyhow!("{email} is not a valid e-mail address"));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(anyhow!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }

    let password_hash = hash_password_with_cost(password, cost)
        .map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;

    let user = store
        .insert_user(NewUser {
            email,
            name: name.to_string(),
            password_hash,
            user_type: UserType::Employer,
            is_moderator: true,
        })
        .await
        .context("Failed to create moderator")?;

    Ok(user)
}
