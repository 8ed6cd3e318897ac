//! Role classification.
//!
//! An identity is stored with a `user_type` and an `is_moderator` flag. The
//! moderator flag wins; otherwise the user type decides the role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The account kind chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum UserType {
    #[serde(rename = "Employer")]
    Employer,
    #[serde(rename = "Job Seeker")]
    JobSeeker,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Employer => "Employer",
            UserType::JobSeeker => "Job Seeker",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user type '{0}'")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employer" => Ok(UserType::Employer),
            "Job Seeker" => Ok(UserType::JobSeeker),
            other => Err(UnknownUserType(other.to_string())),
        }
    }
}

impl TryFrom<String> for UserType {
    type Error = UnknownUserType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The role a request acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Employer,
    JobSeeker,
    Moderator,
}

impl Role {
    pub fn classify(user_type: UserType, is_moderator: bool) -> Self {
        if is_moderator {
            return Role::Moderator;
        }
        match user_type {
            UserType::Employer => Role::Employer,
            UserType::JobSeeker => Role::JobSeeker,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Employer => "employer",
            Role::JobSeeker => "job seeker",
            Role::Moderator => "moderator",
        };
        f.write_str(name)
    }
}

/// The authenticated caller as the permission gate sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
    pub profile_completed: bool,
}

impl Actor {
    pub fn new(id: Uuid, role: Role, profile_completed: bool) -> Self {
        Self {
            id,
            role,
            profile_completed,
        }
    }

    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderator_flag_wins() {
        assert_eq!(Role::classify(UserType::Employer, true), Role::Moderator);
        assert_eq!(Role::classify(UserType::JobSeeker, true), Role::Moderator);
    }

    #[test]
    fn test_user_type_decides_otherwise() {
        assert_eq!(Role::classify(UserType::Employer, false), Role::Employer);
        assert_eq!(Role::classify(UserType::JobSeeker, false), Role::JobSeeker);
    }

    #[test]
    fn test_user_type_round_trips_storage_text() {
        assert_eq!("Job Seeker".parse::<UserType>(), Ok(UserType::JobSeeker));
        assert_eq!(UserType::JobSeeker.as_str(), "Job Seeker");
        assert_eq!(
            serde_json::to_string(&UserType::JobSeeker).unwrap(),
            "\"Job Seeker\""
        );
    }

    #[test]
    fn test_unknown_user_type_is_rejected() {
        let err = "Recruiter".parse::<UserType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown user type 'Recruiter'");
    }
}
