//! The permission gate.
//!
//! [`authorize`] is a pure function of the caller, the action and the
//! resource being acted on. It never touches storage: handlers fetch the
//! record first and pass its owner in.
//!
//! ```ignore
//! use hireboard_core::permissions::{Action, Resource, authorize};
//!
//! let job = store.find_job(id, false).await?.ok_or_else(not_found)?;
//! authorize(&actor, Action::Update, Resource::Job { employer: Some(job.employer_id) })
//!     .into_result()?;
//! ```

use std::fmt;

use uuid::Uuid;

use crate::errors::AppError;
use crate::roles::{Actor, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Delete,
    View,
    Favorite,
}

impl Action {
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::View => "view",
            Action::Favorite => "favorite",
        }
    }
}

/// A resource together with the identity that owns it, when known.
///
/// Owners are `None` for collection-level actions such as create or list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Job { employer: Option<Uuid> },
    Company { creator: Option<Uuid> },
    UserProfile { owner: Option<Uuid> },
    /// `employer` is the employer of the job applied to, `applicant` the
    /// identity behind the applying profile. Viewing requires the side the
    /// caller is on: `employer` for the recruiter listing, `applicant` for
    /// the seeker's own applications.
    Application {
        employer: Option<Uuid>,
        applicant: Option<Uuid>,
    },
    /// The application counters of one job seeker.
    ApplicationStats { applicant: Option<Uuid> },
    ContactMessage,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Job { .. } => "job",
            Resource::Company { .. } => "company",
            Resource::UserProfile { .. } => "user profile",
            Resource::Application { .. } => "application",
            Resource::ApplicationStats { .. } => "application summary",
            Resource::ContactMessage => "contact message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(String),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Maps a deny to a 403 carrying the reason.
    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(AppError::forbidden(anyhow::anyhow!(reason))),
        }
    }
}

pub fn deny_reason(action: Action, resource: &Resource) -> String {
    format!(
        "You don't have permissions to {} a {}",
        action.verb(),
        resource.name()
    )
}

fn owns(actor: &Actor, owner: Option<Uuid>) -> bool {
    owner == Some(actor.id)
}

fn allowed(actor: &Actor, action: Action, resource: &Resource) -> bool {
    use Action::*;

    let moderator = actor.role == Role::Moderator;

    match (resource, action) {
        (Resource::Job { .. } | Resource::Company { .. }, Update | Delete) if moderator => true,

        (Resource::Job { .. }, Create) => match actor.role {
            Role::Employer => actor.profile_completed,
            Role::JobSeeker | Role::Moderator => false,
        },
        (Resource::Job { employer }, Update | Delete) => owns(actor, *employer),
        (Resource::Job { .. }, View) => true,
        (Resource::Job { .. }, Favorite) => false,

        (Resource::Company { .. }, Create) => match actor.role {
            Role::Employer => true,
            Role::JobSeeker | Role::Moderator => false,
        },
        (Resource::Company { creator }, Update | Delete) => owns(actor, *creator),
        (Resource::Company { .. }, View) => true,
        (Resource::Company { .. }, Favorite) => false,

        (Resource::UserProfile { .. }, Create) => actor.role == Role::JobSeeker,
        (Resource::UserProfile { owner }, Update) => {
            actor.role == Role::JobSeeker && owner.is_none_or(|owner| owner == actor.id)
        }
        (Resource::UserProfile { .. }, Delete) => false,
        (Resource::UserProfile { owner }, View) => match actor.role {
            Role::Employer | Role::Moderator => true,
            Role::JobSeeker => owns(actor, *owner),
        },
        (Resource::UserProfile { .. }, Favorite) => actor.role == Role::Employer,

        (Resource::Application { .. }, Create) => match actor.role {
            Role::JobSeeker => actor.profile_completed,
            Role::Employer | Role::Moderator => false,
        },
        (Resource::Application { employer, applicant }, View) => match actor.role {
            Role::Moderator => true,
            Role::Employer => actor.profile_completed && owns(actor, *employer),
            Role::JobSeeker => actor.profile_completed && owns(actor, *applicant),
        },
        (Resource::Application { employer, .. }, Update) => match actor.role {
            Role::Moderator => true,
            Role::Employer => actor.profile_completed && owns(actor, *employer),
            Role::JobSeeker => false,
        },
        (Resource::Application { .. }, Delete | Favorite) => false,

        (Resource::ApplicationStats { applicant }, View) => {
            actor.role == Role::JobSeeker && owns(actor, *applicant)
        }
        (Resource::ApplicationStats { .. }, Create | Update | Delete | Favorite) => false,

        (Resource::ContactMessage, Create) => true,
        (Resource::ContactMessage, View) => moderator,
        (Resource::ContactMessage, Update | Delete | Favorite) => false,
    }
}

/// Decides whether `actor` may perform `action` on `resource`.
pub fn authorize(actor: &Actor, action: Action, resource: Resource) -> Decision {
    if allowed(actor, action, &resource) {
        return Decision::Allow;
    }

    tracing::debug!(
        actor_id = %actor.id,
        role = %actor.role,
        action = action.verb(),
        resource = resource.name(),
        "Permission denied"
    );
    Decision::Deny(deny_reason(action, &resource))
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => f.write_str("allow"),
            Decision::Deny(_) => f.write_str("deny"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: Role, completed: bool) -> Actor {
        Actor::new(Uuid::new_v4(), role, completed)
    }

    const ALL_ROLES: [Role; 3] = [Role::Employer, Role::JobSeeker, Role::Moderator];
    const ALL_ACTIONS: [Action; 5] = [
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::View,
        Action::Favorite,
    ];

    #[test]
    fn test_only_completed_employers_create_jobs() {
        for role in ALL_ROLES {
            for completed in [true, false] {
                let decision =
                    authorize(&actor(role, completed), Action::Create, Resource::Job { employer: None });
                let expected = role == Role::Employer && completed;
                assert_eq!(decision.is_allowed(), expected, "{role} completed={completed}");
            }
        }
    }

    #[test]
    fn test_job_mutation_requires_owner_or_moderator() {
        let owner = actor(Role::Employer, true);
        let job = Resource::Job {
            employer: Some(owner.id),
        };

        for action in [Action::Update, Action::Delete] {
            assert!(authorize(&owner, action, job).is_allowed());
            assert!(authorize(&actor(Role::Moderator, false), action, job).is_allowed());
            assert!(!authorize(&actor(Role::Employer, true), action, job).is_allowed());
            assert!(!authorize(&actor(Role::JobSeeker, true), action, job).is_allowed());
        }
    }

    #[test]
    fn test_company_create_does_not_need_completed_profile() {
        let employer = actor(Role::Employer, false);
        assert!(authorize(&employer, Action::Create, Resource::Company { creator: None }).is_allowed());
        assert!(
            !authorize(&actor(Role::JobSeeker, true), Action::Create, Resource::Company { creator: None })
                .is_allowed()
        );
        assert!(
            !authorize(&actor(Role::Moderator, true), Action::Create, Resource::Company { creator: None })
                .is_allowed()
        );
    }

    #[test]
    fn test_moderator_may_delete_any_company() {
        let company = Resource::Company {
            creator: Some(Uuid::new_v4()),
        };
        assert!(authorize(&actor(Role::Moderator, false), Action::Delete, company).is_allowed());
        assert!(!authorize(&actor(Role::Employer, true), Action::Delete, company).is_allowed());
    }

    #[test]
    fn test_profile_delete_is_always_denied() {
        for role in ALL_ROLES {
            let a = actor(role, true);
            let decision = authorize(&a, Action::Delete, Resource::UserProfile { owner: Some(a.id) });
            assert_eq!(
                decision,
                Decision::Deny("You don't have permissions to delete a user profile".to_string())
            );
        }
    }

    #[test]
    fn test_profile_upsert_is_job_seeker_only() {
        let seeker = actor(Role::JobSeeker, false);
        assert!(authorize(&seeker, Action::Create, Resource::UserProfile { owner: None }).is_allowed());
        assert!(
            authorize(&seeker, Action::Update, Resource::UserProfile { owner: Some(seeker.id) })
                .is_allowed()
        );
        assert!(
            !authorize(&seeker, Action::Update, Resource::UserProfile { owner: Some(Uuid::new_v4()) })
                .is_allowed()
        );
        assert!(
            !authorize(&actor(Role::Employer, true), Action::Create, Resource::UserProfile { owner: None })
                .is_allowed()
        );
    }

    #[test]
    fn test_profile_view_and_favorite() {
        let seeker = actor(Role::JobSeeker, true);
        let other = Resource::UserProfile {
            owner: Some(Uuid::new_v4()),
        };
        assert!(!authorize(&seeker, Action::View, other).is_allowed());
        assert!(authorize(&seeker, Action::View, Resource::UserProfile { owner: Some(seeker.id) }).is_allowed());
        assert!(authorize(&actor(Role::Employer, false), Action::View, other).is_allowed());
        assert!(authorize(&actor(Role::Employer, false), Action::Favorite, other).is_allowed());
        assert!(!authorize(&actor(Role::Moderator, false), Action::Favorite, other).is_allowed());
    }

    #[test]
    fn test_application_rules() {
        let seeker = actor(Role::JobSeeker, true);
        let employer = actor(Role::Employer, true);
        let application = Resource::Application {
            employer: Some(employer.id),
            applicant: Some(seeker.id),
        };

        assert!(authorize(&seeker, Action::Create, application).is_allowed());
        assert!(!authorize(&actor(Role::JobSeeker, false), Action::Create, application).is_allowed());
        assert!(authorize(&seeker, Action::View, application).is_allowed());
        assert!(!authorize(&seeker, Action::Update, application).is_allowed());

        assert!(authorize(&employer, Action::Update, application).is_allowed());
        assert!(!authorize(&actor(Role::Employer, true), Action::Update, application).is_allowed());
        assert!(authorize(&actor(Role::Moderator, false), Action::Update, application).is_allowed());

        let listing = Resource::Application {
            employer: Some(employer.id),
            applicant: None,
        };
        assert!(authorize(&employer, Action::View, listing).is_allowed());
        assert!(!authorize(&actor(Role::Employer, true), Action::View, listing).is_allowed());
        assert!(!authorize(&seeker, Action::View, listing).is_allowed());
        assert!(authorize(&actor(Role::Moderator, false), Action::View, listing).is_allowed());
    }

    #[test]
    fn test_application_view_is_scoped_to_the_callers_side() {
        let employer = actor(Role::Employer, true);
        let seeker_side = Resource::Application {
            employer: None,
            applicant: Some(Uuid::new_v4()),
        };
        assert!(!authorize(&employer, Action::View, seeker_side).is_allowed());

        let unfinished = actor(Role::JobSeeker, false);
        let own = Resource::Application {
            employer: None,
            applicant: Some(unfinished.id),
        };
        assert!(!authorize(&unfinished, Action::View, own).is_allowed());

        let seeker = actor(Role::JobSeeker, true);
        let own = Resource::Application {
            employer: None,
            applicant: Some(seeker.id),
        };
        assert!(authorize(&seeker, Action::View, own).is_allowed());
        assert!(!authorize(&actor(Role::JobSeeker, true), Action::View, own).is_allowed());
    }

    #[test]
    fn test_application_stats_are_job_seeker_only() {
        let seeker = actor(Role::JobSeeker, false);
        let stats = Resource::ApplicationStats {
            applicant: Some(seeker.id),
        };
        assert!(authorize(&seeker, Action::View, stats).is_allowed());

        for role in [Role::Employer, Role::Moderator] {
            let a = actor(role, true);
            let stats = Resource::ApplicationStats {
                applicant: Some(a.id),
            };
            assert_eq!(
                authorize(&a, Action::View, stats),
                Decision::Deny(
                    "You don't have permissions to view a application summary".to_string()
                )
            );
        }
    }

    #[test]
    fn test_contact_messages_are_moderator_only() {
        assert!(authorize(&actor(Role::Moderator, false), Action::View, Resource::ContactMessage).is_allowed());
        assert!(!authorize(&actor(Role::Employer, true), Action::View, Resource::ContactMessage).is_allowed());
        assert!(!authorize(&actor(Role::JobSeeker, true), Action::View, Resource::ContactMessage).is_allowed());
    }

    #[test]
    fn test_every_deny_uses_the_shared_reason() {
        let resources = [
            Resource::Job { employer: None },
            Resource::Company { creator: None },
            Resource::UserProfile { owner: None },
            Resource::Application {
                employer: None,
                applicant: None,
            },
            Resource::ApplicationStats { applicant: None },
            Resource::ContactMessage,
        ];

        for role in ALL_ROLES {
            let a = actor(role, false);
            for action in ALL_ACTIONS {
                for resource in resources {
                    if let Decision::Deny(reason) = authorize(&a, action, resource) {
                        assert_eq!(
                            reason,
                            format!(
                                "You don't have permissions to {} a {}",
                                action.verb(),
                                resource.name()
                            )
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_deny_maps_to_forbidden() {
        let err = authorize(&actor(Role::JobSeeker, true), Action::Create, Resource::Job { employer: None })
            .into_result()
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), "You don't have permissions to create a job");
    }
}
