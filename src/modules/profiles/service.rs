use anyhow::anyhow;
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

use hireboard_core::{Action, AppError, PaginationMeta, Resource};
use hireboard_db::JobBoardStore;
use hireboard_models::{
    PaginatedProfilesResponse, ProfileDocuments, ProfileFilterParams, ProfileResponse,
    UpdateDocumentsDto, UpsertProfileDto,
};

use crate::metrics::track_record_created;
use crate::middleware::auth::AuthUser;

pub struct ProfileService;

fn profile_not_found() -> AppError {
    AppError::not_found(anyhow!("Profile not found"))
}

impl ProfileService {
    /// Creates or overwrites the caller's profile. `action` is `Create` for
    /// `POST /` and `Update` for `PUT /me`; both land on the same record.
    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn upsert_profile(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        action: Action,
        dto: UpsertProfileDto,
    ) -> Result<ProfileResponse, AppError> {
        auth_user.authorize(
            action,
            Resource::UserProfile {
                owner: Some(auth_user.id()),
            },
        )?;
        dto.validate()?;

        let (name, fields) = dto.into_parts();
        let view = store.upsert_profile(auth_user.id(), name, fields).await?;

        info!(profile_id = %view.profile.id, "Profile saved");
        if action == Action::Create {
            track_record_created("profile");
        }

        Ok(ProfileResponse::from(view))
    }

    /// Profiles have no delete transition: the gate denies every caller.
    #[instrument(skip(auth_user), fields(user_id = %auth_user.id()))]
    pub async fn delete_profile(
        auth_user: &AuthUser,
        id: Uuid,
    ) -> Result<(), AppError> {
        debug!(profile_id = %id, "profile delete requested");
        auth_user.authorize(Action::Delete, Resource::UserProfile { owner: None })
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn list_profiles(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        filters: ProfileFilterParams,
    ) -> Result<PaginatedProfilesResponse, AppError> {
        auth_user.authorize(Action::View, Resource::UserProfile { owner: None })?;

        let filter = filters.into_filter(auth_user.id());
        let page = store.list_profiles(&filter).await?;

        Ok(PaginatedProfilesResponse {
            meta: PaginationMeta::new(&filter.pagination, page.total),
            data: page.items.into_iter().map(ProfileResponse::from).collect(),
        })
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn get_profile(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
    ) -> Result<ProfileResponse, AppError> {
        let view = store
            .find_profile(id, Some(auth_user.id()))
            .await?
            .ok_or_else(profile_not_found)?;

        auth_user.authorize(
            Action::View,
            Resource::UserProfile {
                owner: Some(view.profile.user_id),
            },
        )?;

        Ok(ProfileResponse::from(view))
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn my_profile(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
    ) -> Result<ProfileResponse, AppError> {
        let view = store
            .find_profile_by_user(auth_user.id())
            .await?
            .ok_or_else(profile_not_found)?;

        Ok(ProfileResponse::from(view))
    }

    /// Attaches document references. A resume completes the profile.
    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn update_documents(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        dto: UpdateDocumentsDto,
    ) -> Result<ProfileResponse, AppError> {
        auth_user.authorize(
            Action::Update,
            Resource::UserProfile {
                owner: Some(auth_user.id()),
            },
        )?;
        dto.validate()?;

        let documents = ProfileDocuments::from(dto);
        if documents.is_empty() {
            return Err(AppError::unprocessable(anyhow!(
                "Provide at least one of resume, profile_picture or cover_letter"
            )));
        }

        let view = store
            .set_profile_documents(auth_user.id(), &documents)
            .await?
            .ok_or_else(profile_not_found)?;

        info!(
            profile_id = %view.profile.id,
            resume = documents.resume.is_some(),
            "Profile documents updated"
        );

        Ok(ProfileResponse::from(view))
    }

    /// Adds or removes a profile from the caller's favorites.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn set_favorite(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
        favorite: bool,
    ) -> Result<ProfileResponse, AppError> {
        auth_user.authorize(Action::Favorite, Resource::UserProfile { owner: None })?;

        store
            .find_profile(id, None)
            .await?
            .ok_or_else(profile_not_found)?;

        store.set_favorite(auth_user.id(), id, favorite).await?;

        let view = store
            .find_profile(id, Some(auth_user.id()))
            .await?
            .ok_or_else(profile_not_found)?;

        Ok(ProfileResponse::from(view))
    }
}
