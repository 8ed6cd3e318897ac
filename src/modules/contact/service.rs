use tracing::{info, instrument};

use hireboard_core::{Action, AppError, PaginationMeta, PaginationParams, Resource};
use hireboard_db::JobBoardStore;
use hireboard_models::{
    ContactMessage, CreateContactMessageDto, NewContactMessage, PaginatedContactMessagesResponse,
};

use crate::metrics::track_record_created;
use crate::middleware::auth::AuthUser;

pub struct ContactService;

impl ContactService {
    /// Stores a message from the public contact form. The body is already
    /// validated by the extractor.
    #[instrument(skip(store, dto))]
    pub async fn create_message(
        store: &dyn JobBoardStore,
        dto: CreateContactMessageDto,
    ) -> Result<ContactMessage, AppError> {
        let message = store
            .insert_contact_message(NewContactMessage::from(dto))
            .await?;

        info!(message_id = %message.id, "Contact message received");
        track_record_created("contact_message");

        Ok(message)
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn list_messages(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        pagination: PaginationParams,
    ) -> Result<PaginatedContactMessagesResponse, AppError> {
        auth_user.authorize(Action::View, Resource::ContactMessage)?;

        let page = store.list_contact_messages(&pagination).await?;

        Ok(PaginatedContactMessagesResponse {
            meta: PaginationMeta::new(&pagination, page.total),
            data: page.items,
        })
    }
}
