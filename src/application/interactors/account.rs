use std::sync::Arc;

use tracing::info;

use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::post::PostWriter;
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::application::interface::gateway::session::SessionWriter;
use crate::application::interface::gateway::user::UserWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// Removes a user together with their posts, profile and open sessions, all
/// inside one transaction.
#[derive(Clone)]
pub struct DeleteAccountInteractor {
    db_session: Arc<dyn DBSession>,
    post_writer: Arc<dyn PostWriter>,
    profile_writer: Arc<dyn ProfileWriter>,
    session_writer: Arc<dyn SessionWriter>,
    user_writer: Arc<dyn UserWriter>,
}

impl DeleteAccountInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_writer: Arc<dyn PostWriter>,
        profile_writer: Arc<dyn ProfileWriter>,
        session_writer: Arc<dyn SessionWriter>,
        user_writer: Arc<dyn UserWriter>,
    ) -> Self {
        Self {
            db_session,
            post_writer,
            profile_writer,
            session_writer,
            user_writer,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.post_writer.delete_by_user_id(&user_id).await?;
        self.profile_writer.delete_by_user_id(&user_id).await?;
        self.session_writer.delete_by_user_id(&user_id).await?;
        self.user_writer.delete(&user_id).await?;
        self.db_session.commit().await?;
        info!("Account {} deleted", user_id.value);
        Ok(())
    }
}
