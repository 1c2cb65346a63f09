use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct SessionGateway {
    session: SqlxSession,
}

impl SessionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SessionWriter for SessionGateway {
    async fn insert(&self, session: Session) -> AppResult<Id<Session>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO sessions
                                (id, user_id, created_at)
                            VALUES
                                ($1, $2, $3)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&session.id.value)
                    .bind(&session.user_id.value)
                    .bind(&session.created_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, session_id: &Id<Session>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    sqlx::query("DELETE FROM sessions WHERE id = $1")
                        .bind(&session_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM sessions WHERE user_id = $1")
                        .bind(&user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl SessionReader for SessionGateway {
    async fn find_by_id(&self, session_id: &Id<Session>) -> AppResult<Option<Session>> {
        self.session
            .with_tx(|tx| {
                let session_id = session_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, created_at
                            FROM
                                sessions
                            WHERE id = $1
                        "#,
                    )
                    .bind(&session_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    match result {
                        Some(row) => Ok(Some(Session {
                            id: Id::new(row.try_get("id")?),
                            user_id: Id::new(row.try_get("user_id")?),
                            created_at: row.try_get("created_at")?,
                        })),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}
