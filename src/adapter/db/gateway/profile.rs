use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{
    Education, Experience, Profile, ProfileWithUser, SocialLinks,
};
use crate::domain::entities::user::User;

/// Profiles keep their experience/education lists and social links embedded
/// in the row (JSONB), mirroring the one-document-per-profile shape the API
/// exposes.
#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

const PROFILE_COLUMNS: &str = r#"
    p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
    p.github_username, p.skills, p.social, p.experience, p.education,
    p.updated_at
"#;

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_profile(row: &PgRow) -> AppResult<Profile> {
        let social: Json<SocialLinks> = row.try_get("social")?;
        let experience: Json<Vec<Experience>> = row.try_get("experience")?;
        let education: Json<Vec<Education>> = row.try_get("education")?;
        Ok(Profile {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            company: row.try_get("company")?,
            website: row.try_get("website")?,
            location: row.try_get("location")?,
            bio: row.try_get("bio")?,
            status: row.try_get("status")?,
            github_username: row.try_get("github_username")?,
            skills: row.try_get("skills")?,
            social: social.0,
            experience: experience.0,
            education: education.0,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn map_profile_with_user(row: &PgRow) -> AppResult<ProfileWithUser> {
        Ok(ProfileWithUser {
            profile: Self::map_profile(row)?,
            user_name: row.try_get("user_name")?,
            user_avatar: row.try_get("user_avatar")?,
        })
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn upsert(&self, profile: Profile) -> AppResult<Profile> {
        self.session
            .with_tx(|tx| {
                async move {
                    // Entry lists are deliberately absent from the UPDATE
                    // arm: re-submitting the profile form must not wipe
                    // them.
                    let row = sqlx::query(&format!(
                        r#"
                            INSERT INTO profiles AS p
                                (id, user_id, company, website, location, bio, status,
                                 github_username, skills, social, experience, education,
                                 updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                            ON CONFLICT (user_id) DO UPDATE SET
                                company = EXCLUDED.company,
                                website = EXCLUDED.website,
                                location = EXCLUDED.location,
                                bio = EXCLUDED.bio,
                                status = EXCLUDED.status,
                                github_username = EXCLUDED.github_username,
                                skills = EXCLUDED.skills,
                                social = EXCLUDED.social,
                                updated_at = EXCLUDED.updated_at
                            RETURNING
                                {PROFILE_COLUMNS}
                        "#,
                    ))
                    .bind(&profile.id.value)
                    .bind(&profile.user_id.value)
                    .bind(&profile.company)
                    .bind(&profile.website)
                    .bind(&profile.location)
                    .bind(&profile.bio)
                    .bind(&profile.status)
                    .bind(&profile.github_username)
                    .bind(&profile.skills)
                    .bind(Json(&profile.social))
                    .bind(Json(&profile.experience))
                    .bind(Json(&profile.education))
                    .bind(&profile.updated_at)
                    .fetch_one(tx.as_mut())
                    .await?;

                    Self::map_profile(&row)
                }
                .boxed()
            })
            .await
    }

    async fn save_entries(&self, profile: &Profile) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = profile.user_id.value;
                let experience = profile.experience.clone();
                let education = profile.education.clone();
                let updated_at = profile.updated_at;
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                experience = $2, education = $3, updated_at = $4
                            WHERE
                                user_id = $1
                        "#,
                    )
                    .bind(&user_id)
                    .bind(Json(&experience))
                    .bind(Json(&education))
                    .bind(&updated_at)
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
                    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
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
impl ProfileReader for ProfileGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(&format!(
                        r#"
                            SELECT
                                {PROFILE_COLUMNS}
                            FROM
                                profiles p
                            WHERE p.user_id = $1
                        "#,
                    ))
                    .bind(&user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.as_ref().map(Self::map_profile).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_with_user(&self, user_id: &Id<User>) -> AppResult<Option<ProfileWithUser>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(&format!(
                        r#"
                            SELECT
                                {PROFILE_COLUMNS},
                                u.name AS user_name, u.avatar AS user_avatar
                            FROM
                                profiles p
                                JOIN users u ON u.id = p.user_id
                            WHERE p.user_id = $1
                        "#,
                    ))
                    .bind(&user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.as_ref().map(Self::map_profile_with_user).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn list_with_user(&self) -> AppResult<Vec<ProfileWithUser>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(&format!(
                        r#"
                            SELECT
                                {PROFILE_COLUMNS},
                                u.name AS user_name, u.avatar AS user_avatar
                            FROM
                                profiles p
                                JOIN users u ON u.id = p.user_id
                            ORDER BY p.updated_at DESC
                        "#,
                    ))
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::map_profile_with_user).collect()
                }
                .boxed()
            })
            .await
    }
}
