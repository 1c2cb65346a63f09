use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use url::Url;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddEducationDTO, AddExperienceDTO, ProfileDTO, ProfileWithUserDTO, RemoveEntryDTO,
    UpsertProfileDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile, SocialLinks};
use crate::domain::entities::user::User;

/// Canonicalizes a user-supplied link: force https, strip the trailing
/// slash. Empty input stays empty; unparseable input is stored as typed
/// since these fields are display-only.
pub fn canonicalize_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    match Url::parse(&with_scheme) {
        Ok(mut url) => {
            // Fails for non-special schemes; those keep their scheme and
            // only lose the trailing slash.
            url.set_scheme("https").ok();
            url.to_string().trim_end_matches('/').to_string()
        }
        Err(_) => raw.trim_end_matches('/').to_string(),
    }
}

#[derive(Clone)]
pub struct UpsertProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpsertProfileInteractor {
    pub fn new(db_session: Arc<dyn DBSession>, profile_writer: Arc<dyn ProfileWriter>) -> Self {
        Self {
            db_session,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpsertProfileDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let profile = Profile {
            // Discarded when a profile already exists for the user; the
            // stored row keeps its id.
            id: Id::generate(),
            user_id,
            company: dto.company,
            website: canonicalize_url(&dto.website),
            location: dto.location,
            bio: dto.bio,
            status: dto.status,
            github_username: dto.github_username,
            skills: dto.skills,
            social: SocialLinks {
                youtube: canonicalize_url(&dto.social.youtube),
                twitter: canonicalize_url(&dto.social.twitter),
                facebook: canonicalize_url(&dto.social.facebook),
                linkedin: canonicalize_url(&dto.social.linkedin),
                instagram: canonicalize_url(&dto.social.instagram),
            },
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: Utc::now(),
        };
        let stored = self.profile_writer.upsert(profile).await?;
        self.db_session.commit().await?;
        info!("Profile upserted for user {}", stored.user_id.value);
        Ok(stored.into())
    }
}

#[derive(Clone)]
pub struct GetCurrentProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetCurrentProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileWithUserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let record = self
            .profile_reader
            .find_with_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(record.into())
    }
}

#[derive(Clone)]
pub struct ListProfilesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl ListProfilesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<ProfileWithUserDTO>> {
        let records = self.profile_reader.list_with_user().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone)]
pub struct GetProfileByUserInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileByUserInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<ProfileWithUserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let record = self
            .profile_reader
            .find_with_user(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(record.into())
    }
}

#[derive(Clone)]
pub struct AddExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddExperienceDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        // No auto-create: adding an entry requires an existing profile.
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        profile.add_experience(Experience {
            id: Id::generate(),
            title: dto.title,
            company: dto.company,
            location: dto.location,
            from: dto.from,
            to: dto.to,
            current: dto.current,
            description: dto.description,
        });
        self.profile_writer.save_entries(&profile).await?;
        self.db_session.commit().await?;
        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct RemoveExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveEntryDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        // An id that does not even parse cannot match an entry; removal of
        // an unknown id is a silent no-op either way.
        if let Ok(entry_id) = Id::<Experience>::try_from(dto.entry_id) {
            profile.remove_experience(&entry_id);
        }
        self.profile_writer.save_entries(&profile).await?;
        self.db_session.commit().await?;
        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct AddEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddEducationDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        profile.add_education(Education {
            id: Id::generate(),
            school: dto.school,
            degree: dto.degree,
            field_of_study: dto.field_of_study,
            from: dto.from,
            to: dto.to,
            current: dto.current,
            description: dto.description,
        });
        self.profile_writer.save_entries(&profile).await?;
        self.db_session.commit().await?;
        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct RemoveEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveEntryDTO) -> AppResult<ProfileDTO> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        if let Ok(entry_id) = Id::<Education>::try_from(dto.entry_id) {
            profile.remove_education(&entry_id);
        }
        self.profile_writer.save_entries(&profile).await?;
        self.db_session.commit().await?;
        Ok(profile.into())
    }
}
