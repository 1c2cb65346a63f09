use chrono::{DateTime, Utc};

use crate::domain::entities::profile::{
    Education, Experience, Profile, ProfileWithUser, SocialLinks,
};

#[derive(Debug)]
pub struct UpsertProfileDTO {
    pub user_id: String,
    pub company: String,
    pub website: String,
    pub location: String,
    pub bio: String,
    pub status: String,
    pub github_username: String,
    /// Already shape-normalized at the boundary (array or comma string
    /// collapsed into a list); URL canonicalization happens in the
    /// interactor.
    pub skills: Vec<String>,
    pub social: SocialDTO,
}

#[derive(Debug, Default, Clone)]
pub struct SocialDTO {
    pub youtube: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

#[derive(Debug)]
pub struct AddExperienceDTO {
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug)]
pub struct AddEducationDTO {
    pub user_id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug)]
pub struct RemoveEntryDTO {
    pub user_id: String,
    pub entry_id: String,
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub website: String,
    pub location: String,
    pub bio: String,
    pub status: String,
    pub github_username: String,
    pub skills: Vec<String>,
    pub social: SocialDTO,
    pub experience: Vec<ExperienceDTO>,
    pub education: Vec<EducationDTO>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ExperienceDTO {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct EducationDTO {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ProfileWithUserDTO {
    pub profile: ProfileDTO,
    pub user_name: String,
    pub user_avatar: String,
}

impl From<SocialLinks> for SocialDTO {
    fn from(social: SocialLinks) -> Self {
        Self {
            youtube: social.youtube,
            twitter: social.twitter,
            facebook: social.facebook,
            linkedin: social.linkedin,
            instagram: social.instagram,
        }
    }
}

impl From<Experience> for ExperienceDTO {
    fn from(entry: Experience) -> Self {
        Self {
            id: entry.id.value.to_string(),
            title: entry.title,
            company: entry.company,
            location: entry.location,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

impl From<Education> for EducationDTO {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id.value.to_string(),
            school: entry.school,
            degree: entry.degree,
            field_of_study: entry.field_of_study,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

impl From<Profile> for ProfileDTO {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.value.to_string(),
            user_id: profile.user_id.value.to_string(),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            status: profile.status,
            github_username: profile.github_username,
            skills: profile.skills,
            social: profile.social.into(),
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            updated_at: profile.updated_at,
        }
    }
}

impl From<ProfileWithUser> for ProfileWithUserDTO {
    fn from(record: ProfileWithUser) -> Self {
        Self {
            profile: record.profile.into(),
            user_name: record.user_name,
            user_avatar: record.user_avatar,
        }
    }
}
