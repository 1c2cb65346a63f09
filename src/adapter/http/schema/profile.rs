use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::dto::profile::{
    EducationDTO, ExperienceDTO, ProfileDTO, ProfileWithUserDTO, SocialDTO,
};

/// Skills arrive either as a JSON array or as one comma-separated string;
/// both collapse to a trimmed list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SkillsField {
    List(Vec<String>),
    Text(String),
}

impl SkillsField {
    pub fn normalized(&self) -> Vec<String> {
        let items: Vec<String> = match self {
            SkillsField::List(list) => list.clone(),
            SkillsField::Text(text) => text.split(',').map(str::to_string).collect(),
        };
        items
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect()
    }
}

fn has_skills(skills: &SkillsField) -> Result<(), ValidationError> {
    if skills.normalized().is_empty() {
        return Err(ValidationError::new("skills_empty"));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SocialRequest {
    pub youtube: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    #[validate(custom(function = "has_skills", message = "Skills is required"))]
    pub skills: SkillsField,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub github_username: String,
    #[serde(default)]
    pub social: SocialRequest,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(required(message = "From date is required"))]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddEducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub field_of_study: String,
    #[validate(required(message = "From date is required"))]
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialResponse {
    pub youtube: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub website: String,
    pub location: String,
    pub bio: String,
    pub status: String,
    pub github_username: String,
    pub skills: Vec<String>,
    pub social: SocialResponse,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileUserResponse {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileWithUserResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub user: ProfileUserResponse,
}

impl From<SocialDTO> for SocialResponse {
    fn from(dto: SocialDTO) -> Self {
        Self {
            youtube: dto.youtube,
            twitter: dto.twitter,
            facebook: dto.facebook,
            linkedin: dto.linkedin,
            instagram: dto.instagram,
        }
    }
}

impl From<ExperienceDTO> for ExperienceResponse {
    fn from(dto: ExperienceDTO) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            company: dto.company,
            location: dto.location,
            from: dto.from,
            to: dto.to,
            current: dto.current,
            description: dto.description,
        }
    }
}

impl From<EducationDTO> for EducationResponse {
    fn from(dto: EducationDTO) -> Self {
        Self {
            id: dto.id,
            school: dto.school,
            degree: dto.degree,
            field_of_study: dto.field_of_study,
            from: dto.from,
            to: dto.to,
            current: dto.current,
            description: dto.description,
        }
    }
}

impl From<ProfileDTO> for ProfileResponse {
    fn from(dto: ProfileDTO) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            company: dto.company,
            website: dto.website,
            location: dto.location,
            bio: dto.bio,
            status: dto.status,
            github_username: dto.github_username,
            skills: dto.skills,
            social: dto.social.into(),
            experience: dto.experience.into_iter().map(Into::into).collect(),
            education: dto.education.into_iter().map(Into::into).collect(),
            updated_at: dto.updated_at,
        }
    }
}

impl From<ProfileWithUserDTO> for ProfileWithUserResponse {
    fn from(dto: ProfileWithUserDTO) -> Self {
        Self {
            profile: dto.profile.into(),
            user: ProfileUserResponse {
                name: dto.user_name,
                avatar: dto.user_avatar,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use validator::Validate;

    use super::{AddExperienceRequest, SkillsField, UpsertProfileRequest};

    #[rstest]
    fn test_skills_from_array() {
        let skills: SkillsField = serde_json::from_value(json!(["rust", " sql ", ""])).unwrap();
        assert_eq!(skills.normalized(), vec!["rust", "sql"]);
    }

    #[rstest]
    fn test_skills_from_comma_string() {
        let skills: SkillsField =
            serde_json::from_value(json!("rust, sql,,  axum ")).unwrap();
        assert_eq!(skills.normalized(), vec!["rust", "sql", "axum"]);
    }

    #[rstest]
    fn test_skills_serialize_untagged() {
        let list: SkillsField = serde_json::from_value(json!(["rust", "sql"])).unwrap();
        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["rust", "sql"]));

        let text: SkillsField = serde_json::from_value(json!("rust, sql")).unwrap();
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("rust, sql"));
    }

    #[rstest]
    fn test_profile_requires_status_and_skills() {
        let request: UpsertProfileRequest = serde_json::from_value(json!({
            "status": "",
            "skills": ", ,"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
        assert!(errors.field_errors().contains_key("skills"));
    }

    #[rstest]
    fn test_experience_requires_from_date() {
        let request: AddExperienceRequest = serde_json::from_value(json!({
            "title": "Engineer",
            "company": "Initech"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("from"));
    }

    #[rstest]
    fn test_profile_minimal_valid() {
        let request: UpsertProfileRequest = serde_json::from_value(json!({
            "status": "Developer",
            "skills": ["rust"]
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert!(request.company.is_empty());
    }
}
