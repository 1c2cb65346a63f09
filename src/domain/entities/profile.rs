use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{id::Id, user::User};

/// One profile per user. `experience` and `education` are embedded lists
/// kept newest-first: new entries go to index 0.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub company: String,
    pub website: String,
    pub location: String,
    pub bio: String,
    pub status: String,
    pub github_username: String,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub youtube: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Id<Experience>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Id<Education>,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: String,
}

impl Profile {
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Removing an unknown id leaves the list unchanged; callers treat that
    /// as success.
    pub fn remove_experience(&mut self, entry_id: &Id<Experience>) {
        self.experience.retain(|entry| &entry.id != entry_id);
    }

    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    pub fn remove_education(&mut self, entry_id: &Id<Education>) {
        self.education.retain(|entry| &entry.id != entry_id);
    }
}

/// Profile joined with the owning user's display fields, for public reads.
#[derive(Debug, Clone)]
pub struct ProfileWithUser {
    pub profile: Profile,
    pub user_name: String,
    pub user_avatar: String,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{Education, Experience, Profile, SocialLinks};
    use crate::domain::entities::id::Id;

    fn empty_profile() -> Profile {
        Profile {
            id: Id::generate(),
            user_id: Id::generate(),
            company: String::new(),
            website: String::new(),
            location: String::new(),
            bio: String::new(),
            status: "Developer".to_string(),
            github_username: String::new(),
            skills: vec!["rust".to_string()],
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    fn experience(title: &str) -> Experience {
        Experience {
            id: Id::generate(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: String::new(),
            from: Utc::now(),
            to: None,
            current: true,
            description: String::new(),
        }
    }

    fn education(school: &str) -> Education {
        Education {
            id: Id::generate(),
            school: school.to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            from: Utc::now(),
            to: None,
            current: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_add_experience_prepends() {
        let mut profile = empty_profile();
        profile.add_experience(experience("first"));
        profile.add_experience(experience("second"));

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "second");
        assert_eq!(profile.experience[1].title, "first");
    }

    #[test]
    fn test_remove_experience_by_id() {
        let mut profile = empty_profile();
        profile.add_experience(experience("keep"));
        profile.add_experience(experience("drop"));
        let drop_id = profile.experience[0].id.clone();

        profile.remove_experience(&drop_id);

        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "keep");
    }

    #[test]
    fn test_remove_experience_unknown_id_is_noop() {
        let mut profile = empty_profile();
        profile.add_experience(experience("only"));

        profile.remove_experience(&Id::generate());

        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "only");
    }

    #[test]
    fn test_add_education_prepends() {
        let mut profile = empty_profile();
        profile.add_education(education("first"));
        profile.add_education(education("second"));

        assert_eq!(profile.education[0].school, "second");
    }

    #[test]
    fn test_remove_education_unknown_id_is_noop() {
        let mut profile = empty_profile();
        profile.add_education(education("only"));

        profile.remove_education(&Id::generate());

        assert_eq!(profile.education.len(), 1);
    }
}
