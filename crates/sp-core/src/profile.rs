use crate::error::ProfileError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional user profile read by the composition root and used to seed
/// the demo store. A missing file means defaults; a malformed file is an
/// error rather than a silent fallback.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub weekly_minutes_target: Option<u32>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "Learner".to_string(),
            certifications: Vec::new(),
            weekly_minutes_target: None,
        }
    }
}

pub fn load_profile(base_dir: &Path) -> Result<Profile, ProfileError> {
    let profile_path = base_dir.join(".studyprep").join("profile.toml");
    let content = match fs::read_to_string(&profile_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Profile::default()),
        Err(err) => {
            return Err(ProfileError::Unreadable {
                message: err.to_string(),
            });
        }
    };
    toml::from_str(&content).map_err(|err| ProfileError::Malformed {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_profile() {
        let profile: Profile = toml::from_str(
            r#"
            display_name = "Dana"
            certifications = ["aws-saa", "az-104"]
            weekly_minutes_target = 300
            "#,
        )
        .unwrap();
        assert_eq!(profile.display_name, "Dana");
        assert_eq!(profile.certifications.len(), 2);
        assert_eq!(profile.weekly_minutes_target, Some(300));
    }

    #[test]
    fn optional_fields_default() {
        let profile: Profile = toml::from_str(r#"display_name = "Dana""#).unwrap();
        assert!(profile.certifications.is_empty());
        assert_eq!(profile.weekly_minutes_target, None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let base = std::env::temp_dir().join(format!("sp-{}", ulid::Ulid::new()));
        let profile = load_profile(&base).unwrap();
        assert_eq!(profile, Profile::default());
    }
}
