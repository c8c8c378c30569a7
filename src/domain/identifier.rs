use crate::error::{ProfileError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const STEAM64_LEN: usize = 17;

/// Identifies a community profile either by its numeric account id or by
/// the custom name used in its vanity URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserId {
    Steam64(String),
    Vanity(String),
}

impl UserId {
    pub fn steam64(id: &str) -> Result<Self> {
        let id = id.trim();
        if id.len() != STEAM64_LEN || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ProfileError::InvalidIdentifier(format!(
                "'{id}' is not a {STEAM64_LEN}-digit Steam64 id"
            )));
        }
        Ok(Self::Steam64(id.to_string()))
    }

    pub fn vanity(name: &str) -> Result<Self> {
        let name = name.trim();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ProfileError::InvalidIdentifier(format!(
                "'{name}' is not a valid vanity name"
            )));
        }
        Ok(Self::Vanity(name.to_string()))
    }

    /// Path of the profile root relative to the community base URL,
    /// always with a trailing slash.
    pub fn profile_path(&self) -> String {
        match self {
            Self::Steam64(id) => format!("profiles/{id}/"),
            Self::Vanity(name) => format!("id/{name}/"),
        }
    }
}

impl FromStr for UserId {
    type Err = ProfileError;

    /// All-digit input must be a Steam64 id; anything else is read as a
    /// vanity name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            Self::steam64(s)
        } else {
            Self::vanity(s)
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steam64(id) => write!(f, "{id}"),
            Self::Vanity(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_seventeen_digit_ids() {
        let user: UserId = "76561198069463927".parse().unwrap();
        assert_eq!(user, UserId::Steam64("76561198069463927".to_string()));
        assert_eq!(user.profile_path(), "profiles/76561198069463927/");
    }

    #[test]
    fn rejects_numeric_ids_of_wrong_length() {
        for bad in ["7656119806946392", "765611980694639270", "1"] {
            assert!(matches!(
                bad.parse::<UserId>(),
                Err(ProfileError::InvalidIdentifier(_))
            ));
        }
    }

    #[test]
    fn vanity_names() {
        let user: UserId = "gabe_newell-1".parse().unwrap();
        assert_eq!(user.profile_path(), "id/gabe_newell-1/");
        assert!(UserId::vanity("").is_err());
        assert!(UserId::vanity("bad name").is_err());
        assert!(UserId::vanity("../admin").is_err());
    }
}
