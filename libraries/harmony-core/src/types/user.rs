/// User and room domain types
use serde::{Deserialize, Serialize};

/// Profile of the signed-in listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub nickname: String,

    /// Avatar icon tag
    pub avatar: String,

    /// Role granted by the secret code ("user", "admin", ...)
    pub role: String,

    /// Accent color associated with the user
    pub color: String,
}

impl UserProfile {
    /// Create a profile with the default avatar and accent color
    pub fn new(nickname: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            avatar: "user".to_string(),
            role: role.into(),
            color: "#ffcfe1".to_string(),
        }
    }
}

/// Member of a shared-listening room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMember {
    pub name: String,
    pub avatar: String,
    pub color: String,
}

impl From<&UserProfile> for RoomMember {
    fn from(user: &UserProfile) -> Self {
        Self {
            name: user.nickname.clone(),
            avatar: user.avatar.clone(),
            color: user.color.clone(),
        }
    }
}

/// A shared-listening room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier assigned by the catalog (or generated locally)
    pub id: String,

    /// Display name
    pub name: String,

    /// Join code shared with other listeners
    pub code: String,

    /// Optional room password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Nickname of the hosting user
    pub host: String,

    /// Current members, host first
    #[serde(default)]
    pub members: Vec<RoomMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_from_profile_copies_display_fields() {
        let user = UserProfile {
            nickname: "Dana".into(),
            avatar: "cat".into(),
            role: "user".into(),
            color: "#ffb6d0".into(),
        };
        let member = RoomMember::from(&user);
        assert_eq!(member.name, "Dana");
        assert_eq!(member.avatar, "cat");
        assert_eq!(member.color, "#ffb6d0");
    }
}
