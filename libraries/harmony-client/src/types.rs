//! Wire types for the catalog API.
//!
//! The backend grew out of a JavaScript prototype, so some responses carry
//! numeric identifiers and millisecond timestamps. These records absorb
//! that looseness at the edge and convert into the strict core types.

use chrono::{DateTime, TimeZone, Utc};
use harmony_core::{Playlist, PlaylistId, Room, RoomMember, SourceRef, Track, TrackId, UserProfile};
use serde::{Deserialize, Serialize};

/// Accept identifiers sent either as JSON strings or numbers.
mod lenient_id {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number identifier, got {other}"
            ))),
        }
    }

    pub fn string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Value>::deserialize(deserializer)?;
        values
            .into_iter()
            .map(|value| match value {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(serde::de::Error::custom(format!(
                    "expected string or number identifier, got {other}"
                ))),
            })
            .collect()
    }
}

// ===== Auth =====

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "secretCode")]
    pub secret_code: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
}

/// Successful login converted into core types
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub nickname: String,
    #[serde(default = "defaults::avatar")]
    pub avatar: String,
    #[serde(default = "defaults::role")]
    pub role: String,
    #[serde(default = "defaults::color")]
    pub color: String,
}

mod defaults {
    pub fn avatar() -> String {
        "user".to_string()
    }

    pub fn role() -> String {
        "user".to_string()
    }

    pub fn color() -> String {
        "#ffcfe1".to_string()
    }
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            nickname: record.nickname,
            avatar: record.avatar,
            role: record.role,
            color: record.color,
        }
    }
}

impl From<&UserProfile> for UserRecord {
    fn from(user: &UserProfile) -> Self {
        Self {
            nickname: user.nickname.clone(),
            avatar: user.avatar.clone(),
            role: user.role.clone(),
            color: user.color.clone(),
        }
    }
}

// ===== Songs =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongRecord {
    #[serde(deserialize_with = "lenient_id::string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    /// Duration in seconds
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub demo: bool,
}

impl From<SongRecord> for Track {
    fn from(record: SongRecord) -> Self {
        Self {
            id: TrackId::new(record.id),
            title: record.title,
            artist: record.artist,
            duration_secs: record.duration,
            source: record.url.map(SourceRef::Url),
            color: record.color,
            demo: record.demo,
        }
    }
}

/// Payload for registering an uploaded song
#[derive(Debug, Clone, Serialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    /// Duration in seconds
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&Track> for NewSong {
    fn from(track: &Track) -> Self {
        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            duration: track.duration_secs,
            url: track.source.as_ref().map(|s| s.as_str().to_string()),
            color: track.color.clone(),
        }
    }
}

// ===== Playlists =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRecord {
    #[serde(deserialize_with = "lenient_id::string")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_id::string_vec")]
    pub songs: Vec<String>,
    /// Creation time in milliseconds since the epoch
    #[serde(default, rename = "created")]
    pub created_ms: i64,
}

impl From<PlaylistRecord> for Playlist {
    fn from(record: PlaylistRecord) -> Self {
        let created_at = millis_to_datetime(record.created_ms);
        Self {
            id: PlaylistId::new(record.id),
            name: record.name,
            description: record.description,
            tracks: record.songs.into_iter().map(TrackId::new).collect(),
            created_at,
            color: None,
        }
    }
}

fn millis_to_datetime(ms: i64) -> DateTime<Utc> {
    if ms > 0 {
        Utc.timestamp_millis_opt(ms).single().unwrap_or_else(Utc::now)
    } else {
        Utc::now()
    }
}

/// Payload for creating or updating a playlist
#[derive(Debug, Clone, Serialize)]
pub struct NewPlaylist {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ===== Rooms =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    #[serde(default = "defaults::avatar")]
    pub avatar: String,
    #[serde(default = "defaults::color")]
    pub color: String,
}

impl From<MemberRecord> for RoomMember {
    fn from(record: MemberRecord) -> Self {
        Self {
            name: record.name,
            avatar: record.avatar,
            color: record.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomRecord {
    #[serde(deserialize_with = "lenient_id::string")]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
}

impl From<RoomRecord> for Room {
    fn from(record: RoomRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            code: record.code,
            password: record.password,
            host: record.host,
            members: record.members.into_iter().map(RoomMember::from).collect(),
        }
    }
}

/// Payload for creating a room
#[derive(Debug, Clone, Serialize)]
pub struct NewRoom {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Payload for joining a room
#[derive(Debug, Clone, Serialize)]
pub struct JoinRoom {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
