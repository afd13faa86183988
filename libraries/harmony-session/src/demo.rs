//! Seeded demo content
//!
//! Stand-in tracks, playlists and room members shown before a user has
//! added anything of their own. Demo tracks carry the `demo` flag so later
//! catalog syncs know they are replaceable.

use chrono::TimeZone;
use harmony_core::{Playlist, PlaylistId, Room, RoomMember, SourceRef, Track, TrackId};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Pastel palette used for track and avatar accents
pub const PASTEL_COLORS: [&str; 11] = [
    "#ffcfe1", "#ffb6d0", "#ffa8d9", "#ff9ac8", "#ff8cb7", "#ff7ea6", "#ff7095", "#ff6284",
    "#ffd9e6", "#ffe6f0", "#fff0f7",
];

/// Pick a random accent color from the pastel palette
pub fn random_pastel_color() -> String {
    PASTEL_COLORS
        .choose(&mut thread_rng())
        .copied()
        .unwrap_or(PASTEL_COLORS[0])
        .to_string()
}

fn demo_track(id: &str, title: &str, artist: &str, duration_secs: f64, color: &str) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        duration_secs,
        source: Some(SourceRef::Url(format!(
            "https://cdn.harmony.example/demo/{id}.mp3"
        ))),
        color: Some(color.to_string()),
        demo: true,
    }
}

/// Built-in demo queue, used when the catalog is unreachable
pub fn demo_tracks() -> Vec<Track> {
    vec![
        demo_track("demo-sunrise", "Sunrise Drive", "Mira Vale", 212.0, "#ffcfe1"),
        demo_track("demo-glass", "Glass Gardens", "Northlight", 187.0, "#ffb6d0"),
        demo_track("demo-ember", "Ember Waltz", "Mira Vale", 243.0, "#ffa8d9"),
        demo_track("demo-tides", "Paper Tides", "The Quiet Hours", 198.0, "#ff9ac8"),
        demo_track("demo-lumen", "Lumen", "Northlight", 176.0, "#ff8cb7"),
    ]
}

/// Built-in demo playlist referencing the demo queue
pub fn demo_playlists() -> Vec<Playlist> {
    vec![Playlist {
        id: PlaylistId::new("demo-favorites"),
        name: "Evening Favorites".to_string(),
        description: Some("A little of everything".to_string()),
        tracks: vec![
            TrackId::new("demo-sunrise"),
            TrackId::new("demo-ember"),
            TrackId::new("demo-lumen"),
        ],
        created_at: chrono::Utc
            .timestamp_millis_opt(1_700_000_000_000)
            .single()
            .unwrap_or_else(chrono::Utc::now),
        color: Some("#ffd9e6".to_string()),
    }]
}

/// Placeholder members shown in a room before anyone real joins
pub fn demo_members() -> Vec<RoomMember> {
    vec![
        RoomMember {
            name: "Maria".to_string(),
            avatar: "cat".to_string(),
            color: "#ffa8d9".to_string(),
        },
        RoomMember {
            name: "Oleh".to_string(),
            avatar: "star".to_string(),
            color: "#ff8cb7".to_string(),
        },
    ]
}

/// Local stand-in room used when the catalog cannot be reached
pub fn fallback_room(code: &str, password: Option<String>, host: String) -> Room {
    Room {
        id: uuid::Uuid::new_v4().to_string(),
        name: "Listening Room".to_string(),
        code: code.to_string(),
        password,
        host,
        members: demo_members(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tracks_are_flagged_and_playable() {
        for track in demo_tracks() {
            assert!(track.demo);
            assert!(track.is_playable());
            assert!(track.color.is_some());
        }
    }

    #[test]
    fn demo_playlist_references_demo_tracks() {
        let tracks = demo_tracks();
        for playlist in demo_playlists() {
            for id in &playlist.tracks {
                assert!(tracks.iter().any(|t| &t.id == id));
            }
        }
    }

    #[test]
    fn random_color_comes_from_palette() {
        for _ in 0..20 {
            let color = random_pastel_color();
            assert!(PASTEL_COLORS.contains(&color.as_str()));
        }
    }
}
