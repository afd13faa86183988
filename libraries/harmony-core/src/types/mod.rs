//! Domain types for Harmony Player

mod ids;
mod playlist;
mod track;
mod user;

pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use track::{SourceRef, Track};
pub use user::{Room, RoomMember, UserProfile};
