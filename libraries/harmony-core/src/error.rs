/// Core error types for Harmony Player
use thiserror::Error;

/// Result type alias using `HarmonyError`
pub type Result<T> = std::result::Result<T, HarmonyError>;

/// Core error type for Harmony Player
///
/// None of these are fatal to a session: validation and not-found errors
/// abort a single operation with state unchanged, playback errors force the
/// playing flag off but leave the cursor intact, and persistence errors are
/// logged while the in-memory effect still commits.
#[derive(Error, Debug)]
pub enum HarmonyError {
    /// Bad user input (empty name, empty playlist, index out of range)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Entity not found (stale playlist or track identifier)
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Media engine rejected a load or start
    #[error("Playback error: {0}")]
    Playback(String),

    /// Storage read/write failure
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Remote catalog unreachable or misbehaving
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HarmonyError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_entity_and_id() {
        let err = HarmonyError::not_found("Playlist", "pl-1");
        assert_eq!(err.to_string(), "Playlist not found: pl-1");
    }

    #[test]
    fn validation_carries_message() {
        let err = HarmonyError::validation("name must not be empty");
        assert_eq!(err.to_string(), "Invalid input: name must not be empty");
    }
}
