//! Playback engine seam
//!
//! The player owns exactly one media primitive through this trait. Platform
//! code (an HTML audio element, a native decoder, a test fake) implements it
//! and feeds completions back through [`crate::Player::handle_engine_event`].

use harmony_core::{Result, SourceRef};

/// Thin wrapper over a single playback primitive
///
/// Contract:
/// - [`load`](Self::load) replaces the current source and resets the elapsed
///   position to zero. A `load` issued while a previous load is still in
///   flight supersedes it; events from a superseded load must not be
///   delivered. Unreachable or malformed sources are reported through
///   [`EngineEvent::MediaError`], not a return value.
/// - [`start`](Self::start) begins or resumes output. It may be rejected by
///   the underlying medium (autoplay policy, decode failure); callers treat
///   that as non-fatal.
/// - [`stop`](Self::stop) pauses output and never produces an
///   [`EngineEvent::Ended`].
/// - Exactly one [`EngineEvent::Ended`] is emitted per completed
///   playthrough.
pub trait PlaybackEngine {
    /// Replace the current source, resetting elapsed time to zero
    fn load(&mut self, source: &SourceRef);

    /// Begin or resume output
    fn start(&mut self) -> Result<()>;

    /// Pause output
    fn stop(&mut self);

    /// Seek to a position in seconds, clamped to `[0, duration]`
    fn seek(&mut self, position_secs: f64);

    /// Current elapsed position in seconds
    fn position(&self) -> f64;

    /// Duration of the loaded source, if known
    fn duration(&self) -> Option<f64>;

    /// Output volume (0-100)
    fn set_volume(&mut self, level: u8);
}

/// Completions the engine feeds back into the player
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The loaded source played through to its end
    Ended,

    /// The source could not be loaded or decoded
    MediaError(String),

    /// Periodic position report
    Position {
        position_secs: f64,
        duration_secs: f64,
    },
}

/// Engine that discards all output
///
/// Useful for headless embedding where the state machine is wanted without
/// any audio device.
#[derive(Debug, Default)]
pub struct NullEngine;

impl PlaybackEngine for NullEngine {
    fn load(&mut self, _source: &SourceRef) {}

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {}

    fn seek(&mut self, _position_secs: f64) {}

    fn position(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> Option<f64> {
        None
    }

    fn set_volume(&mut self, _level: u8) {}
}
