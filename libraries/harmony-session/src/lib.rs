//! Harmony Player - Session Orchestration
//!
//! Ties the pieces together for an embedding front end: the persistent
//! store, the playback core and the remote catalog. A `Session` restores
//! the previous state at startup, handles secret-code login and logout,
//! keeps the user profile and theme preference persisted, seeds demo
//! content, and degrades every catalog call to the local snapshot when the
//! network is away.
//!
//! The presentation layer owns a `Session`, forwards user intents to it,
//! and redraws from [`harmony_playback::Player::snapshot`] +
//! [`harmony_playback::Player::take_events`] after every call.

pub mod demo;
mod session;
mod theme;

pub use session::Session;
pub use theme::Theme;
