//! ChoreStar - family chore tracker
//!
//! ChoreStar renders a family dashboard where children complete chores and
//! earn points, wrapped in per-child cosmetic themes (colors, icons, sounds,
//! avatars). Completing a task fires a short celebration sequence: flying
//! points, counter tweens, confetti, screen shake, toasts, and an optional
//! theme sound.
//!
//! ## Layers
//!
//! 1. **Data tables**: [`themes`] (cosmetic bundles with avatar unlock
//!    predicates) and [`catalog`] (task templates by category) are static,
//!    read-only lookup data.
//!
//! 2. **Effects**: [`effects::EffectsEngine`] turns trigger events into
//!    time-ordered visual mutations via an explicit step scheduler. All
//!    triggers are fire-and-forget; failures degrade silently.
//!
//! 3. **Presentation**: [`gui`] is the eframe app that ticks the engine once
//!    per frame and feeds it clicks. Live records (points, streaks, pending
//!    approvals) come from an external backend via [`net`], or from seeded
//!    sample data when no server is configured.

pub mod catalog;
pub mod config;
pub mod effects;
pub mod gui;
pub mod net;
pub mod stats;
pub mod themes;

pub use config::Settings;
pub use effects::EffectsEngine;
pub use themes::{Theme, get_theme};
