//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per rendered frame, driven by the caller's delta-time
//! - Seeded RNG only (injected, never process-global)
//! - Stable iteration order (droplets stay in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use layout::{LayoutError, generate_platforms};
pub use rect::Rect;
pub use state::{Crate, Droplet, Hose, Platform, SimState};
pub use tick::{TickInput, tick};
