//! Splashbox - a 2D water-hose sandbox simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (droplet physics, collisions, layout)
//! - `config`: Data-driven playfield tuning
//! - `scene`: Renderer-agnostic draw list for the embedding frontend
//!
//! The crate is headless: the embedding frame loop supplies delta-time,
//! pointer position and input signals once per frame via [`sim::TickInput`],
//! calls [`sim::tick`], then reads the state (or a [`scene::Scene`]) to draw.

pub mod config;
pub mod scene;
pub mod sim;

pub use config::SimConfig;
pub use sim::{SimState, TickInput, tick};

/// Simulation tuning constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Hose body height
    pub const HOSE_THICKNESS: f32 = 30.0;
    /// Depth of the hose tube; the nozzle is scaled from this
    pub const HOSE_DEPTH: f32 = 50.0;

    /// Water droplet square extent
    pub const WATER_SIZE: f32 = 5.0;
    /// Base horizontal speed for water leaving the hose
    pub const WATER_SPEED: f32 = 12.0;
    /// Upper bound of the per-droplet speed jitter (scaled by dt)
    pub const WATER_JITTER_MAX: f32 = 60.0;
    /// Droplets spawned per frame while the emit input is held
    pub const DROPS_PER_FRAME: usize = 10;
    /// Quadratic fall coefficient for droplets
    pub const WATER_GRAVITY_K: f32 = 0.5;

    /// Platform thickness (shared by all platforms)
    pub const PLAT_HEIGHT: f32 = 20.0;
    /// Platforms generated per layout
    pub const MAX_PLATFORMS: usize = 3;
    /// Required vertical clearance between platforms, on top of PLAT_HEIGHT
    pub const PLATFORM_GAP: f32 = 100.0;

    /// Minimum crate size
    pub const MIN_CRATE_SIZE: f32 = 25.0;
    /// Maximum random size added on top of the minimum
    pub const CRATE_SIZE_VARIANCE: f32 = 75.0;
    /// Per-frame horizontal friction on the crate
    pub const CRATE_FRICTION: f32 = 0.25;
    /// Quadratic fall coefficient for the crate
    pub const CRATE_GRAVITY_K: f32 = 0.45;

    /// Vertical speed above which a landing becomes a partial rebound
    pub const BOUNCE_THRESHOLD: f32 = 5.0;
    /// Rebound displacement factor applied to the landing speed
    pub const BOUNCE_REBOUND: f32 = 1.5;
}
