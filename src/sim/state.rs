//! Simulation state and core entity types
//!
//! All state that must be persisted for determinism lives here. Droplets are
//! kept in spawn order; the congestion rule and the culling pass both rely on
//! that order being stable.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::SimConfig;
use crate::consts::*;

/// Advance an airborne-time counter by one frame and return the resulting
/// vertical speed under the quadratic fall law.
#[inline]
fn quadratic_fall(airtime: &mut f32, k: f32, dt: f32) -> f32 {
    *airtime += 1.0;
    *airtime * *airtime * k * dt
}

/// The water source. Fixed to the left edge; its vertical position tracks the
/// pointer each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hose {
    pub y: f32,
    /// Body height (vertical extent of both tube and nozzle)
    pub height: f32,
    /// Total width, tube plus nozzle
    pub width: f32,
}

impl Default for Hose {
    fn default() -> Self {
        Self {
            y: 0.0,
            height: HOSE_THICKNESS,
            width: HOSE_DEPTH * 3.0 / 2.0,
        }
    }
}

impl Hose {
    /// Tube portion of the hose
    pub fn tube(&self) -> Rect {
        Rect::new(0.0, self.y, HOSE_DEPTH, self.height)
    }

    /// Nozzle portion of the hose
    pub fn tip(&self) -> Rect {
        Rect::new(HOSE_DEPTH, self.y, HOSE_DEPTH / 2.0, self.height)
    }

    /// Center the hose body on the pointer, clamped so the whole body stays
    /// inside the playfield.
    pub fn track_pointer(&mut self, pointer_y: f32, playfield_height: f32) {
        self.y = (pointer_y - self.height / 2.0).clamp(0.0, playfield_height - self.height);
    }
}

/// A single water droplet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Droplet {
    pub pos: Vec2,
    pub x_speed: f32,
    /// Vertical speed from the last fall step (read by the collision rules)
    pub y_speed: f32,
    /// Frames since last ground contact; drives the fall law
    pub airtime: f32,
}

impl Droplet {
    pub fn new(pos: Vec2, x_speed: f32) -> Self {
        Self {
            pos,
            x_speed,
            y_speed: 0.0,
            airtime: 0.0,
        }
    }

    /// Advance airborne time and return the vertical distance to fall this
    /// frame. Also records it as the droplet's current vertical speed.
    pub fn fall_step(&mut self, dt: f32) -> f32 {
        self.y_speed = quadratic_fall(&mut self.airtime, WATER_GRAVITY_K, dt);
        self.y_speed
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, WATER_SIZE, WATER_SIZE)
    }
}

/// The pushable crate. At most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crate {
    pub pos: Vec2,
    /// Square extent, randomized at spawn
    pub size: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub airtime: f32,
}

impl Crate {
    /// Spawn a crate of the given size centered on `center`
    pub fn new(center: Vec2, size: f32) -> Self {
        Self {
            pos: center - Vec2::splat(size / 2.0),
            size,
            x_speed: 0.0,
            y_speed: 0.0,
            airtime: 0.0,
        }
    }

    /// Same fall law as [`Droplet::fall_step`], with the crate coefficient
    pub fn fall_step(&mut self, dt: f32) -> f32 {
        self.y_speed = quadratic_fall(&mut self.airtime, CRATE_GRAVITY_K, dt);
        self.y_speed
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// A static platform. Height is shared by all platforms; width is randomized
/// at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, PLAT_HEIGHT)
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Playfield and tuning parameters
    pub config: SimConfig,
    /// Frame counter
    pub time_ticks: u64,
    pub hose: Hose,
    /// Current platform layout (empty until the first regenerate input)
    pub platforms: Vec<Platform>,
    /// 0 or 1 crates
    pub crates: Vec<Crate>,
    /// Droplets in spawn order
    pub droplets: Vec<Droplet>,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Create a fresh state with the given seed and config
    pub fn new(seed: u64, config: SimConfig) -> Self {
        Self {
            seed,
            config,
            time_ticks: 0,
            hose: Hose::default(),
            platforms: Vec::new(),
            crates: Vec::new(),
            droplets: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn a crate centered under the pointer, sized randomly in
    /// `[MIN_CRATE_SIZE, MIN_CRATE_SIZE + CRATE_SIZE_VARIANCE)`.
    ///
    /// Silently ignored while a crate is already alive.
    pub fn spawn_crate(&mut self, pointer: Vec2) {
        if !self.crates.is_empty() {
            return;
        }
        let size = MIN_CRATE_SIZE + self.rng.random_range(0.0..CRATE_SIZE_VARIANCE);
        log::debug!("spawning {size:.1}px crate at {pointer}");
        self.crates.push(Crate::new(pointer, size));
    }

    /// Spawn one frame's worth of droplets at the hose nozzle.
    ///
    /// Each droplet starts just inside the nozzle tip with a random y along
    /// the nozzle and a horizontal speed of `WATER_SPEED` plus a dt-scaled
    /// jitter.
    pub fn spawn_droplet_burst(&mut self, dt: f32) {
        let span = self.hose.height - WATER_SIZE;
        if span <= 0.0 {
            return;
        }
        let tip_x = self.hose.width - WATER_SPEED;
        for _ in 0..self.config.drops_per_frame {
            let y = self.hose.y + self.rng.random_range(0.0..span);
            let x_speed = WATER_SPEED + self.rng.random_range(0.0..WATER_JITTER_MAX) * dt;
            self.droplets.push(Droplet::new(Vec2::new(tip_x, y), x_speed));
        }
    }
}
