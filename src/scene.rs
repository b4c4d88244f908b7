//! Draw-list construction
//!
//! The simulation never draws; each frame the embedding renderer asks for a
//! [`Scene`] and paints it as filled rectangles. Colors follow the original
//! sandbox palette, with water shaded by fall speed.

use crate::sim::{Rect, SimState};

/// RGBA color, 0..1 per channel
pub type Color = [f32; 4];

pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
pub const HOSE_TUBE: Color = [0.0, 0.9, 0.3, 1.0];
pub const HOSE_TIP: Color = [1.0, 0.6, 0.0, 1.0];
pub const PLATFORM: Color = [0.5, 0.5, 0.5, 1.0];
pub const CRATE: Color = [0.5, 0.3, 0.1, 1.0];

/// Shade water by vertical speed: slow droplets are pale, fast ones deep blue
fn water_color(y_speed: f32) -> Color {
    let t = (y_speed / 10.0).clamp(0.0, 1.0);
    [0.4 - 0.3 * t, 0.7 - 0.4 * t, 1.0, 1.0]
}

/// One filled rectangle to draw
#[derive(Debug, Clone, Copy)]
pub struct SceneRect {
    pub rect: Rect,
    pub color: Color,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Scene {
    /// Rectangles in draw order (back to front)
    pub rects: Vec<SceneRect>,
    /// Live droplet count, for the on-screen counter
    pub droplet_count: usize,
}

/// Flatten the current state into a draw list
pub fn build_scene(state: &SimState) -> Scene {
    let mut rects = Vec::with_capacity(2 + state.droplets.len() + state.platforms.len() + 1);

    rects.push(SceneRect {
        rect: state.hose.tube(),
        color: HOSE_TUBE,
    });
    rects.push(SceneRect {
        rect: state.hose.tip(),
        color: HOSE_TIP,
    });
    for drop in &state.droplets {
        rects.push(SceneRect {
            rect: drop.rect(),
            color: water_color(drop.y_speed),
        });
    }
    for platform in &state.platforms {
        rects.push(SceneRect {
            rect: platform.rect(),
            color: PLATFORM,
        });
    }
    for cr in &state.crates {
        rects.push(SceneRect {
            rect: cr.rect(),
            color: CRATE,
        });
    }

    Scene {
        rects,
        droplet_count: state.droplets.len(),
    }
}
