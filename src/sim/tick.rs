//! Per-frame update pipeline
//!
//! One call per rendered frame: spawn triggers, emitter tracking, motion
//! integration, collision resolution, lifecycle culling — in that order.
//! The caller clears edge-triggered inputs after each frame; `emit_water`
//! is level-triggered and may stay held.

use glam::Vec2;

use super::collision;
use super::layout::generate_platforms;
use super::state::SimState;
use crate::consts::CRATE_FRICTION;

/// Input sample for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position; drives the hose and crate spawn placement
    pub pointer: Vec2,
    /// Replace the platform layout (edge-triggered)
    pub regenerate_platforms: bool,
    /// Spawn a crate under the pointer (edge-triggered, ignored while one exists)
    pub spawn_crate: bool,
    /// Emit a droplet burst (level-triggered, held)
    pub emit_water: bool,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    if input.regenerate_platforms {
        match generate_platforms(&state.config, &mut state.rng) {
            Ok(platforms) => state.platforms = platforms,
            Err(err) => {
                log::warn!("platform regeneration failed ({err}); keeping current layout");
            }
        }
    }
    if input.spawn_crate {
        state.spawn_crate(input.pointer);
    }

    // Emitter tracking happens before the physics pass
    state
        .hose
        .track_pointer(input.pointer.y, state.config.height);

    let width = state.config.width;
    let height = state.config.height;

    // Crates: integrate, friction, rest on platforms, cull
    for cr in &mut state.crates {
        cr.pos.x += cr.x_speed;
        cr.pos.y += cr.fall_step(dt);
        cr.x_speed *= CRATE_FRICTION;
        for platform in &state.platforms {
            collision::rest_crate_on_platform(cr, platform);
        }
    }
    state.crates.retain(|cr| cr.pos.x <= width && cr.pos.y <= height);

    // New water enters before the droplet pass so it moves this frame too
    if input.emit_water {
        state.spawn_droplet_burst(dt);
    }

    // Droplets: integrate, then fold the collision rules in fixed order
    // (crates first, then platforms). The congestion rule peeks at the
    // droplet's immediate successor in spawn order, hence the split borrow.
    for i in 0..state.droplets.len() {
        let drop = &mut state.droplets[i];
        drop.pos.x += drop.x_speed;
        let fall = drop.fall_step(dt);
        drop.pos.y += fall;

        for cr in &mut state.crates {
            collision::resolve_droplet_crate(&mut state.droplets[i], cr);
        }

        let (current, rest) = state.droplets.split_at_mut(i + 1);
        let drop = &mut current[i];
        let mut next = rest.first_mut();
        for platform in &state.platforms {
            collision::resolve_droplet_platform(drop, next.as_deref_mut(), platform);
        }
    }

    // Deferred culling preserves spawn order and keeps the loop above simple
    state.droplets.retain(|d| d.pos.x <= width && d.pos.y <= height);
}
