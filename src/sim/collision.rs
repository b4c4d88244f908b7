//! Collision resolution rules
//!
//! Brute-force pairwise rectangle tests, resolved in a fixed order per frame:
//! crate vs platforms, then per droplet: crates first, then platforms (which
//! includes the pooling nudge and the congestion rule). Multiple hits in one
//! frame are last-write-wins in collection order.

use super::state::{Crate, Droplet, Platform};
use crate::consts::{BOUNCE_REBOUND, BOUNCE_THRESHOLD, WATER_SIZE};

/// Vertical tolerance for treating a droplet/crate contact as a landing
const TOP_LANDING_TOLERANCE: f32 = 5.0;
/// Horizontal tolerance for treating a droplet/crate contact as a side impact
const SIDE_IMPACT_TOLERANCE: f32 = 10.0;
/// Horizontal friction while water rests on the crate
const CRATE_TOP_FRICTION: f32 = 0.95;
/// Horizontal speed a droplet keeps after pushing the crate sideways
const SIDE_PUSH_RETAIN: f32 = 0.1;
/// Horizontal friction while water rests on a platform
const PLATFORM_FRICTION: f32 = 0.92;
/// Below this horizontal speed a resting droplet is considered pooled
const POOL_SPEED_EPSILON: f32 = 0.01;
/// Nudge applied to pooled droplets, directed away from the platform center
const POOL_NUDGE: f32 = 0.005;
/// Speed multiplier for overlapping adjacent droplets
const CONGESTION_BOOST: f32 = 1.11;

/// Land an entity on a surface top: snap to the surface, then either rebound
/// (fast landings keep half their airborne time) or come to rest.
#[inline]
fn land(y: &mut f32, airtime: &mut f32, y_speed: f32, surface_top: f32, extent: f32) {
    *y = surface_top - extent;
    if y_speed > BOUNCE_THRESHOLD {
        *y -= y_speed * BOUNCE_REBOUND;
        *airtime /= 2.0;
    } else {
        *airtime = 0.0;
    }
}

/// Crate vs platform: snap the crate to rest on top, no horizontal effect.
pub fn rest_crate_on_platform(cr: &mut Crate, platform: &Platform) {
    if cr.rect().overlaps(&platform.rect()) {
        cr.pos.y = platform.pos.y - cr.size;
        cr.airtime = 0.0;
    }
}

/// Droplet vs crate: a landing on the crate top, or a side impact that
/// transfers momentum into the crate.
pub fn resolve_droplet_crate(drop: &mut Droplet, cr: &mut Crate) {
    if !drop.rect().overlaps(&cr.rect()) {
        return;
    }

    if drop.pos.y <= cr.pos.y - WATER_SIZE + TOP_LANDING_TOLERANCE {
        land(
            &mut drop.pos.y,
            &mut drop.airtime,
            drop.y_speed,
            cr.pos.y,
            WATER_SIZE,
        );
        // Friction against the (possibly moving) crate top
        drop.x_speed *= CRATE_TOP_FRICTION;
    } else if drop.pos.x <= cr.pos.x - WATER_SIZE + SIDE_IMPACT_TOLERANCE {
        // Keep the droplet outside the crate and push the crate; larger
        // crates absorb momentum more slowly
        drop.pos.x = cr.pos.x - WATER_SIZE;
        cr.x_speed += drop.x_speed / cr.size;
        drop.x_speed *= SIDE_PUSH_RETAIN;
    }
}

/// Droplet vs platform: landing/bounce, resting friction, the anti-pooling
/// nudge, and the congestion rule against the droplet's immediate successor
/// in spawn order.
pub fn resolve_droplet_platform(
    drop: &mut Droplet,
    next: Option<&mut Droplet>,
    platform: &Platform,
) {
    if !drop.rect().overlaps(&platform.rect()) {
        return;
    }

    land(
        &mut drop.pos.y,
        &mut drop.airtime,
        drop.y_speed,
        platform.pos.y,
        WATER_SIZE,
    );
    drop.x_speed *= PLATFORM_FRICTION;

    // Pooled droplets drip toward the nearest platform edge
    if drop.x_speed <= POOL_SPEED_EPSILON {
        if drop.pos.x < platform.rect().center().x {
            drop.x_speed -= POOL_NUDGE;
        } else {
            drop.x_speed += POOL_NUDGE;
        }
    }

    // Congestion relief: stacked neighbors are lifted and accelerated so
    // pooled water drains faster
    if let Some(next) = next {
        if drop.rect().overlaps(&next.rect()) {
            drop.pos.y -= WATER_SIZE / 2.0;
            next.pos.y -= WATER_SIZE / 2.0;
            drop.x_speed *= CONGESTION_BOOST;
            next.x_speed *= CONGESTION_BOOST;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn platform_at(x: f32, y: f32, width: f32) -> Platform {
        Platform::new(x, y, width)
    }

    #[test]
    fn test_crate_rests_on_platform() {
        let platform = platform_at(200.0, 400.0, 300.0);
        let mut cr = Crate::new(Vec2::new(300.0, 390.0), 40.0);
        cr.airtime = 12.0;

        rest_crate_on_platform(&mut cr, &platform);
        assert_eq!(cr.pos.y, 400.0 - cr.size);
        assert_eq!(cr.airtime, 0.0);
    }

    #[test]
    fn test_crate_misses_platform() {
        let platform = platform_at(200.0, 400.0, 300.0);
        let mut cr = Crate::new(Vec2::new(300.0, 100.0), 40.0);
        cr.airtime = 12.0;

        rest_crate_on_platform(&mut cr, &platform);
        assert_eq!(cr.rect().center(), Vec2::new(300.0, 100.0));
        assert_eq!(cr.airtime, 12.0);
    }

    #[test]
    fn test_droplet_rests_on_crate_top() {
        let mut cr = Crate::new(Vec2::new(300.0, 300.0), 50.0);
        let crate_top = cr.pos.y;
        let mut drop = Droplet::new(Vec2::new(300.0, crate_top - WATER_SIZE + 2.0), 4.0);
        drop.airtime = 6.0;
        drop.y_speed = 3.0; // below the bounce threshold

        resolve_droplet_crate(&mut drop, &mut cr);
        assert_eq!(drop.pos.y, crate_top - WATER_SIZE);
        assert_eq!(drop.airtime, 0.0);
        assert_eq!(drop.x_speed, 4.0 * 0.95);
    }

    #[test]
    fn test_droplet_bounces_off_crate_top() {
        let mut cr = Crate::new(Vec2::new(300.0, 300.0), 50.0);
        let crate_top = cr.pos.y;
        let mut drop = Droplet::new(Vec2::new(300.0, crate_top - WATER_SIZE + 2.0), 4.0);
        drop.airtime = 30.0;
        drop.y_speed = 8.0;

        resolve_droplet_crate(&mut drop, &mut cr);
        assert_eq!(drop.pos.y, crate_top - WATER_SIZE - 8.0 * BOUNCE_REBOUND);
        assert_eq!(drop.airtime, 15.0);
    }

    #[test]
    fn test_droplet_side_impact_transfers_momentum() {
        let mut cr = Crate::new(Vec2::new(300.0, 300.0), 50.0);
        let left = cr.pos.x;
        // Level with the crate body, overlapping its left edge
        let mut drop = Droplet::new(Vec2::new(left - WATER_SIZE + 3.0, 300.0), 12.0);
        drop.y_speed = 2.0;

        resolve_droplet_crate(&mut drop, &mut cr);
        assert_eq!(drop.pos.x, left - WATER_SIZE);
        assert_eq!(cr.x_speed, 12.0 / 50.0);
        assert!((drop.x_speed - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_droplet_rests_on_platform() {
        let platform = platform_at(200.0, 400.0, 300.0);
        let mut drop = Droplet::new(Vec2::new(300.0, 398.0), 2.0);
        drop.airtime = 5.0;
        drop.y_speed = 2.0;

        resolve_droplet_platform(&mut drop, None, &platform);
        assert_eq!(drop.pos.y, 400.0 - WATER_SIZE);
        assert_eq!(drop.airtime, 0.0);
        assert_eq!(drop.x_speed, 2.0 * 0.92);
    }

    #[test]
    fn test_droplet_bounces_off_platform() {
        let platform = platform_at(200.0, 400.0, 300.0);
        let mut drop = Droplet::new(Vec2::new(300.0, 398.0), 2.0);
        drop.airtime = 40.0;
        drop.y_speed = 9.0;

        resolve_droplet_platform(&mut drop, None, &platform);
        assert_eq!(drop.pos.y, 400.0 - WATER_SIZE - 9.0 * BOUNCE_REBOUND);
        assert_eq!(drop.airtime, 20.0);
    }

    #[test]
    fn test_pooled_droplet_nudged_toward_nearest_edge() {
        let platform = platform_at(200.0, 400.0, 300.0); // center x = 350

        let mut left = Droplet::new(Vec2::new(250.0, 398.0), 0.0);
        resolve_droplet_platform(&mut left, None, &platform);
        assert_eq!(left.x_speed, -0.005);

        let mut right = Droplet::new(Vec2::new(450.0, 398.0), 0.0);
        resolve_droplet_platform(&mut right, None, &platform);
        assert_eq!(right.x_speed, 0.005);
    }

    #[test]
    fn test_congestion_lifts_and_boosts_both() {
        let platform = platform_at(200.0, 400.0, 300.0);
        let mut drop = Droplet::new(Vec2::new(300.0, 398.0), 1.0);
        drop.y_speed = 1.0;
        let mut next = Droplet::new(Vec2::new(302.0, 397.0), 1.0);
        let next_y = next.pos.y;

        resolve_droplet_platform(&mut drop, Some(&mut next), &platform);
        // drop was snapped to the platform top, then both were lifted
        assert_eq!(drop.pos.y, 400.0 - WATER_SIZE - WATER_SIZE / 2.0);
        assert_eq!(next.pos.y, next_y - WATER_SIZE / 2.0);
        assert!((drop.x_speed - 0.92 * 1.11).abs() < 1e-6);
        assert!((next.x_speed - 1.11).abs() < 1e-6);
    }

    #[test]
    fn test_non_adjacent_neighbor_untouched() {
        let platform = platform_at(200.0, 400.0, 300.0);
        let mut drop = Droplet::new(Vec2::new(300.0, 398.0), 1.0);
        drop.y_speed = 1.0;
        let mut next = Droplet::new(Vec2::new(450.0, 100.0), 1.0);

        resolve_droplet_platform(&mut drop, Some(&mut next), &platform);
        assert_eq!(next.pos, Vec2::new(450.0, 100.0));
        assert_eq!(next.x_speed, 1.0);
    }
}
