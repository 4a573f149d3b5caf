//! Grapple motion systems.
//!
//! Every seeking entity closes a fixed fraction of its remaining distance to
//! the target each tick, per axis. The hook closes faster than the player, so
//! the player appears to trail behind the hook on the rope.
//!
//! The fixed-fraction update is deliberately frame-rate dependent: one tick
//! advances by the same fraction regardless of elapsed wall-clock time, so
//! motion speeds up or slows down with the frame rate. `seek_target_timed` is
//! the opt-in variant that re-expresses the rates per elapsed second.
//!
//! Neither update validates its inputs; a non-finite target or position
//! propagates through the arithmetic unchecked.

use crate::components::{Hook, Player, Position, Seek};
use crate::constants::REFERENCE_TICK_RATE;
use glam::Vec2;
use hecs::World;

/// Advance every seeking entity one tick toward the target.
///
/// For a position Q and rate a: `Q' = Q - (Q - T) * a`. A rate in (0, 1)
/// keeps Q' on the open segment between Q and T, so entities approach the
/// target monotonically and never overshoot it.
pub fn seek_target(world: &mut World, target: Vec2) {
    for (_id, (pos, seek)) in world.query_mut::<(&mut Position, &Seek)>() {
        pos.x -= (pos.x - target.x) * seek.rate;
        pos.y -= (pos.y - target.y) * seek.rate;
    }
}

/// Frame-rate-independent variant of [`seek_target`].
///
/// Re-expresses each per-tick rate as an exponential decay over `dt` seconds,
/// calibrated so that one tick at the reference rate matches the fixed-step
/// update exactly: `effective = 1 - (1 - rate)^(dt * 60)`.
pub fn seek_target_timed(world: &mut World, target: Vec2, dt: f32) {
    for (_id, (pos, seek)) in world.query_mut::<(&mut Position, &Seek)>() {
        let t = 1.0 - (1.0 - seek.rate).powf(dt * REFERENCE_TICK_RATE);
        pos.x -= (pos.x - target.x) * t;
        pos.y -= (pos.y - target.y) * t;
    }
}

/// The rope segment connecting player to hook, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopePath {
    /// Player endpoint
    pub start: Vec2,
    /// Hook endpoint
    pub end: Vec2,
}

/// Derive the rope path from the current player and hook positions.
///
/// Returns `None` if either endpoint is missing from the world.
pub fn rope_path(world: &World) -> Option<RopePath> {
    let start = world
        .query::<(&Position, &Player)>()
        .iter()
        .next()
        .map(|(_, (pos, _))| pos.as_vec2())?;
    let end = world
        .query::<(&Position, &Hook)>()
        .iter()
        .next()
        .map(|(_, (pos, _))| pos.as_vec2())?;
    Some(RopePath { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HOOK_SMOOTHING, PLAYER_SMOOTHING};

    fn spawn_seeker(world: &mut World, start: Vec2, rate: f32) -> hecs::Entity {
        world.spawn((Position::from_vec2(start), Seek::new(rate)))
    }

    fn position_of(world: &World, entity: hecs::Entity) -> Vec2 {
        world.get::<&Position>(entity).unwrap().as_vec2()
    }

    #[test]
    fn test_hook_halves_distance_each_tick() {
        let mut world = World::new();
        let hook = spawn_seeker(&mut world, Vec2::ZERO, HOOK_SMOOTHING);
        let target = Vec2::new(100.0, 0.0);

        seek_target(&mut world, target);
        assert!(position_of(&world, hook).abs_diff_eq(Vec2::new(50.0, 0.0), 1e-4));

        seek_target(&mut world, target);
        assert!(position_of(&world, hook).abs_diff_eq(Vec2::new(75.0, 0.0), 1e-4));
    }

    #[test]
    fn test_player_closes_fifth_of_distance() {
        let mut world = World::new();
        let player = spawn_seeker(&mut world, Vec2::ZERO, PLAYER_SMOOTHING);

        seek_target(&mut world, Vec2::new(100.0, 0.0));
        assert!(position_of(&world, player).abs_diff_eq(Vec2::new(20.0, 0.0), 1e-4));
    }

    #[test]
    fn test_monotonic_approach() {
        let mut world = World::new();
        let hook = spawn_seeker(&mut world, Vec2::new(-40.0, 55.0), HOOK_SMOOTHING);
        let target = Vec2::new(100.0, -20.0);

        let mut last_dist = position_of(&world, hook).distance(target);
        for _ in 0..50 {
            seek_target(&mut world, target);
            let dist = position_of(&world, hook).distance(target);
            assert!(
                dist < last_dist,
                "distance must strictly decrease: {} -> {}",
                last_dist,
                dist
            );
            last_dist = dist;
        }
    }

    #[test]
    fn test_never_overshoots_target() {
        // The updated point stays on the segment between start and target.
        let target = Vec2::new(60.0, -30.0);
        for &start in &[
            Vec2::new(0.0, 0.0),
            Vec2::new(-100.0, 200.0),
            Vec2::new(61.0, -30.0),
        ] {
            let mut world = World::new();
            let id = spawn_seeker(&mut world, start, HOOK_SMOOTHING);
            let span = start.distance(target);

            seek_target(&mut world, target);
            let pos = position_of(&world, id);
            assert!(pos.distance(target) <= span);
            assert!(pos.distance(start) <= span);
        }
    }

    #[test]
    fn test_player_trails_hook() {
        // Same start, same target: after every tick the player is at least as
        // far from the target as the hook, since its rate is smaller.
        let mut world = World::new();
        let start = Vec2::new(10.0, -5.0);
        let hook = spawn_seeker(&mut world, start, HOOK_SMOOTHING);
        let player = spawn_seeker(&mut world, start, PLAYER_SMOOTHING);
        let target = Vec2::new(-80.0, 120.0);

        for _ in 0..30 {
            seek_target(&mut world, target);
            let hook_dist = position_of(&world, hook).distance(target);
            let player_dist = position_of(&world, player).distance(target);
            assert!(player_dist >= hook_dist);
        }
    }

    #[test]
    fn test_idempotent_at_target() {
        let mut world = World::new();
        let target = Vec2::new(33.0, 44.0);
        let hook = spawn_seeker(&mut world, target, HOOK_SMOOTHING);

        seek_target(&mut world, target);
        assert_eq!(position_of(&world, hook), target);
    }

    #[test]
    fn test_retarget_applies_immediately() {
        let mut world = World::new();
        let hook = spawn_seeker(&mut world, Vec2::ZERO, HOOK_SMOOTHING);

        seek_target(&mut world, Vec2::new(100.0, 0.0));
        assert!(position_of(&world, hook).abs_diff_eq(Vec2::new(50.0, 0.0), 1e-4));

        // The new target is used on the very next tick, unsmoothed.
        seek_target(&mut world, Vec2::new(50.0, 100.0));
        assert!(position_of(&world, hook).abs_diff_eq(Vec2::new(50.0, 50.0), 1e-4));
    }

    #[test]
    fn test_axes_update_independently() {
        let mut world = World::new();
        let hook = spawn_seeker(&mut world, Vec2::new(0.0, 80.0), HOOK_SMOOTHING);

        seek_target(&mut world, Vec2::new(100.0, 0.0));
        assert!(position_of(&world, hook).abs_diff_eq(Vec2::new(50.0, 40.0), 1e-4));
    }

    #[test]
    fn test_timed_variant_matches_fixed_step_at_reference_rate() {
        let target = Vec2::new(100.0, -60.0);
        let start = Vec2::new(-20.0, 10.0);

        let mut fixed = World::new();
        let fixed_id = spawn_seeker(&mut fixed, start, HOOK_SMOOTHING);
        let mut timed = World::new();
        let timed_id = spawn_seeker(&mut timed, start, HOOK_SMOOTHING);

        seek_target(&mut fixed, target);
        seek_target_timed(&mut timed, target, 1.0 / REFERENCE_TICK_RATE);

        assert!(position_of(&fixed, fixed_id)
            .abs_diff_eq(position_of(&timed, timed_id), 1e-3));
    }

    #[test]
    fn test_timed_variant_composes_across_frame_splits() {
        // Two half-length frames land where one full frame does.
        let target = Vec2::new(100.0, 0.0);
        let start = Vec2::ZERO;
        let dt = 1.0 / REFERENCE_TICK_RATE;

        let mut whole = World::new();
        let whole_id = spawn_seeker(&mut whole, start, PLAYER_SMOOTHING);
        let mut split = World::new();
        let split_id = spawn_seeker(&mut split, start, PLAYER_SMOOTHING);

        seek_target_timed(&mut whole, target, dt);
        seek_target_timed(&mut split, target, dt / 2.0);
        seek_target_timed(&mut split, target, dt / 2.0);

        assert!(position_of(&whole, whole_id)
            .abs_diff_eq(position_of(&split, split_id), 1e-3));
    }

    #[test]
    fn test_rope_path_runs_player_to_hook() {
        let mut world = World::new();
        world.spawn((Position::new(20.0, 0.0), Seek::new(PLAYER_SMOOTHING), Player));
        world.spawn((Position::new(75.0, 0.0), Seek::new(HOOK_SMOOTHING), Hook));

        let rope = rope_path(&world).unwrap();
        assert_eq!(rope.start, Vec2::new(20.0, 0.0));
        assert_eq!(rope.end, Vec2::new(75.0, 0.0));
    }

    #[test]
    fn test_rope_path_requires_both_endpoints() {
        let mut world = World::new();
        world.spawn((Position::new(0.0, 0.0), Player));
        assert!(rope_path(&world).is_none());
    }
}
