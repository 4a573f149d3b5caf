//! Scene initialization and state management.
//!
//! The scene is two entities - a player square and the hook it is pulled
//! toward - plus a pointer target owned by the application shell.

use crate::camera::Camera;
use crate::components::{Hook, Player, Position, Seek, Sprite};
use crate::config::Config;
use crate::constants::*;
use glam::Vec2;
use hecs::{Entity, World};

/// Initialize the world with the player and hook at their spawn positions.
/// Returns (world, player_entity, hook_entity).
pub fn init_world(config: &Config) -> (World, Entity, Entity) {
    let mut world = World::new();

    let player_entity = world.spawn((
        Position::from_vec2(PLAYER_SPAWN),
        Sprite::new(PLAYER_COLOR, PLAYER_SIZE),
        Seek::new(config.player_smoothing),
        Player,
    ));

    let hook_entity = world.spawn((
        Position::from_vec2(HOOK_SPAWN),
        Sprite::new(HOOK_COLOR, HOOK_SIZE),
        Seek::new(config.hook_smoothing),
        Hook,
    ));

    (world, player_entity, hook_entity)
}

/// Move the player and hook back to their spawn positions.
pub fn reset_scene(world: &mut World, player_entity: Entity, hook_entity: Entity) {
    if let Ok(mut pos) = world.get::<&mut Position>(player_entity) {
        *pos = Position::from_vec2(PLAYER_SPAWN);
    }
    if let Ok(mut pos) = world.get::<&mut Position>(hook_entity) {
        *pos = Position::from_vec2(HOOK_SPAWN);
    }
}

/// Write the live tuning rates onto the seeking entities.
pub fn apply_tuning(world: &mut World, player_entity: Entity, hook_entity: Entity, config: &Config) {
    if let Ok(mut seek) = world.get::<&mut Seek>(player_entity) {
        seek.rate = config.player_smoothing;
    }
    if let Ok(mut seek) = world.get::<&mut Seek>(hook_entity) {
        seek.rate = config.hook_smoothing;
    }
}

/// Center the camera so the world origin sits at the bottom-left of the view.
pub fn setup_camera(camera: &mut Camera) {
    camera.position = Vec2::new(camera.viewport_width / 2.0, camera.viewport_height / 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_world_spawns_scene() {
        let config = Config::default();
        let (world, player_entity, hook_entity) = init_world(&config);

        let player_pos = world.get::<&Position>(player_entity).unwrap();
        assert_eq!(player_pos.as_vec2(), PLAYER_SPAWN);
        let player_seek = world.get::<&Seek>(player_entity).unwrap();
        assert_eq!(player_seek.rate, PLAYER_SMOOTHING);

        let hook_pos = world.get::<&Position>(hook_entity).unwrap();
        assert_eq!(hook_pos.as_vec2(), HOOK_SPAWN);
        let hook_seek = world.get::<&Seek>(hook_entity).unwrap();
        assert_eq!(hook_seek.rate, HOOK_SMOOTHING);
    }

    #[test]
    fn test_reset_restores_spawn_positions() {
        let config = Config::default();
        let (mut world, player_entity, hook_entity) = init_world(&config);

        crate::systems::seek_target(&mut world, Vec2::new(500.0, 400.0));
        reset_scene(&mut world, player_entity, hook_entity);

        assert_eq!(
            world.get::<&Position>(player_entity).unwrap().as_vec2(),
            PLAYER_SPAWN
        );
        assert_eq!(
            world.get::<&Position>(hook_entity).unwrap().as_vec2(),
            HOOK_SPAWN
        );
    }

    #[test]
    fn test_apply_tuning_updates_rates() {
        let mut config = Config::default();
        let (mut world, player_entity, hook_entity) = init_world(&config);

        config.hook_smoothing = 0.8;
        config.player_smoothing = 0.1;
        apply_tuning(&mut world, player_entity, hook_entity, &config);

        assert_eq!(world.get::<&Seek>(hook_entity).unwrap().rate, 0.8);
        assert_eq!(world.get::<&Seek>(player_entity).unwrap().rate, 0.1);
    }

    #[test]
    fn test_setup_camera_centers_viewport() {
        let mut camera = Camera::new(800.0, 600.0);
        setup_camera(&mut camera);
        assert_eq!(camera.position, Vec2::new(400.0, 300.0));

        // World origin lands at the bottom-left corner of the screen
        let origin = camera.screen_to_world(0.0, 600.0);
        assert!(origin.abs_diff_eq(Vec2::ZERO, 1e-4));
    }
}
