//! Render data collection - flattens world state into plain structs the
//! renderer can consume without touching the ECS.

use crate::components::{Position, Sprite};
use glam::Vec3;
use hecs::World;

/// Flattened entity data for rendering
pub struct RenderEntity {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Vec3,
}

/// Collect all sprite-bearing entities for rendering
pub fn collect_renderables(world: &World) -> Vec<RenderEntity> {
    world
        .query::<(&Position, &Sprite)>()
        .iter()
        .map(|(_id, (pos, sprite))| RenderEntity {
            x: pos.x,
            y: pos.y,
            size: sprite.size,
            color: sprite.color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Seek;

    #[test]
    fn test_collects_only_sprite_bearing_entities() {
        let mut world = World::new();
        world.spawn((Position::new(1.0, 2.0), Sprite::new(Vec3::ONE, 30.0)));
        world.spawn((Position::new(3.0, 4.0), Seek::new(0.5)));

        let renderables = collect_renderables(&world);
        assert_eq!(renderables.len(), 1);
        assert_eq!(renderables[0].x, 1.0);
        assert_eq!(renderables[0].y, 2.0);
        assert_eq!(renderables[0].size, 30.0);
    }
}
