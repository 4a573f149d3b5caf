use glam::{Vec2, Vec3};

/// Position component - world coordinates in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Sprite component - a solid-color square quad
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub color: Vec3,
    pub size: f32,
}

impl Sprite {
    pub fn new(color: Vec3, size: f32) -> Self {
        Self { color, size }
    }
}

/// Seek component - this entity closes a fixed fraction of its remaining
/// distance to the grapple target every tick.
///
/// The rate is a per-tick exponential-decay constant in (0, 1): the entity
/// approaches the target monotonically and never overshoots it.
#[derive(Debug, Clone, Copy)]
pub struct Seek {
    pub rate: f32,
}

impl Seek {
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }
}

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Hook marker component - the point the player is pulled toward, itself
/// chasing the pointer target
#[derive(Debug, Clone, Copy)]
pub struct Hook;
