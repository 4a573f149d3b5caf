//! Visual effects system for one-shot animations.
//!
//! These are separate from entity state - they're spawned, animated, and
//! removed without affecting the grapple motion itself.

use crate::constants::*;
use crate::events::GameEvent;

/// A one-shot visual effect
pub struct VisualEffect {
    pub x: f32,
    pub y: f32,
    pub effect_type: EffectType,
    pub timer: f32,    // Time remaining
    pub duration: f32, // Total duration (for progress calculation)
}

impl VisualEffect {
    pub fn new(x: f32, y: f32, effect_type: EffectType) -> Self {
        let duration = effect_type.duration();
        Self {
            x,
            y,
            effect_type,
            timer: duration,
            duration,
        }
    }

    /// Progress from 0.0 (just started) to 1.0 (finished)
    pub fn progress(&self) -> f32 {
        1.0 - (self.timer / self.duration)
    }

    /// Returns true if effect is finished and should be removed
    pub fn is_finished(&self) -> bool {
        self.timer <= 0.0
    }

    /// Update the effect, returns true if still alive
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        !self.is_finished()
    }
}

#[derive(Clone, Copy)]
pub enum EffectType {
    /// Expanding ring marking where the grapple was fired
    TargetPing,
}

impl EffectType {
    pub fn duration(&self) -> f32 {
        match self {
            EffectType::TargetPing => TARGET_PING_DURATION,
        }
    }
}

/// Manager for all active visual effects
pub struct VfxManager {
    pub effects: Vec<VisualEffect>,
}

impl VfxManager {
    pub fn new() -> Self {
        Self { effects: Vec::new() }
    }

    /// Spawn a new effect
    pub fn spawn(&mut self, x: f32, y: f32, effect_type: EffectType) {
        self.effects.push(VisualEffect::new(x, y, effect_type));
    }

    /// Spawn a target ping at the fired grapple location
    pub fn spawn_target_ping(&mut self, x: f32, y: f32) {
        self.spawn(x, y, EffectType::TargetPing);
    }

    /// Update all effects, removing finished ones
    pub fn update(&mut self, dt: f32) {
        self.effects.retain_mut(|effect| effect.update(dt));
    }

    /// Handle a game event, spawning appropriate VFX
    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GrappleFired { x, y } => {
                self.spawn_target_ping(*x, *y);
            }
            GameEvent::SceneReset => {
                self.effects.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_lifecycle() {
        let mut effect = VisualEffect::new(0.0, 0.0, EffectType::TargetPing);
        assert_eq!(effect.progress(), 0.0);
        assert!(!effect.is_finished());

        assert!(effect.update(TARGET_PING_DURATION / 2.0));
        assert!((effect.progress() - 0.5).abs() < 1e-5);

        assert!(!effect.update(TARGET_PING_DURATION));
        assert!(effect.is_finished());
    }

    #[test]
    fn test_manager_removes_finished_effects() {
        let mut vfx = VfxManager::new();
        vfx.spawn_target_ping(5.0, 5.0);
        vfx.spawn_target_ping(10.0, 10.0);
        assert_eq!(vfx.effects.len(), 2);

        vfx.update(TARGET_PING_DURATION + 0.01);
        assert!(vfx.effects.is_empty());
    }

    #[test]
    fn test_fired_event_spawns_ping() {
        let mut vfx = VfxManager::new();
        vfx.handle_event(&GameEvent::GrappleFired { x: 42.0, y: 7.0 });
        assert_eq!(vfx.effects.len(), 1);
        assert_eq!(vfx.effects[0].x, 42.0);
        assert_eq!(vfx.effects[0].y, 7.0);
    }

    #[test]
    fn test_reset_event_clears_effects() {
        let mut vfx = VfxManager::new();
        vfx.spawn_target_ping(1.0, 1.0);
        vfx.handle_event(&GameEvent::SceneReset);
        assert!(vfx.effects.is_empty());
    }
}
