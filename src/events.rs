//! Event system for decoupled communication between systems.
//!
//! Input emits events, other systems consume them. This allows VFX and audio
//! to react without tight coupling.

/// Events that systems can emit and subscribe to
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The grapple was fired at a new world-space target
    GrappleFired { x: f32, y: f32 },
    /// The scene was reset to its spawn state
    SceneReset,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::GrappleFired { x: 10.0, y: 20.0 });
        queue.push(GameEvent::SceneReset);
        assert!(!queue.is_empty());

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fired_event_carries_target() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::GrappleFired { x: 3.5, y: -7.0 });
        let first = queue.drain().next();
        match first {
            Some(GameEvent::GrappleFired { x, y }) => {
                assert_eq!(x, 3.5);
                assert_eq!(y, -7.0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
