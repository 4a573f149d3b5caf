//! Sound effect playback.
//!
//! The demo has no audio assets; the fire blip is synthesized. A machine
//! without an output device degrades to silence rather than failing startup.

use crate::constants::*;
use crate::events::GameEvent;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle};
use std::time::Duration;

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioManager {
    pub fn new() -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Self {
                _stream: stream,
                handle,
            }),
            Err(err) => {
                log::warn!("audio output device unavailable, running silent: {err}");
                None
            }
        }
    }

    /// Short synthesized blip played when the grapple is fired
    pub fn play_fire_blip(&self) {
        let source = SineWave::new(FIRE_BLIP_FREQ)
            .take_duration(Duration::from_millis(FIRE_BLIP_MILLIS))
            .fade_in(Duration::from_millis(5))
            .amplify(FIRE_BLIP_GAIN);
        if let Err(err) = self.handle.play_raw(source) {
            log::warn!("failed to play fire blip: {err}");
        }
    }

    /// Handle a game event, playing the appropriate sound
    pub fn handle_event(&self, event: &GameEvent) {
        match event {
            GameEvent::GrappleFired { .. } => self.play_fire_blip(),
            GameEvent::SceneReset => {}
        }
    }
}
