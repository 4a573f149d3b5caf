//! Demo constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

use glam::{Vec2, Vec3};

// =============================================================================
// GRAPPLE MOTION
// =============================================================================

/// Fraction of the remaining distance the hook closes each tick
pub const HOOK_SMOOTHING: f32 = 0.5;
/// Fraction of the remaining distance the player closes each tick (trails the hook)
pub const PLAYER_SMOOTHING: f32 = 0.2;
/// Tick rate the fixed-fraction rates are calibrated against; the
/// frame-rate-independent variant re-expresses them per elapsed second
pub const REFERENCE_TICK_RATE: f32 = 60.0;
/// Maximum delta time fed to time-based updates (prevents snapping after long frames)
pub const MAX_FRAME_DT: f32 = 0.1;

// =============================================================================
// SCENE
// =============================================================================

/// Player spawn position (world pixels, origin bottom-left)
pub const PLAYER_SPAWN: Vec2 = Vec2::new(200.0, 100.0);
/// Hook spawn position
pub const HOOK_SPAWN: Vec2 = Vec2::ZERO;
/// Player quad side length in pixels
pub const PLAYER_SIZE: f32 = 30.0;
/// Hook quad side length in pixels
pub const HOOK_SIZE: f32 = 10.0;
/// Player color (red)
pub const PLAYER_COLOR: Vec3 = Vec3::new(0.9, 0.2, 0.2);
/// Hook color (blue)
pub const HOOK_COLOR: Vec3 = Vec3::new(0.25, 0.45, 0.95);
/// Rope stroke color (orange)
pub const ROPE_COLOR: Vec3 = Vec3::new(1.0, 0.6, 0.1);
/// Rope stroke width in pixels
pub const ROPE_WIDTH: f32 = 4.0;

// =============================================================================
// CAMERA
// =============================================================================

/// Default zoom level (screen pixels per world pixel)
pub const CAMERA_DEFAULT_ZOOM: f32 = 1.0;
/// Minimum zoom level
pub const CAMERA_MIN_ZOOM: f32 = 0.25;
/// Maximum zoom level
pub const CAMERA_MAX_ZOOM: f32 = 4.0;
/// Zoom speed multiplier per scroll unit
pub const CAMERA_ZOOM_FACTOR: f32 = 1.1;
/// Smoothing factor for zoom interpolation (lower = smoother)
pub const CAMERA_ZOOM_SMOOTHING: f32 = 0.85;
/// Velocity damping factor for pan momentum (lower = more friction)
pub const CAMERA_VELOCITY_DAMPING: f32 = 0.90;
/// Velocity threshold below which the camera stops
pub const CAMERA_VELOCITY_THRESHOLD: f32 = 0.001;
/// Zoom difference threshold for snapping
pub const CAMERA_ZOOM_SNAP_THRESHOLD: f32 = 0.01;
/// Momentum multiplier when releasing a pan
pub const CAMERA_MOMENTUM_SCALE: f32 = 2.0;

// =============================================================================
// VFX
// =============================================================================

/// Target ping ring duration in seconds
pub const TARGET_PING_DURATION: f32 = 0.35;
/// Target ping ring radius at full expansion (pixels)
pub const TARGET_PING_RADIUS: f32 = 22.0;
/// Line segments used to approximate a vfx ring
pub const TARGET_PING_SEGMENTS: usize = 32;

// =============================================================================
// AUDIO
// =============================================================================

/// Grapple fire blip frequency in Hz
pub const FIRE_BLIP_FREQ: f32 = 660.0;
/// Grapple fire blip length in milliseconds
pub const FIRE_BLIP_MILLIS: u64 = 90;
/// Grapple fire blip amplitude
pub const FIRE_BLIP_GAIN: f32 = 0.15;

// =============================================================================
// WINDOW & INPUT
// =============================================================================

/// Default window width in pixels
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
/// Default window height in pixels
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
/// Pixels of cursor travel between press and release before a click counts as a drag
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;
