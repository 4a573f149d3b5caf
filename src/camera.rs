use crate::constants::*;
use glam::{Mat4, Vec2};

pub struct Camera {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    // Smooth movement
    velocity: Vec2,
    target_zoom: f32,
    last_mouse_world_pos: Option<Vec2>,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: CAMERA_DEFAULT_ZOOM,
            viewport_width,
            viewport_height,
            velocity: Vec2::ZERO,
            target_zoom: CAMERA_DEFAULT_ZOOM,
            last_mouse_world_pos: None,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        // Direct pan - moves exactly with cursor (no momentum while dragging)
        let world_dx = -dx / self.zoom;
        let world_dy = dy / self.zoom;

        self.position.x += world_dx;
        self.position.y += world_dy;

        // Track velocity for momentum on release
        self.velocity.x = world_dx;
        self.velocity.y = world_dy;
    }

    pub fn release_pan(&mut self) {
        // Apply momentum scaling when mouse is released
        self.velocity *= CAMERA_MOMENTUM_SCALE;
    }

    pub fn add_zoom_impulse(&mut self, delta: f32, mouse_x: f32, mouse_y: f32) {
        // Zoom towards the cursor
        self.last_mouse_world_pos = Some(self.screen_to_world(mouse_x, mouse_y));

        let zoom_factor = CAMERA_ZOOM_FACTOR.powf(delta);
        self.target_zoom = (self.target_zoom * zoom_factor).clamp(CAMERA_MIN_ZOOM, CAMERA_MAX_ZOOM);
    }

    pub fn update(&mut self, dt: f32, is_dragging: bool) {
        // Only apply momentum when not dragging
        if !is_dragging {
            // Apply velocity with damping (smooth deceleration)
            let damping = CAMERA_VELOCITY_DAMPING.powf(dt * 60.0);

            self.position += self.velocity * dt * 60.0;
            self.velocity *= damping;

            // Stop completely when velocity is very small
            if self.velocity.length() < CAMERA_VELOCITY_THRESHOLD {
                self.velocity = Vec2::ZERO;
            }
        }

        // Smooth zoom interpolation
        if (self.zoom - self.target_zoom).abs() > CAMERA_ZOOM_SNAP_THRESHOLD {
            let zoom_before = self.zoom;

            let t = 1.0 - CAMERA_ZOOM_SMOOTHING.powf(dt * 60.0);
            self.zoom = self.zoom + (self.target_zoom - self.zoom) * t;

            // Adjust position to zoom towards last mouse position
            if let Some(world_pos) = self.last_mouse_world_pos {
                // Keep the world point stationary during zoom
                self.position = world_pos + (self.position - world_pos) * (zoom_before / self.zoom);
            }
        } else {
            self.zoom = self.target_zoom;
            self.last_mouse_world_pos = None;
        }
    }

    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        let ndc_x = (screen_x / self.viewport_width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen_y / self.viewport_height) * 2.0;

        let world_x = (ndc_x * self.viewport_width) / (2.0 * self.zoom) + self.position.x;
        let world_y = (ndc_y * self.viewport_height) / (2.0 * self.zoom) + self.position.y;

        Vec2::new(world_x, world_y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_width = self.viewport_width / (2.0 * self.zoom);
        let half_height = self.viewport_height / (2.0 * self.zoom);

        let left = self.position.x - half_width;
        let right = self.position.x + half_width;
        let bottom = self.position.y - half_height;
        let top = self.position.y + half_height;

        Mat4::orthographic_rh(left, right, bottom, top, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_center_maps_to_camera_position() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.position = Vec2::new(400.0, 300.0);

        let world = camera.screen_to_world(400.0, 300.0);
        assert!(world.abs_diff_eq(Vec2::new(400.0, 300.0), 1e-4));
    }

    #[test]
    fn test_screen_to_world_flips_y() {
        let camera = Camera::new(800.0, 600.0);

        // Bottom of the screen is below the camera center in world space
        let bottom = camera.screen_to_world(400.0, 600.0);
        let top = camera.screen_to_world(400.0, 0.0);
        assert!(bottom.y < top.y);
    }

    #[test]
    fn test_pan_moves_against_cursor() {
        let mut camera = Camera::new(800.0, 600.0);

        // Dragging right pulls the world right, i.e. the camera moves left
        camera.pan(10.0, 0.0);
        assert!(camera.position.x < 0.0);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.add_zoom_impulse(1000.0, 400.0, 300.0);
        for _ in 0..120 {
            camera.update(1.0 / 60.0, false);
        }
        assert!(camera.zoom <= CAMERA_MAX_ZOOM + 1e-4);

        camera.add_zoom_impulse(-2000.0, 400.0, 300.0);
        for _ in 0..120 {
            camera.update(1.0 / 60.0, false);
        }
        assert!(camera.zoom >= CAMERA_MIN_ZOOM - 1e-4);
    }

    #[test]
    fn test_momentum_decays_to_rest() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.pan(10.0, 5.0);
        camera.release_pan();

        for _ in 0..600 {
            camera.update(1.0 / 60.0, false);
        }
        assert_eq!(camera.velocity, Vec2::ZERO);
    }
}
