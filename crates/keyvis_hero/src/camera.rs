//! Hero camera
//!
//! Perspective camera looking down -Z at the cube from a fixed distance.
//! The drawing surface tracks the viewport but never grows taller than
//! [`MAX_RENDER_HEIGHT`], so ultra-tall viewports don't stretch the scene.

use keyvis_core::{Mat4, Size, Viewport};

/// Vertical field of view, degrees.
const FOV_Y_DEG: f32 = 45.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 5000.0;

/// Camera distance that keeps the whole cube in frame.
pub const CAMERA_Z: f32 = 2500.0;

/// Tallest the drawing surface gets, in pixels.
pub const MAX_RENDER_HEIGHT: f32 = 1200.0;

/// Dimensions of the drawing surface for a viewport.
pub fn render_size(viewport: Viewport) -> Size {
    Size::new(viewport.width, viewport.height.min(MAX_RENDER_HEIGHT))
}

#[derive(Clone, Debug)]
pub struct HeroCamera {
    pub aspect: f32,
    pub position_z: f32,
}

impl HeroCamera {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            aspect: render_aspect(viewport),
            position_z: CAMERA_Z,
        }
    }

    /// Recompute projection parameters after a viewport resize.
    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = render_aspect(viewport);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEG.to_radians(), self.aspect, NEAR, FAR)
    }

    /// View matrix for the fixed camera position on the Z axis.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation(0.0, 0.0, -self.position_z)
    }
}

fn render_aspect(viewport: Viewport) -> f32 {
    let size = render_size(viewport);
    size.width / size.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_height_is_clamped() {
        let size = render_size(Viewport::new(1920.0, 2000.0));
        assert_eq!(size.height, MAX_RENDER_HEIGHT);
        let size = render_size(Viewport::new(1920.0, 900.0));
        assert_eq!(size.height, 900.0);
    }

    #[test]
    fn resize_updates_aspect_only() {
        let mut camera = HeroCamera::new(Viewport::new(1000.0, 1000.0));
        assert_eq!(camera.aspect, 1.0);
        camera.resize(Viewport::new(1500.0, 1000.0));
        assert_eq!(camera.aspect, 1.5);
        assert_eq!(camera.position_z, CAMERA_Z);
    }

    #[test]
    fn projection_tracks_aspect() {
        let square = HeroCamera::new(Viewport::new(1000.0, 1000.0));
        let wide = HeroCamera::new(Viewport::new(2000.0, 1000.0));
        let p_square = square.projection_matrix();
        let p_wide = wide.projection_matrix();
        assert!(p_wide.cols[0][0] < p_square.cols[0][0]);
    }
}
