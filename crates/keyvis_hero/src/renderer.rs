//! Renderer capability seam
//!
//! The intro issues exactly one draw call per frame through
//! [`SceneRenderer`]; hosts bring their own drawing context and texture
//! uploads. [`HeadlessRenderer`] records draw calls and resizes so the
//! full choreography can run without a rendering environment.

use crate::camera::HeroCamera;
use crate::cube::VideoCube;
use keyvis_core::Size;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// Handle to a texture owned by the renderer.
    pub struct TextureId;
}

/// The host could not create a rendering context.
///
/// This is a fatal precondition for the intro: the host responds by not
/// constructing it at all, so the feature silently fails to render.
#[derive(Debug, Error)]
pub enum RenderInitError {
    #[error("rendering context unavailable")]
    ContextUnavailable,
}

/// A cube-face texture failed to load. The face renders untextured; no
/// error reaches the user.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read texture `{path}`: {reason}")]
    Load { path: String, reason: String },
    #[error("failed to decode texture `{path}`")]
    Decode { path: String },
}

/// Texture upload capability.
pub trait TextureLoader {
    fn load(&mut self, path: &str) -> Result<TextureId, TextureError>;
}

/// Drawing capability. One `draw` per display frame.
pub trait SceneRenderer {
    /// Resize the drawing surface.
    fn resize(&mut self, size: Size);

    /// Draw the cube scene through the camera.
    fn draw(&mut self, cube: &VideoCube, camera: &HeroCamera);
}

/// Renderer double that records draw calls and resizes.
///
/// Textures live in a slotmap like a real renderer's resource table, so
/// loaded faces get distinct, stable handles.
#[derive(Default)]
pub struct HeadlessRenderer {
    textures: SlotMap<TextureId, String>,
    draw_calls: usize,
    size: Option<Size>,
    last_rotation_y: f32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Most recent resize, if any.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Cube Y rotation captured by the most recent draw.
    pub fn last_rotation_y(&self) -> f32 {
        self.last_rotation_y
    }
}

impl TextureLoader for HeadlessRenderer {
    fn load(&mut self, path: &str) -> Result<TextureId, TextureError> {
        Ok(self.textures.insert(path.to_owned()))
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn resize(&mut self, size: Size) {
        self.size = Some(size);
    }

    fn draw(&mut self, cube: &VideoCube, _camera: &HeroCamera) {
        self.draw_calls += 1;
        self.last_rotation_y = cube.rotation().y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_hands_out_distinct_ids() {
        let mut renderer = HeadlessRenderer::new();
        let a = renderer.load("a.png").unwrap();
        let b = renderer.load("b.png").unwrap();
        assert_ne!(a, b);
        assert_eq!(renderer.texture_count(), 2);
    }

    #[test]
    fn errors_describe_the_asset() {
        let err = TextureError::Load {
            path: "img1.png".into(),
            reason: "not found".into(),
        };
        assert!(err.to_string().contains("img1.png"));
    }
}
