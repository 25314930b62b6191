//! Video cube scene model
//!
//! Six textured face planes arranged as an open cube: each face floats a
//! small gap away from the cube body so the seams read as rounded tiles.
//! Faces are oriented outward and drawn front side only. Corner rounding
//! is a normalized radius the face material applies; the model here only
//! carries the value.

use crate::renderer::{TextureId, TextureLoader};
use keyvis_animation::lerp;
use keyvis_core::{Mat4, Vec2, Vec3, Viewport};
use std::f32::consts::{FRAC_PI_2, PI};

/// Corner rounding in source pixels, normalized against face size.
const CORNER_RADIUS_PX: f32 = 30.0;

/// Texture paths for the six faces, in face-layout order
/// (right, left, top, bottom, front, back).
pub const FACE_TEXTURE_PATHS: [&str; 6] = [
    "/assets/img/top/kv/img1.png",
    "/assets/img/top/kv/img2.png",
    "/assets/img/top/kv/img3.png",
    "/assets/img/top/kv/img4.png",
    "/assets/img/top/kv/img5.png",
    "/assets/img/top/kv/img6.png",
];

/// Responsive sizing constants for the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeMetrics {
    /// Face size at full zoom-in.
    pub start_size: f32,
    /// Face size once the zoom-out settles.
    pub end_size: f32,
    /// Gap between neighbouring faces.
    pub gap: f32,
}

impl CubeMetrics {
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.is_mobile() {
            Self {
                start_size: 800.0,
                end_size: 600.0,
                gap: 15.0,
            }
        } else {
            Self {
                start_size: 1300.0,
                end_size: 960.0,
                gap: 20.0,
            }
        }
    }

    /// Distance from the cube centre to each face plane.
    pub fn face_offset(&self) -> f32 {
        self.start_size / 2.0 + self.gap
    }

    /// Face size at eased zoom progress `t`.
    pub fn size_at(&self, t: f32) -> f32 {
        lerp(self.start_size, self.end_size, t)
    }
}

/// One textured face plane.
#[derive(Clone, Debug)]
pub struct CubeFace {
    /// `None` when the texture failed to load; the face renders untextured.
    pub texture: Option<TextureId>,
    /// Position relative to the cube centre.
    pub position: Vec3,
    /// Euler rotation, radians.
    pub rotation: Vec3,
    pub opacity: f32,
    /// Corner rounding normalized to the face size (material uniform).
    pub corner_radius: f32,
}

/// The rotating image cube.
pub struct VideoCube {
    faces: [CubeFace; 6],
    rotation: Vec3,
    scale: f32,
    offset: Vec2,
    metrics: CubeMetrics,
}

impl VideoCube {
    /// Build the six faces and load their textures. A failed load leaves
    /// the face untextured rather than failing the cube.
    pub fn new(metrics: CubeMetrics, loader: &mut dyn TextureLoader) -> Self {
        let offset = metrics.face_offset();
        let layout: [(Vec3, Vec3); 6] = [
            (Vec3::new(offset, 0.0, 0.0), Vec3::new(0.0, FRAC_PI_2, 0.0)),
            (Vec3::new(-offset, 0.0, 0.0), Vec3::new(0.0, -FRAC_PI_2, 0.0)),
            (Vec3::new(0.0, offset, 0.0), Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            (Vec3::new(0.0, -offset, 0.0), Vec3::new(FRAC_PI_2, 0.0, 0.0)),
            (Vec3::new(0.0, 0.0, offset), Vec3::ZERO),
            (Vec3::new(0.0, 0.0, -offset), Vec3::new(0.0, PI, 0.0)),
        ];
        let corner_radius = CORNER_RADIUS_PX / metrics.start_size;

        let faces = std::array::from_fn(|i| {
            let path = FACE_TEXTURE_PATHS[i];
            let texture = match loader.load(path) {
                Ok(id) => Some(id),
                Err(err) => {
                    tracing::warn!(%err, "cube face will render untextured");
                    None
                }
            };
            let (position, rotation) = layout[i];
            CubeFace {
                texture,
                position,
                rotation,
                opacity: 0.0,
                corner_radius,
            }
        });

        Self {
            faces,
            rotation: Vec3::ZERO,
            scale: 1.0,
            offset: Vec2::ZERO,
            metrics,
        }
    }

    pub fn faces(&self) -> &[CubeFace] {
        &self.faces
    }

    pub fn metrics(&self) -> CubeMetrics {
        self.metrics
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Opacity applies to all faces at once.
    pub fn set_opacity(&mut self, opacity: f32) {
        for face in &mut self.faces {
            face.opacity = opacity;
        }
    }

    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        self.rotation.x += dx;
        self.rotation.y += dy;
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn set_offset(&mut self, x: f32, y: f32) {
        self.offset = Vec2::new(x, y);
    }

    /// Model matrix: translate, then rotate, then scale.
    pub fn model_matrix(&self) -> Mat4 {
        let translation = Mat4::translation(self.offset.x, self.offset.y, 0.0);
        let rotation = Mat4::rotation_x(self.rotation.x).mul(&Mat4::rotation_y(self.rotation.y));
        let scale = Mat4::scale(self.scale, self.scale, self.scale);
        translation.mul(&rotation).mul(&scale)
    }
}
