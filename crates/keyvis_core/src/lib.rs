//! keyvis Core Primitives
//!
//! This crate provides the foundational types shared by the keyvis hero
//! animation crates:
//!
//! - **Geometry**: small value types (points, rects, vectors, matrices)
//!   for surface frames and the 3D cube scene
//! - **Surfaces**: the capability interface through which timelines mutate
//!   externally owned visual elements, plus a recording double for tests
//! - **Viewport**: viewport dimensions and the responsive breakpoint

pub mod geometry;
pub mod surface;
pub mod viewport;

pub use geometry::{Mat4, Point, Rect, Size, Vec2, Vec3};
pub use surface::{RecordingSurface, SharedSurface, Surface, SurfaceOp};
pub use viewport::{Viewport, MOBILE_BREAKPOINT};
