//! Surface capability interface
//!
//! Animation stages mutate externally owned visual elements through this
//! trait instead of talking to a real rendering environment, so the whole
//! choreography can run headless against a recording double. Surfaces are
//! created and destroyed by the host; the animation side only ever mutates
//! attributes on them.

use crate::geometry::Rect;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an externally owned surface.
///
/// Everything here is single-threaded and frame-driven, so plain
/// `Rc<RefCell<..>>` sharing is enough.
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

/// Mutable visual attributes of a page element.
pub trait Surface {
    /// Measured geometry of the element, in host pixels.
    fn bounds(&self) -> Rect;

    /// Opacity in `[0, 1]`.
    fn set_opacity(&mut self, opacity: f32);

    /// Fraction of the element revealed from its left edge, in `[0, 1]`.
    /// `0.0` hides the element entirely, `1.0` removes the clip.
    fn set_clip_reveal(&mut self, fraction: f32);

    /// Translation offset from the element's resting position.
    fn set_offset(&mut self, x: f32, y: f32);

    /// Uniform scale factor.
    fn set_scale(&mut self, scale: f32);

    /// Reposition and resize the element. Used for band overlays.
    fn set_frame(&mut self, frame: Rect);
}

/// A single recorded mutation on a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceOp {
    Opacity(f32),
    ClipReveal(f32),
    Offset(f32, f32),
    Scale(f32),
    Frame(Rect),
}

/// Surface double that records every mutation in order.
///
/// Stands in for a live element when driving timelines in tests or on
/// headless hosts.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    bounds: Rect,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ops: Vec::new(),
        }
    }

    /// New recording surface behind a shared handle.
    pub fn shared(bounds: Rect) -> Rc<RefCell<RecordingSurface>> {
        Rc::new(RefCell::new(Self::new(bounds)))
    }

    /// All mutations recorded so far, oldest first.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn last_op(&self) -> Option<SurfaceOp> {
        self.ops.last().copied()
    }

    /// Most recent frame mutation, if any.
    pub fn last_frame(&self) -> Option<Rect> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Frame(rect) => Some(*rect),
            _ => None,
        })
    }

    /// Most recent opacity mutation, if any.
    pub fn last_opacity(&self) -> Option<f32> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Opacity(v) => Some(*v),
            _ => None,
        })
    }

    /// Most recent clip-reveal mutation, if any.
    pub fn last_clip_reveal(&self) -> Option<f32> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::ClipReveal(v) => Some(*v),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.ops.push(SurfaceOp::Opacity(opacity));
    }

    fn set_clip_reveal(&mut self, fraction: f32) {
        self.ops.push(SurfaceOp::ClipReveal(fraction));
    }

    fn set_offset(&mut self, x: f32, y: f32) {
        self.ops.push(SurfaceOp::Offset(x, y));
    }

    fn set_scale(&mut self, scale: f32) {
        self.ops.push(SurfaceOp::Scale(scale));
    }

    fn set_frame(&mut self, frame: Rect) {
        self.ops.push(SurfaceOp::Frame(frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_ops_in_order() {
        let mut s = RecordingSurface::new(Rect::new(0.0, 0.0, 120.0, 30.0));
        s.set_opacity(1.0);
        s.set_clip_reveal(0.5);
        s.set_opacity(0.25);
        assert_eq!(
            s.ops(),
            &[
                SurfaceOp::Opacity(1.0),
                SurfaceOp::ClipReveal(0.5),
                SurfaceOp::Opacity(0.25),
            ]
        );
        assert_eq!(s.last_opacity(), Some(0.25));
        assert_eq!(s.last_clip_reveal(), Some(0.5));
    }

    #[test]
    fn shared_handle_coerces_to_surface() {
        let rec = RecordingSurface::shared(Rect::ZERO);
        let shared: SharedSurface = rec.clone();
        shared.borrow_mut().set_scale(2.0);
        assert_eq!(rec.borrow().last_op(), Some(SurfaceOp::Scale(2.0)));
    }
}
