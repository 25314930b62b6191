//! Viewport dimensions and the responsive breakpoint

/// Viewport width below which mobile layout constants apply, in pixels.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Host viewport dimensions, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether mobile layout constants apply at this width.
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }
}
