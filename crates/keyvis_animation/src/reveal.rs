//! Reveal-band math for the text wipe
//!
//! The per-word reveal runs in two phases over a colored band overlay:
//! the band first grows rightward from the text's left edge to full
//! width, then shrinks toward its own right edge while the text under it
//! is progressively unclipped.

use keyvis_core::Rect;

/// Horizontal span of the reveal band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandSpan {
    pub left: f32,
    pub width: f32,
}

impl BandSpan {
    /// Frame for the band overlay at a given vertical placement.
    pub fn to_frame(self, top: f32, height: f32) -> Rect {
        Rect::new(self.left, top, self.width, height)
    }
}

/// Growth phase: the band extends rightward, left edge fixed at `anchor`.
pub fn band_grow(anchor: f32, full_width: f32, eased: f32) -> BandSpan {
    BandSpan {
        left: anchor,
        width: full_width * eased,
    }
}

/// Shrink phase: the band's right edge stays pinned at
/// `anchor + full_width` while the left edge advances across it.
pub fn band_shrink(anchor: f32, full_width: f32, eased: f32) -> BandSpan {
    BandSpan {
        left: anchor + full_width * eased,
        width: full_width * (1.0 - eased),
    }
}

/// Linear interpolation between two magnitudes.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

    #[test]
    fn grow_keeps_left_edge_anchored() {
        for p in SAMPLES {
            let span = band_grow(40.0, 200.0, p);
            assert_eq!(span.left, 40.0);
            assert_eq!(span.width, 200.0 * p);
        }
    }

    #[test]
    fn grow_endpoints() {
        assert_eq!(band_grow(10.0, 150.0, 0.0).width, 0.0);
        assert_eq!(band_grow(10.0, 150.0, 1.0).width, 150.0);
    }

    #[test]
    fn shrink_keeps_right_edge_pinned() {
        let anchor = 40.0;
        let full = 200.0;
        for p in SAMPLES {
            let span = band_shrink(anchor, full, p);
            let right = span.left + span.width;
            assert!(
                (right - (anchor + full)).abs() < 1e-3,
                "right edge drifted at p={p}: {right}"
            );
        }
    }

    #[test]
    fn shrink_endpoints() {
        let start = band_shrink(0.0, 120.0, 0.0);
        assert_eq!(start.left, 0.0);
        assert_eq!(start.width, 120.0);
        let end = band_shrink(0.0, 120.0, 1.0);
        assert_eq!(end.left, 120.0);
        assert_eq!(end.width, 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(800.0, 600.0, 0.0), 800.0);
        assert_eq!(lerp(800.0, 600.0, 1.0), 600.0);
        assert_eq!(lerp(800.0, 600.0, 0.5), 700.0);
    }
}
