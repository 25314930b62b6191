//! keyvis Animation System
//!
//! Easing functions, fixed-increment phase steppers, reveal-band math, and
//! one-shot timeline orchestration.
//!
//! # Design
//!
//! - **Easing**: pure `[0,1] -> [0,1]` progress mappings
//! - **Stepper**: drives a progress value in constant per-tick increments,
//!   clamping the final tick to exactly 1.0
//! - **Timeline**: a declared, ordered, one-shot list of stages (tween,
//!   set, delay) advanced from a single per-frame tick. No nested timer
//!   registration, so the whole sequence steps under a virtual clock
//! - **FrameClock**: wall-clock to per-frame millisecond deltas

pub mod easing;
pub mod reveal;
pub mod scheduler;
pub mod stepper;
pub mod timeline;

pub use easing::Easing;
pub use reveal::{band_grow, band_shrink, lerp, BandSpan};
pub use scheduler::FrameClock;
pub use stepper::{Stepper, TICK_MS};
pub use timeline::{Timeline, TimelineBuilder, TimelineState};
