//! Hero key-visual intro
//!
//! A rotating six-face image cube that fades in, zooms out to a resting
//! pose, and hands over to a timed reveal of the page copy and chrome.
//! Rendering and page elements stay behind capability traits
//! ([`SceneRenderer`], [`TextureLoader`], surfaces from `keyvis_core`),
//! so the whole choreography runs identically headless and hosted.

pub mod camera;
pub mod cube;
pub mod intro;
pub mod renderer;

pub use camera::{render_size, HeroCamera, CAMERA_Z, MAX_RENDER_HEIGHT};
pub use cube::{CubeFace, CubeMetrics, VideoCube, FACE_TEXTURE_PATHS};
pub use intro::{
    rotation_rates, HeroIntro, HeroSurfaces, IntroStage, TextFragment, PROGRESS_STEP,
};
pub use renderer::{
    HeadlessRenderer, RenderInitError, SceneRenderer, TextureError, TextureId, TextureLoader,
};
