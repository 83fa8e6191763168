//! Tinct Core — 8-bit RGB compositing math.
//!
//! Channel clamping, linear opacity mixing, and the soft-light and overlay
//! blend modes. Every function here is pure; results depend only on the
//! arguments and are safe to compute from any thread.

pub mod blend;
pub mod cache;
pub mod color;
pub mod error;

// Re-exports for convenience.
pub use blend::{
    BlendMode, BlendParams, opacity_mix, overlay_channel, overlay_mix, soft_light_channel,
    soft_light_mix,
};
pub use cache::{BlendCache, CacheStats};
pub use color::{Color, clamp_color};
pub use error::{ColorError, Result};
