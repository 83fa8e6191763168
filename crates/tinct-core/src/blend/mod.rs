//! Compositing — opacity mix, soft light, overlay, and blend parameters.

pub mod channel;
pub mod mix;
pub mod params;

pub use channel::{overlay_channel, soft_light_channel};
pub use mix::{opacity_mix, overlay_mix, soft_light_mix};
pub use params::{BlendMode, BlendParams};
