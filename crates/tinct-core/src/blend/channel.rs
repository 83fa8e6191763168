//! Per-channel nonlinear blend formulas.
//!
//! Both formulas normalize their 8-bit inputs to `[0, 1]`, evaluate, scale
//! back by 255 and truncate toward zero. The result is not clamped here;
//! callers route channel triples through [`clamp_color`](crate::clamp_color).
//!
//! The float widths are part of the contract: soft light normalizes in `f32`
//! and finishes in `f64`, overlay runs entirely in `f64`. Changing either
//! shifts results by one step at some inputs.

/// Soft-light compositing of one channel.
///
/// With `b` the normalized base and `s` the normalized blend:
/// ```text
/// s < 0.5:  (2·b·s + b²·(1 − 2s)) × 255
/// s ≥ 0.5:  (√b·(2s − 1) + 2b·(1 − s)) × 255
/// ```
///
/// The branch compares the `f32` normalized blend against exactly `0.5`, so
/// `blend = 127` takes the first branch and `blend = 128` the second.
pub fn soft_light_channel(base: u8, blend: u8) -> i32 {
    let b = f32::from(base) / 255.0;
    let s = f32::from(blend) / 255.0;

    let value = if s < 0.5 {
        let b64 = f64::from(b);
        f64::from(2.0 * b * s) + b64 * b64 * f64::from(1.0 - 2.0 * s)
    } else {
        f64::from(b).sqrt() * f64::from(2.0 * s - 1.0) + f64::from(2.0 * b * (1.0 - s))
    };

    (value * 255.0) as i32
}

/// Overlay compositing of one channel.
///
/// With `b` the normalized base and `s` the normalized blend:
/// ```text
/// b < 0.5:  (2·b·s) × 255
/// b ≥ 0.5:  (1 − 2·(1 − b)·(1 − s)) × 255
/// ```
///
/// Unlike soft light the branch is keyed on the base, not the blend.
pub fn overlay_channel(base: u8, blend: u8) -> i32 {
    let b = f64::from(base) / 255.0;
    let s = f64::from(blend) / 255.0;

    let value = if b < 0.5 {
        2.0 * b * s
    } else {
        1.0 - 2.0 * (1.0 - b) * (1.0 - s)
    };

    (value * 255.0) as i32
}
