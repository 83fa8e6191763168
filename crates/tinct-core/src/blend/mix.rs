//! Whole-color compositing: linear opacity mix and the nonlinear modes.
//!
//! Nonlinear modes always evaluate at full strength first and then fade the
//! result back toward the base with [`opacity_mix`]. Opacity never enters
//! the soft-light or overlay formulas themselves.
//!
//! ```text
//!   base, blend ──→ per-channel formula ──→ clamp ──→ opacity_mix(·, base, opacity) ──→ out
//! ```

use crate::blend::channel::{overlay_channel, soft_light_channel};
use crate::color::{Color, clamp_color};

/// Linearly interpolate from `base` toward `blend` by `opacity` percent.
///
/// For each channel `c`, in `f32`:
/// ```text
/// out_c = trunc(blend_c × (opacity / 100) + base_c × (1 − opacity / 100))
/// ```
/// then clamped. `opacity = 100` yields `blend` and `opacity = 0` yields
/// `base`.
///
/// Opacity is not range-checked. Values below 0 or above 100 extrapolate
/// past the endpoints and are only saturated by the final clamp.
pub fn opacity_mix(blend: Color, base: Color, opacity: i32) -> Color {
    let weight = opacity as f32 / 100.0;
    let inverse = 1.0 - weight;

    let [r1, g1, b1] = blend.channels();
    let [r2, g2, b2] = base.channels();
    let mix = |top: i32, bottom: i32| (top as f32 * weight + bottom as f32 * inverse) as i32;

    clamp_color(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// Soft-light `blend` over `base`, faded by `opacity` percent.
pub fn soft_light_mix(base: Color, blend: Color, opacity: i32) -> Color {
    let full = per_channel(base, blend, soft_light_channel);
    opacity_mix(full, base, opacity)
}

/// Overlay `blend` over `base`, faded by `opacity` percent.
pub fn overlay_mix(base: Color, blend: Color, opacity: i32) -> Color {
    let full = per_channel(base, blend, overlay_channel);
    opacity_mix(full, base, opacity)
}

/// Apply a channel formula to R, G and B independently and clamp.
fn per_channel(base: Color, blend: Color, formula: fn(u8, u8) -> i32) -> Color {
    clamp_color(
        formula(base.red(), blend.red()),
        formula(base.green(), blend.green()),
        formula(base.blue(), blend.blue()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Color {
        Color::from_rgb8(v, v, v)
    }

    #[test]
    fn test_opacity_endpoints() {
        let blend = Color::from_rgb8(200, 60, 128);
        let base = Color::from_rgb8(100, 150, 200);
        assert_eq!(opacity_mix(blend, base, 100), blend);
        assert_eq!(opacity_mix(blend, base, 0), base);
    }

    #[test]
    fn test_opacity_midpoint() {
        assert_eq!(opacity_mix(gray(200), gray(0), 50), gray(100));
    }

    #[test]
    fn test_opacity_truncates_half_steps() {
        // 3 × 0.5 = 1.5; rounding would give 2.
        assert_eq!(opacity_mix(gray(3), gray(0), 50), gray(1));
        // 255 × 0.25 = 63.75
        assert_eq!(opacity_mix(gray(255), gray(0), 25), gray(63));
    }

    #[test]
    fn test_opacity_above_range_extrapolates() {
        // 200 × 1.5 + 100 × (−0.5) = 250, not clamped to the blend (200).
        assert_eq!(opacity_mix(gray(200), gray(100), 150), gray(250));
        // Far past the end only the final clamp applies.
        assert_eq!(opacity_mix(gray(200), gray(100), 300), gray(255));
    }

    #[test]
    fn test_opacity_below_range_extrapolates() {
        // 200 × (−0.5) + 100 × 1.5 = 50
        assert_eq!(opacity_mix(gray(200), gray(100), -50), gray(50));
        assert_eq!(opacity_mix(gray(200), gray(0), -50), gray(0));
    }

    #[test]
    fn test_soft_light_mix_full_and_zero_opacity() {
        let base = Color::from_rgb8(100, 150, 200);
        let blend = Color::from_rgb8(200, 60, 128);
        let full = clamp_color(
            soft_light_channel(100, 200),
            soft_light_channel(150, 60),
            soft_light_channel(200, 128),
        );
        assert_eq!(full, Color::from_rgb8(133, 117, 200));
        assert_eq!(soft_light_mix(base, blend, 100), full);
        assert_eq!(soft_light_mix(base, blend, 0), base);
    }

    #[test]
    fn test_soft_light_mix_half_opacity_fades_toward_base() {
        let base = Color::from_rgb8(100, 150, 200);
        let blend = Color::from_rgb8(200, 60, 128);
        assert_eq!(soft_light_mix(base, blend, 50), Color::from_rgb8(116, 133, 200));
    }

    #[test]
    fn test_overlay_mix_full_and_zero_opacity() {
        let base = Color::from_rgb8(100, 150, 200);
        let blend = Color::from_rgb8(200, 60, 128);
        assert_eq!(overlay_mix(base, blend, 100), Color::from_rgb8(156, 94, 200));
        assert_eq!(overlay_mix(base, blend, 0), base);
        assert_eq!(overlay_mix(base, blend, 50), Color::from_rgb8(128, 122, 200));
    }

    #[test]
    fn test_mix_argument_order_matters() {
        let a = Color::from_rgb8(100, 100, 100);
        let b = Color::from_rgb8(200, 200, 200);
        assert_ne!(overlay_mix(a, b, 100), overlay_mix(b, a, 100));
    }
}
