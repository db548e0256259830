use crate::constants::{COLOR_MAX, GRADIENT_OFFSET, RAINBOW_HUE_PER_SEC, RAINBOW_OFFSET};
use rand::Rng;

// Packed 0xRRGGBB helpers for the two cursor lights.

#[inline]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..COLOR_MAX)
}

/// Second gradient stop, a fixed step away from `base` on the packed scale.
#[inline]
pub fn gradient_partner(base: u32) -> u32 {
    (base + GRADIENT_OFFSET) % COLOR_MAX
}

/// Light colors for rainbow mode at `time_sec`.
///
/// The hue wraps every `1 / RAINBOW_HUE_PER_SEC` seconds regardless of frame
/// rate; light2 trails light1 by a constant offset.
pub fn rainbow_pair(time_sec: f64) -> (u32, u32) {
    let hue = (time_sec * RAINBOW_HUE_PER_SEC).rem_euclid(1.0);
    let color = (hue * COLOR_MAX as f64) as u32;
    (color, (color + RAINBOW_OFFSET) % COLOR_MAX)
}
