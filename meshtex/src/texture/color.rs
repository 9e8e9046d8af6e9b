//! Color helpers shared by palettes and patterns

/// Convert HSV to 8-bit RGB
///
/// `hue` is in degrees and wraps, so `360.0` and `-0.0` both give red.
/// `saturation` and `value` are in `[0, 1]`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (u8, u8, u8) {
    let sector = hue.rem_euclid(360.0) / 60.0;
    let f = sector.fract();
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u32 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    (to_byte(r), to_byte(g), to_byte(b))
}

#[inline]
fn to_byte(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Per-channel linear blend from `from` (t = 0) to `to` (t = 1)
pub(crate) fn lerp_color(from: [u8; 4], to: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    std::array::from_fn(|c| {
        let (a, b) = (from[c] as f32, to[c] as f32);
        (a + (b - a) * t).round() as u8
    })
}
