/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Convert a unit-interval fraction to the 8-bit scale domain.
///
/// Out-of-range inputs saturate, so a fill fraction computed from a value
/// below its bucket floor comes out as 0 rather than wrapping.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn fraction8(fraction: f64) -> u8 {
    if fraction <= 0.0 {
        return 0;
    }
    if fraction >= 1.0 {
        return 255;
    }
    (fraction * 255.0) as u8
}
