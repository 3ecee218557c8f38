//! Bucketed bar-graph fills over fixed key groups.
//!
//! A bounded quantity is split across an ordered key group: every bucket
//! below the current value is fully lit, the bucket containing it is lit at
//! the linear fill fraction, and buckets above it go dark. [`fill_gauge`]
//! uses equal-width buckets, [`fill_decade_band`] powers of ten.

use crate::color::{self, Rgba, scale_channels};
use crate::keys::KeyCode;
use crate::math8::fraction8;
use crate::scheme::ColorScheme;

/// Values this close to (or below) a bucket floor render the bucket dark.
pub const GAUGE_EPSILON: f64 = 0.001;

/// Color of one bucket spanning `[floor, ceiling)` for the given value.
///
/// A zero-width bucket never divides; it is treated as drained.
pub fn segment_color(target: Rgba, amount: f64, floor: f64, ceiling: f64) -> Rgba {
    let mut segment = target;
    if amount <= ceiling {
        let width = ceiling - floor;
        if width <= GAUGE_EPSILON {
            segment = color::BLACK;
        } else {
            segment = scale_channels(segment, fraction8((amount - floor) / width));
        }
    }
    if amount - floor < GAUGE_EPSILON {
        segment = color::BLACK;
    }
    segment
}

/// Fill an equal-bucket gauge for `amount` out of `max_amount` across `keys`.
///
/// Bucket `i` of `n` spans `[max/n * i, max/n * (i + 1))`. A zero or missing
/// capacity renders every key dark.
#[allow(clippy::cast_precision_loss)]
pub fn fill_gauge(
    scheme: &mut ColorScheme,
    keys: &[KeyCode],
    target: Rgba,
    amount: f64,
    max_amount: f64,
) {
    let buckets = keys.len() as f64;
    for (i, &key) in keys.iter().enumerate() {
        let floor = max_amount / buckets * i as f64;
        let ceiling = max_amount / buckets * (i + 1) as f64;
        scheme.set_key(key, segment_color(target, amount, floor, ceiling));
    }
}

/// Fill a logarithmic band for `value` across `keys`.
///
/// The first key spans `[0, 1)`; key `i` spans `[10^(i-1), 10^i)`, so a
/// ten-key band covers values up to 10^9.
#[allow(clippy::cast_precision_loss)]
pub fn fill_decade_band(scheme: &mut ColorScheme, keys: &[KeyCode], target: Rgba, value: f64) {
    for (i, &key) in keys.iter().enumerate() {
        let (floor, ceiling) = if i == 0 {
            (0.0, 1.0)
        } else {
            (libm::pow(10.0, (i - 1) as f64), libm::pow(10.0, i as f64))
        };
        scheme.set_key(key, segment_color(target, value, floor, ceiling));
    }
}
