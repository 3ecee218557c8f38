use crate::color::Rgba;
use crate::math8::scale8;

/// Scale the red, green and blue channels of a color by `scale`
/// (0-255 = 0.0-1.0). Alpha is passed through unchanged.
pub fn scale_channels(color: Rgba, scale: u8) -> Rgba {
    Rgba {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
        a: color.a,
    }
}
