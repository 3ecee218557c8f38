mod utils;

use rgb::RGBA8;
pub use utils::scale_channels;

pub type Rgba = RGBA8;

pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 255 };
pub const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };
pub const RED: Rgba = Rgba { r: 255, g: 0, b: 0, a: 255 };
pub const GREEN: Rgba = Rgba { r: 0, g: 255, b: 0, a: 255 };
pub const BLUE: Rgba = Rgba { r: 0, g: 0, b: 255, a: 255 };
pub const YELLOW: Rgba = Rgba { r: 255, g: 255, b: 0, a: 255 };
pub const CYAN: Rgba = Rgba { r: 0, g: 255, b: 255, a: 255 };
pub const MAGENTA: Rgba = Rgba { r: 255, g: 0, b: 255, a: 255 };
pub const GRAY: Rgba = Rgba { r: 128, g: 128, b: 128, a: 255 };
pub const ORANGE: Rgba = Rgba { r: 255, g: 165, b: 0, a: 255 };
pub const PURPLE: Rgba = Rgba { r: 128, g: 0, b: 255, a: 255 };
/// Ablator gauge color, slightly off yellow.
pub const AMBER: Rgba = Rgba { r: 244, g: 255, b: 0, a: 255 };
/// Idle scheme background.
pub const DEEP_BLUE: Rgba = Rgba { r: 0, g: 0, b: 48, a: 255 };
