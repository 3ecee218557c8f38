//! Full-keyboard color snapshots.
//!
//! A [`ColorScheme`] always covers every valid key, so each poll produces a
//! complete frame and no key can be left stale from a previous one. Overlay
//! writes are "last write wins"; there is no blending and no removal.

pub mod presets;

use heapless::FnvIndexMap;

use crate::color::{self, Rgba};
use crate::keys::KeyCode;

/// Map capacity. Must be a power of two at least [`KeyCode::COUNT`].
const SCHEME_CAPACITY: usize = 128;

const _: () = assert!(KeyCode::COUNT <= SCHEME_CAPACITY);

/// A color for every valid key.
///
/// The sentinel [`KeyCode::None`] is never an entry, and writes to it (or to
/// any other unrecognized key) are silently ignored.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    colors: FnvIndexMap<KeyCode, Rgba, SCHEME_CAPACITY>,
}

impl ColorScheme {
    /// Create a scheme with every valid key set to `color`.
    pub fn new(color: Rgba) -> Self {
        let mut colors = FnvIndexMap::new();
        for &key in KeyCode::ALL {
            let _ = colors.insert(key, color);
        }
        Self { colors }
    }

    /// Overwrite the color of a single key, if it is a valid key.
    pub fn set_key(&mut self, key: KeyCode, color: Rgba) {
        if let Some(slot) = self.colors.get_mut(&key) {
            *slot = color;
        }
    }

    /// Overwrite the color of each key in `keys`, in order.
    pub fn set_keys(&mut self, keys: &[KeyCode], color: Rgba) {
        for &key in keys {
            self.set_key(key, color);
        }
    }

    /// Color of `key`, or `None` for the sentinel.
    pub fn color_of(&self, key: KeyCode) -> Option<Rgba> {
        self.colors.get(&key).copied()
    }

    /// Number of keys covered. Always [`KeyCode::COUNT`].
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over all `(key, color)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (KeyCode, Rgba)> + '_ {
        self.colors.iter().map(|(&key, &color)| (key, color))
    }
}

impl Default for ColorScheme {
    /// All keys off.
    fn default() -> Self {
        Self::new(color::BLACK)
    }
}

impl PartialEq for ColorScheme {
    fn eq(&self, other: &Self) -> bool {
        self.colors.len() == other.colors.len()
            && self
                .colors
                .iter()
                .all(|(key, color)| other.colors.get(key) == Some(color))
    }
}

impl Eq for ColorScheme {}
