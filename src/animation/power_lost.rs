//! Out-of-power warning blink.
//!
//! Two precomputed full-keyboard frames alternating once per second: a red
//! frame with blue lightning bolts and a blue frame with white ones. The
//! blink runs until the vessel has charge again or flight ends.

use embassy_time::Instant;
use log::debug;

use super::Animation;
use crate::color;
use crate::keys::KeyCode;
use crate::scheme::ColorScheme;
use crate::state::{GameMode, GameState, ResourceKind};

/// Charge at or below this level counts as depleted.
const CHARGE_EPSILON: f64 = 0.0001;

/// Two lightning bolts, one per keyboard half.
const LIGHTNING_KEYS: [KeyCode; 16] = [
    // Left bolt
    KeyCode::F2,
    KeyCode::Digit3,
    KeyCode::W,
    KeyCode::E,
    KeyCode::R,
    KeyCode::D,
    KeyCode::X,
    KeyCode::LeftAlt,
    // Right bolt
    KeyCode::F9,
    KeyCode::Digit0,
    KeyCode::O,
    KeyCode::P,
    KeyCode::LeftBracket,
    KeyCode::Semicolon,
    KeyCode::Period,
    KeyCode::RightAlt,
];

/// Warns that the vessel is out of electric charge and uncontrollable.
#[derive(Debug, Clone)]
pub struct PowerLostAnimation {
    red: ColorScheme,
    blue: ColorScheme,
}

impl PowerLostAnimation {
    pub fn new() -> Self {
        let mut red = ColorScheme::new(color::RED);
        red.set_keys(&LIGHTNING_KEYS, color::BLUE);

        let mut blue = ColorScheme::new(color::BLUE);
        blue.set_keys(&LIGHTNING_KEYS, color::WHITE);

        debug!("power lost animation armed");
        Self { red, blue }
    }

    /// True when the vessel carries an electric charge store that is drained.
    ///
    /// A vessel without any charge store does not count: there is nothing to
    /// wait for, so the blink would never end.
    pub fn charge_depleted<S: GameState>(state: &S) -> bool {
        state
            .resources()
            .iter()
            .find(|resource| resource.kind == ResourceKind::ElectricCharge)
            .is_some_and(|resource| resource.amount <= CHARGE_EPSILON)
    }
}

impl Default for PowerLostAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for PowerLostAnimation {
    fn frame(&mut self, now: Instant) -> &ColorScheme {
        if now.as_secs() % 2 == 0 {
            &self.red
        } else {
            &self.blue
        }
    }

    fn is_finished<S: GameState>(&self, state: &S) -> bool {
        if state.mode() != GameMode::Flight {
            return true;
        }
        !Self::charge_depleted(state)
    }
}
