//! Base schemes the scene managers and the idle screen start from.
//!
//! Each preset is a full-coverage scheme; the managers overlay live state on
//! top of it every poll.

use crate::bindings::KeyBindings;
use crate::color;
use crate::keys::KeyCode;
use crate::scheme::ColorScheme;

/// Base scheme for piloting a vessel.
pub fn flight(bindings: &KeyBindings) -> ColorScheme {
    let mut scheme = ColorScheme::new(color::BLACK);
    scheme.set_keys(&bindings.translation_keys(), color::PURPLE);
    scheme.set_key(bindings.throttle_up, color::GREEN);
    scheme.set_key(bindings.throttle_down, color::RED);
    scheme.set_key(bindings.throttle_full, color::GREEN);
    scheme.set_key(bindings.throttle_cutoff, color::RED);
    scheme
}

/// Base scheme for a kerbal on EVA.
///
/// EVA movement is not rebindable in the host game, so these keys are fixed.
pub fn eva(bindings: &KeyBindings) -> ColorScheme {
    let mut scheme = ColorScheme::new(color::BLACK);
    scheme.set_keys(
        &[
            bindings.pitch_down,
            bindings.pitch_up,
            bindings.yaw_left,
            bindings.yaw_right,
        ],
        color::WHITE,
    );
    // Jump, jetpack toggle, headlamps, grab.
    scheme.set_key(KeyCode::Space, color::GREEN);
    scheme.set_key(KeyCode::R, color::CYAN);
    scheme.set_key(KeyCode::L, color::YELLOW);
    scheme.set_key(KeyCode::F, color::ORANGE);
    scheme
}

/// Base scheme for the construction editor.
pub fn editor(bindings: &KeyBindings) -> ColorScheme {
    let mut scheme = ColorScheme::new(color::BLACK);
    scheme.set_keys(&bindings.editor.attitude_keys(), color::YELLOW);
    scheme.set_keys(
        &[
            bindings.editor.fine_tweak,
            bindings.editor.reset_rotation,
            bindings.editor.coord_system,
        ],
        color::MAGENTA,
    );
    scheme
}

/// Idle scheme shown outside flight and editor scenes.
///
/// A small rocket glyph on the right-hand letter cluster.
pub fn logo() -> ColorScheme {
    let mut scheme = ColorScheme::new(color::DEEP_BLUE);
    scheme.set_keys(&[KeyCode::Digit8, KeyCode::I, KeyCode::K], color::WHITE);
    scheme.set_keys(&[KeyCode::U, KeyCode::O], color::GRAY);
    scheme.set_key(KeyCode::Comma, color::ORANGE);
    scheme
}
