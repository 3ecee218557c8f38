mod common;

use common::FakeState;
use keylight_composer::color;
use keylight_composer::{
    ConstructionMode, EditorSceneManager, KeyBindings, KeyCode, SceneManager, SymmetryMethod,
};

fn manager() -> EditorSceneManager {
    EditorSceneManager::new(KeyBindings::default())
}

#[test]
fn base_accents_survive_the_first_poll() {
    let mut manager = manager();
    let scheme = manager.scheme(&FakeState::editor());

    // Attitude keys from the preset.
    assert_eq!(scheme.color_of(KeyCode::W), Some(color::YELLOW));
    assert_eq!(scheme.color_of(KeyCode::Q), Some(color::YELLOW));
    // Fine tweak / reset rotation / coordinate system.
    assert_eq!(scheme.color_of(KeyCode::LeftShift), Some(color::MAGENTA));
    assert_eq!(scheme.color_of(KeyCode::Space), Some(color::MAGENTA));
    assert_eq!(scheme.color_of(KeyCode::F), Some(color::MAGENTA));
}

#[test]
fn construction_mode_highlights_exactly_one_key() {
    let mut manager = manager();

    let scheme = manager.scheme(&FakeState::editor());
    assert_eq!(scheme.color_of(KeyCode::Digit1), Some(color::BLUE));
    assert_eq!(scheme.color_of(KeyCode::Digit2), Some(color::WHITE));
    assert_eq!(scheme.color_of(KeyCode::Digit3), Some(color::WHITE));
    assert_eq!(scheme.color_of(KeyCode::Digit4), Some(color::WHITE));

    let mut state = FakeState::editor();
    state.construction = ConstructionMode::Rotate;
    let scheme = manager.scheme(&state);
    // The previous highlight is re-neutralized before the new one lands.
    assert_eq!(scheme.color_of(KeyCode::Digit1), Some(color::WHITE));
    assert_eq!(scheme.color_of(KeyCode::Digit3), Some(color::BLUE));
}

#[test]
fn symmetry_and_snap_keys_follow_state() {
    let mut manager = manager();

    let scheme = manager.scheme(&FakeState::editor());
    assert_eq!(scheme.color_of(KeyCode::X), Some(color::RED));
    assert_eq!(scheme.color_of(KeyCode::C), Some(color::RED));
    assert_eq!(scheme.color_of(KeyCode::R), Some(color::BLUE));

    let mut state = FakeState::editor();
    state.symmetry_count = 2;
    state.symmetry_method = SymmetryMethod::Radial;
    state.angle_snap = true;
    let scheme = manager.scheme(&state);
    assert_eq!(scheme.color_of(KeyCode::X), Some(color::GREEN));
    assert_eq!(scheme.color_of(KeyCode::C), Some(color::GREEN));
    assert_eq!(scheme.color_of(KeyCode::R), Some(color::GREEN));
}
