//! Construction editor scene.

use super::SceneManager;
use crate::bindings::KeyBindings;
use crate::color;
use crate::scheme::{ColorScheme, presets};
use crate::state::{ConstructionMode, GameState, SymmetryMethod};

/// Keyboard colors for the construction editor.
///
/// The scheme is seeded from the editor preset once and then mutated in
/// place; the mutually exclusive key groups are re-neutralized at the start
/// of every poll before the current state is highlighted.
#[derive(Debug, Clone)]
pub struct EditorSceneManager {
    bindings: KeyBindings,
    scheme: ColorScheme,
}

impl EditorSceneManager {
    pub fn new(bindings: KeyBindings) -> Self {
        let scheme = presets::editor(&bindings);
        Self { bindings, scheme }
    }

    /// Highlight the key of the selected construction tool.
    fn update_construction_mode<S: GameState>(&mut self, state: &S) {
        let editor = &self.bindings.editor;
        self.scheme.set_keys(
            &[
                editor.mode_place,
                editor.mode_offset,
                editor.mode_rotate,
                editor.mode_root,
            ],
            color::WHITE,
        );

        let selected = match state.construction_mode() {
            ConstructionMode::Place => editor.mode_place,
            ConstructionMode::Offset => editor.mode_offset,
            ConstructionMode::Rotate => editor.mode_rotate,
            ConstructionMode::Root => editor.mode_root,
        };
        self.scheme.set_key(selected, color::BLUE);
    }

    /// Color the symmetry and snap keys by their state.
    fn update_toggleables<S: GameState>(&mut self, state: &S) {
        let editor = &self.bindings.editor;
        self.scheme.set_keys(
            &[editor.toggle_symmetry_mode, editor.toggle_angle_snap],
            color::RED,
        );

        if state.symmetry_count() > 0 {
            self.scheme
                .set_key(editor.toggle_symmetry_mode, color::GREEN);
        }

        let method_color = match state.symmetry_method() {
            SymmetryMethod::Mirror => color::BLUE,
            SymmetryMethod::Radial => color::GREEN,
        };
        self.scheme.set_key(editor.toggle_symmetry_method, method_color);

        if state.angle_snap() {
            self.scheme.set_key(editor.toggle_angle_snap, color::GREEN);
        }
    }
}

impl SceneManager for EditorSceneManager {
    fn scheme<S: GameState>(&mut self, state: &S) -> &ColorScheme {
        self.update_construction_mode(state);
        self.update_toggleables(state);
        &self.scheme
    }
}
