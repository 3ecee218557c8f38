//! Key binding configuration.
//!
//! Plain-data configuration in the stock layout of the game's default
//! bindings. Hosts that let players rebind controls build one of these from
//! the live settings instead of using [`KeyBindings::default`].

use crate::color::{self, Rgba};
use crate::keys::KeyCode;
use crate::state::ActionGroup;

/// One toggleable action group: its key and the colors for both states.
#[derive(Debug, Clone, Copy)]
pub struct GroupBinding {
    pub group: ActionGroup,
    pub key: KeyCode,
    /// Shown when the group is usable but currently off.
    pub off: Rgba,
    /// Shown when the group is toggled on.
    pub on: Rgba,
}

impl GroupBinding {
    const fn red_green(group: ActionGroup, key: KeyCode) -> Self {
        Self { group, key, off: color::RED, on: color::GREEN }
    }
}

/// Editor (construction scene) bindings.
#[derive(Debug, Clone, Copy)]
pub struct EditorBindings {
    pub pitch_up: KeyCode,
    pub pitch_down: KeyCode,
    pub roll_left: KeyCode,
    pub roll_right: KeyCode,
    pub yaw_left: KeyCode,
    pub yaw_right: KeyCode,
    pub fine_tweak: KeyCode,
    pub reset_rotation: KeyCode,
    pub coord_system: KeyCode,
    pub mode_place: KeyCode,
    pub mode_offset: KeyCode,
    pub mode_rotate: KeyCode,
    pub mode_root: KeyCode,
    pub toggle_symmetry_mode: KeyCode,
    pub toggle_symmetry_method: KeyCode,
    pub toggle_angle_snap: KeyCode,
}

impl EditorBindings {
    /// The six part-attitude keys, for batch overlays.
    pub const fn attitude_keys(&self) -> [KeyCode; 6] {
        [
            self.pitch_up,
            self.pitch_down,
            self.roll_left,
            self.roll_right,
            self.yaw_left,
            self.yaw_right,
        ]
    }
}

impl Default for EditorBindings {
    fn default() -> Self {
        Self {
            pitch_up: KeyCode::S,
            pitch_down: KeyCode::W,
            roll_left: KeyCode::Q,
            roll_right: KeyCode::E,
            yaw_left: KeyCode::A,
            yaw_right: KeyCode::D,
            fine_tweak: KeyCode::LeftShift,
            reset_rotation: KeyCode::Space,
            coord_system: KeyCode::F,
            mode_place: KeyCode::Digit1,
            mode_offset: KeyCode::Digit2,
            mode_rotate: KeyCode::Digit3,
            mode_root: KeyCode::Digit4,
            toggle_symmetry_mode: KeyCode::X,
            toggle_symmetry_method: KeyCode::R,
            toggle_angle_snap: KeyCode::C,
        }
    }
}

/// Flight and editor bindings plus the per-group toggle configuration.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub pitch_up: KeyCode,
    pub pitch_down: KeyCode,
    pub roll_left: KeyCode,
    pub roll_right: KeyCode,
    pub yaw_left: KeyCode,
    pub yaw_right: KeyCode,

    pub translate_forward: KeyCode,
    pub translate_back: KeyCode,
    pub translate_left: KeyCode,
    pub translate_right: KeyCode,
    pub translate_up: KeyCode,
    pub translate_down: KeyCode,

    pub throttle_up: KeyCode,
    pub throttle_down: KeyCode,
    pub throttle_full: KeyCode,
    pub throttle_cutoff: KeyCode,

    pub time_warp_increase: KeyCode,
    pub time_warp_decrease: KeyCode,

    pub map_toggle: KeyCode,
    pub precision_toggle: KeyCode,
    pub quicksave: KeyCode,
    pub quickload: KeyCode,
    pub camera_next: KeyCode,

    pub groups: [GroupBinding; ActionGroup::COUNT],
    pub editor: EditorBindings,
}

impl KeyBindings {
    /// The six attitude keys, in the overlay order used by the flight scene.
    pub const fn rotation_keys(&self) -> [KeyCode; 6] {
        [
            self.roll_left,
            self.roll_right,
            self.pitch_down,
            self.pitch_up,
            self.yaw_left,
            self.yaw_right,
        ]
    }

    /// The six RCS translation keys.
    pub const fn translation_keys(&self) -> [KeyCode; 6] {
        [
            self.translate_back,
            self.translate_forward,
            self.translate_left,
            self.translate_right,
            self.translate_up,
            self.translate_down,
        ]
    }

    /// The two time warp keys.
    pub const fn time_warp_keys(&self) -> [KeyCode; 2] {
        [self.time_warp_increase, self.time_warp_decrease]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pitch_up: KeyCode::S,
            pitch_down: KeyCode::W,
            roll_left: KeyCode::Q,
            roll_right: KeyCode::E,
            yaw_left: KeyCode::A,
            yaw_right: KeyCode::D,

            translate_forward: KeyCode::H,
            translate_back: KeyCode::N,
            translate_left: KeyCode::J,
            translate_right: KeyCode::L,
            translate_up: KeyCode::I,
            translate_down: KeyCode::K,

            throttle_up: KeyCode::LeftShift,
            throttle_down: KeyCode::LeftControl,
            throttle_full: KeyCode::Z,
            throttle_cutoff: KeyCode::X,

            time_warp_increase: KeyCode::Period,
            time_warp_decrease: KeyCode::Comma,

            map_toggle: KeyCode::M,
            precision_toggle: KeyCode::CapsLock,
            quicksave: KeyCode::F5,
            quickload: KeyCode::F9,
            camera_next: KeyCode::V,

            groups: [
                GroupBinding::red_green(ActionGroup::Stage, KeyCode::Space),
                GroupBinding::red_green(ActionGroup::Gear, KeyCode::G),
                GroupBinding::red_green(ActionGroup::Light, KeyCode::U),
                GroupBinding::red_green(ActionGroup::Rcs, KeyCode::R),
                GroupBinding::red_green(ActionGroup::Sas, KeyCode::T),
                GroupBinding::red_green(ActionGroup::Brakes, KeyCode::B),
                GroupBinding::red_green(ActionGroup::Abort, KeyCode::Backspace),
                GroupBinding::red_green(ActionGroup::Custom01, KeyCode::Digit1),
                GroupBinding::red_green(ActionGroup::Custom02, KeyCode::Digit2),
                GroupBinding::red_green(ActionGroup::Custom03, KeyCode::Digit3),
                GroupBinding::red_green(ActionGroup::Custom04, KeyCode::Digit4),
                GroupBinding::red_green(ActionGroup::Custom05, KeyCode::Digit5),
                GroupBinding::red_green(ActionGroup::Custom06, KeyCode::Digit6),
                GroupBinding::red_green(ActionGroup::Custom07, KeyCode::Digit7),
                GroupBinding::red_green(ActionGroup::Custom08, KeyCode::Digit8),
                GroupBinding::red_green(ActionGroup::Custom09, KeyCode::Digit9),
                GroupBinding::red_green(ActionGroup::Custom10, KeyCode::Digit0),
            ],
            editor: EditorBindings::default(),
        }
    }
}
