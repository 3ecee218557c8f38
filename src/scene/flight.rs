//! Flight scene.

use log::debug;

use super::SceneManager;
use crate::bindings::KeyBindings;
use crate::color::{self, Rgba};
use crate::gauge::{fill_decade_band, fill_gauge};
use crate::keys::KeyCode;
use crate::scheme::{ColorScheme, presets};
use crate::state::{
    ActionGroup, ActionGroupSet, CameraMode, ClearToSave, GameState, ResourceKind, VesselId,
    WarpMode,
};

/// Altitude band, one decade per function key. Quicksave/quickload lights
/// overwrite F5/F9 afterwards by call order.
const ALTITUDE_KEYS: [KeyCode; 10] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
    KeyCode::F8,
    KeyCode::F9,
    KeyCode::F10,
];

/// Fixed key group and target color for each displayable resource.
const fn gauge_slots(kind: ResourceKind) -> ([KeyCode; 3], Rgba) {
    match kind {
        ResourceKind::ElectricCharge => (
            [KeyCode::PrintScreen, KeyCode::ScrollLock, KeyCode::Pause],
            color::BLUE,
        ),
        ResourceKind::LiquidFuel => (
            [KeyCode::NumLock, KeyCode::KeypadDivide, KeyCode::KeypadMultiply],
            color::GREEN,
        ),
        ResourceKind::Oxidizer => (
            [KeyCode::Keypad7, KeyCode::Keypad8, KeyCode::Keypad9],
            color::CYAN,
        ),
        ResourceKind::MonoPropellant | ResourceKind::EvaFuel => (
            [KeyCode::Keypad4, KeyCode::Keypad5, KeyCode::Keypad6],
            color::YELLOW,
        ),
        ResourceKind::SolidFuel => (
            [KeyCode::Keypad1, KeyCode::Keypad2, KeyCode::Keypad3],
            color::MAGENTA,
        ),
        ResourceKind::Ablator => (
            [KeyCode::Delete, KeyCode::End, KeyCode::PageDown],
            color::AMBER,
        ),
        ResourceKind::XenonGas => (
            [KeyCode::Insert, KeyCode::Home, KeyCode::PageUp],
            color::GRAY,
        ),
    }
}

/// Keyboard colors during flight, for vessels and kerbals on EVA.
///
/// Repaints an owned scheme from the matching base preset every poll. The
/// usable action-group set is rebuilt only when the controlled vessel
/// changes; the scan over part actions is the expensive part and stays off
/// the per-poll path.
#[derive(Debug, Clone)]
pub struct FlightSceneManager {
    bindings: KeyBindings,
    scheme: ColorScheme,
    flight_base: ColorScheme,
    eva_base: ColorScheme,
    vessel: Option<VesselId>,
    usable_groups: ActionGroupSet,
}

impl FlightSceneManager {
    pub fn new(bindings: KeyBindings) -> Self {
        let flight_base = presets::flight(&bindings);
        let eva_base = presets::eva(&bindings);
        Self {
            bindings,
            scheme: ColorScheme::default(),
            flight_base,
            eva_base,
            vessel: None,
            usable_groups: ActionGroupSet::EMPTY,
        }
    }

    /// Rebuild the usable-group set from the vessel's part actions.
    ///
    /// The host never reports RCS and SAS membership, so both are forced on.
    fn rescan_action_groups<S: GameState>(&mut self, state: &S) {
        let mut usable = ActionGroupSet::EMPTY;
        for &actions in state.part_actions() {
            for &group in ActionGroup::ALL {
                if actions.contains(group) {
                    usable.insert(group);
                }
            }
        }
        usable.insert(ActionGroup::Rcs);
        usable.insert(ActionGroup::Sas);
        self.usable_groups = usable;
    }

    /// Gauge every displayable resource store onto its key group.
    fn update_resources<S: GameState>(&mut self, state: &S) {
        for resource in state.resources() {
            let (keys, target) = gauge_slots(resource.kind);
            fill_gauge(
                &mut self.scheme,
                &keys,
                target,
                resource.amount,
                resource.max_amount,
            );
        }
    }

    fn update_altitude<S: GameState>(&mut self, state: &S) {
        fill_decade_band(
            &mut self.scheme,
            &ALTITUDE_KEYS,
            color::WHITE,
            state.altitude(),
        );
    }

    /// Color every toggleable key from the vessel's current state.
    fn update_toggleables<S: GameState>(&mut self, state: &S) {
        for binding in &self.bindings.groups {
            let group_color = if !self.usable_groups.contains(binding.group) {
                color::BLACK
            } else if state.group_toggled(binding.group) {
                binding.on
            } else {
                binding.off
            };
            self.scheme.set_key(binding.key, group_color);
        }

        let map_color = if state.map_view_enabled() {
            color::GREEN
        } else {
            color::RED
        };
        self.scheme.set_key(self.bindings.map_toggle, map_color);

        if state.precision_mode() {
            self.scheme
                .set_keys(&self.bindings.rotation_keys(), color::YELLOW);
            self.scheme
                .set_key(self.bindings.precision_toggle, color::GREEN);
        } else {
            self.scheme
                .set_keys(&self.bindings.rotation_keys(), color::WHITE);
            self.scheme
                .set_key(self.bindings.precision_toggle, color::RED);
        }

        if matches!(
            state.clear_to_save(),
            ClearToSave::Clear | ClearToSave::NotInAtmosphere | ClearToSave::NotUnderAcceleration
        ) {
            self.scheme.set_key(self.bindings.quicksave, color::GREEN);
        }
        self.scheme.set_key(self.bindings.quickload, color::GREEN);

        let warp_color = match state.warp_mode() {
            WarpMode::Rails => color::GREEN,
            WarpMode::Physics => color::RED,
        };
        self.scheme
            .set_keys(&self.bindings.time_warp_keys(), warp_color);

        let camera_color = match state.camera_mode() {
            CameraMode::Auto => color::GREEN,
            CameraMode::Chase => color::BLUE,
            CameraMode::Free => color::YELLOW,
            CameraMode::Locked => color::CYAN,
            CameraMode::Orbital => color::WHITE,
        };
        self.scheme
            .set_key(self.bindings.camera_next, camera_color);
    }
}

impl SceneManager for FlightSceneManager {
    fn scheme<S: GameState>(&mut self, state: &S) -> &ColorScheme {
        if self.vessel != state.active_vessel() {
            self.vessel = state.active_vessel();
            self.rescan_action_groups(state);
            debug!("active vessel changed, action groups rescanned");
        }

        if self.vessel.is_none() {
            self.scheme.clone_from(&self.flight_base);
            return &self.scheme;
        }

        if state.is_eva() {
            self.scheme.clone_from(&self.eva_base);
            let (amount, capacity) = state.eva_fuel();
            let (keys, target) = gauge_slots(ResourceKind::EvaFuel);
            fill_gauge(&mut self.scheme, &keys, target, amount, capacity);
            self.update_altitude(state);
        } else {
            self.scheme.clone_from(&self.flight_base);
            self.update_resources(state);
            self.update_altitude(state);
            self.update_toggleables(state);
        }

        &self.scheme
    }
}
