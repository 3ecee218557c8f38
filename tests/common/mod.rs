//! Shared test fixtures: a scriptable game state and a capturing driver.
#![allow(dead_code)]

use keylight_composer::{
    ActionGroup, ActionGroupSet, CameraMode, ClearToSave, ColorScheme, ConstructionMode, GameMode,
    GameState, OutputDriver, ResourceKind, ResourceLevel, SymmetryMethod, VesselId, WarpMode,
};

/// Game state stub with every queried value scriptable per test.
pub struct FakeState {
    pub mode: GameMode,
    pub vessel: Option<VesselId>,
    pub eva: bool,
    pub resources: Vec<ResourceLevel>,
    pub eva_fuel: (f64, f64),
    pub altitude: f64,
    pub part_actions: Vec<ActionGroupSet>,
    pub toggled: Vec<ActionGroup>,
    pub map_view: bool,
    pub precision: bool,
    pub clear_to_save: ClearToSave,
    pub warp: WarpMode,
    pub camera: CameraMode,
    pub construction: ConstructionMode,
    pub symmetry_count: u8,
    pub symmetry_method: SymmetryMethod,
    pub angle_snap: bool,
}

impl FakeState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            vessel: None,
            eva: false,
            resources: Vec::new(),
            eva_fuel: (0.0, 0.0),
            altitude: 0.0,
            part_actions: Vec::new(),
            toggled: Vec::new(),
            map_view: false,
            precision: false,
            clear_to_save: ClearToSave::Clear,
            warp: WarpMode::Physics,
            camera: CameraMode::Auto,
            construction: ConstructionMode::Place,
            symmetry_count: 0,
            symmetry_method: SymmetryMethod::Mirror,
            angle_snap: false,
        }
    }

    /// Flight mode with a controlled vessel.
    pub fn flight() -> Self {
        let mut state = Self::new(GameMode::Flight);
        state.vessel = Some(VesselId(1));
        state
    }

    pub fn editor() -> Self {
        Self::new(GameMode::Editor)
    }

    pub fn other() -> Self {
        Self::new(GameMode::Other)
    }

    pub fn with_resource(mut self, kind: ResourceKind, amount: f64, max_amount: f64) -> Self {
        self.resources.push(ResourceLevel { kind, amount, max_amount });
        self
    }
}

impl GameState for FakeState {
    fn mode(&self) -> GameMode {
        self.mode
    }

    fn active_vessel(&self) -> Option<VesselId> {
        self.vessel
    }

    fn is_eva(&self) -> bool {
        self.eva
    }

    fn resources(&self) -> &[ResourceLevel] {
        &self.resources
    }

    fn eva_fuel(&self) -> (f64, f64) {
        self.eva_fuel
    }

    fn altitude(&self) -> f64 {
        self.altitude
    }

    fn part_actions(&self) -> &[ActionGroupSet] {
        &self.part_actions
    }

    fn group_toggled(&self, group: ActionGroup) -> bool {
        self.toggled.contains(&group)
    }

    fn map_view_enabled(&self) -> bool {
        self.map_view
    }

    fn precision_mode(&self) -> bool {
        self.precision
    }

    fn clear_to_save(&self) -> ClearToSave {
        self.clear_to_save
    }

    fn warp_mode(&self) -> WarpMode {
        self.warp
    }

    fn camera_mode(&self) -> CameraMode {
        self.camera
    }

    fn construction_mode(&self) -> ConstructionMode {
        self.construction
    }

    fn symmetry_count(&self) -> u8 {
        self.symmetry_count
    }

    fn symmetry_method(&self) -> SymmetryMethod {
        self.symmetry_method
    }

    fn angle_snap(&self) -> bool {
        self.angle_snap
    }
}

/// Driver that records every scheme written to it.
#[derive(Default)]
pub struct CaptureDriver {
    pub frames: Vec<ColorScheme>,
}

impl OutputDriver for CaptureDriver {
    fn write(&mut self, scheme: &ColorScheme) {
        self.frames.push(scheme.clone());
    }
}
