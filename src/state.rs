//! Read-only facade over the host game.
//!
//! Everything the composer knows about the simulation comes through
//! [`GameState`]. All accessors except [`GameState::mode`] have neutral
//! defaults, so a host only implements what its current context can answer;
//! an absent value renders as the off/neutral color, never as an error.

/// High-level game context, selects the scene manager for the poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Flight,
    Editor,
    /// Menus, loading screens, anything else. Renders the idle scheme.
    Other,
}

/// Opaque identity of a controlled vessel, used only for change detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselId(pub u32);

/// Resource stores the composer knows how to display.
///
/// Closed set: unrecognized resource names never construct a kind and are
/// silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ElectricCharge,
    LiquidFuel,
    Oxidizer,
    MonoPropellant,
    EvaFuel,
    SolidFuel,
    Ablator,
    XenonGas,
}

impl ResourceKind {
    /// Parse a host resource name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ElectricCharge" => Some(Self::ElectricCharge),
            "LiquidFuel" => Some(Self::LiquidFuel),
            "Oxidizer" => Some(Self::Oxidizer),
            "MonoPropellant" => Some(Self::MonoPropellant),
            "EVAFuel" | "EVA Propellant" => Some(Self::EvaFuel),
            "SolidFuel" => Some(Self::SolidFuel),
            "Ablator" => Some(Self::Ablator),
            "XenonGas" => Some(Self::XenonGas),
            _ => None,
        }
    }
}

/// One resource store: current and maximum amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceLevel {
    pub kind: ResourceKind,
    pub amount: f64,
    pub max_amount: f64,
}

/// Grouped vessel controls that can be toggled from one key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    Stage,
    Gear,
    Light,
    Rcs,
    Sas,
    Brakes,
    Abort,
    Custom01,
    Custom02,
    Custom03,
    Custom04,
    Custom05,
    Custom06,
    Custom07,
    Custom08,
    Custom09,
    Custom10,
}

impl ActionGroup {
    pub const ALL: &'static [ActionGroup] = &[
        Self::Stage,
        Self::Gear,
        Self::Light,
        Self::Rcs,
        Self::Sas,
        Self::Brakes,
        Self::Abort,
        Self::Custom01,
        Self::Custom02,
        Self::Custom03,
        Self::Custom04,
        Self::Custom05,
        Self::Custom06,
        Self::Custom07,
        Self::Custom08,
        Self::Custom09,
        Self::Custom10,
    ];

    pub const COUNT: usize = Self::ALL.len();
}

/// Bitmask over [`ActionGroup`].
///
/// Part actions report membership through one mask per action; the flight
/// scene manager folds them into the set of groups worth lighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionGroupSet(u32);

impl ActionGroupSet {
    pub const EMPTY: Self = Self(0);

    pub const fn contains(self, group: ActionGroup) -> bool {
        self.0 & (1 << group as u32) != 0
    }

    #[must_use]
    pub const fn with(self, group: ActionGroup) -> Self {
        Self(self.0 | (1 << group as u32))
    }

    pub fn insert(&mut self, group: ActionGroup) {
        self.0 |= 1 << group as u32;
    }
}

/// Flight camera mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Auto,
    Chase,
    Free,
    Locked,
    Orbital,
}

/// Whether time warp multiplies on rails or under physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpMode {
    Physics,
    Rails,
}

/// Why (or whether) the vessel may be quicksaved right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearToSave {
    Clear,
    NotInAtmosphere,
    NotUnderAcceleration,
    AboutToCrash,
    MovingOverSurface,
    ThrottledUp,
}

/// Construction tool selected in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionMode {
    Place,
    Offset,
    Rotate,
    Root,
}

/// Symmetry layout selected in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryMethod {
    Mirror,
    Radial,
}

/// Read-only game queries, polled once per frame.
///
/// Defaults are the neutral answers of an empty context.
pub trait GameState {
    /// Current high-level context.
    fn mode(&self) -> GameMode;

    /// Identity of the controlled vessel, if any.
    fn active_vessel(&self) -> Option<VesselId> {
        None
    }

    /// True when the controlled entity is a kerbal on EVA.
    fn is_eva(&self) -> bool {
        false
    }

    /// Resource stores of the controlled vessel.
    fn resources(&self) -> &[ResourceLevel] {
        &[]
    }

    /// EVA jetpack propellant as `(amount, capacity)`.
    fn eva_fuel(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Height above the surface, in meters.
    fn altitude(&self) -> f64 {
        0.0
    }

    /// One action-group membership mask per part action on the vessel.
    fn part_actions(&self) -> &[ActionGroupSet] {
        &[]
    }

    /// Current on/off state of a toggleable group.
    fn group_toggled(&self, group: ActionGroup) -> bool {
        let _ = group;
        false
    }

    fn map_view_enabled(&self) -> bool {
        false
    }

    fn precision_mode(&self) -> bool {
        false
    }

    fn clear_to_save(&self) -> ClearToSave {
        ClearToSave::Clear
    }

    fn warp_mode(&self) -> WarpMode {
        WarpMode::Physics
    }

    fn camera_mode(&self) -> CameraMode {
        CameraMode::Auto
    }

    fn construction_mode(&self) -> ConstructionMode {
        ConstructionMode::Place
    }

    /// Number of symmetric copies placed in the editor, 0 for none.
    fn symmetry_count(&self) -> u8 {
        0
    }

    fn symmetry_method(&self) -> SymmetryMethod {
        SymmetryMethod::Mirror
    }

    fn angle_snap(&self) -> bool {
        false
    }
}
