#![no_std]

pub mod animation;
pub mod bindings;
pub mod color;
pub mod gauge;
pub mod keys;
pub mod math8;
pub mod renderer;
pub mod scene;
pub mod scheme;
pub mod state;

pub use animation::{Animation, AnimationManager, AnimationSlot, PowerLostAnimation};
pub use bindings::{EditorBindings, GroupBinding, KeyBindings};
pub use color::Rgba;
pub use keys::KeyCode;
pub use renderer::Renderer;
pub use scene::{EditorSceneManager, FlightSceneManager, SceneManager};
pub use scheme::ColorScheme;
pub use state::{
    ActionGroup, ActionGroupSet, CameraMode, ClearToSave, ConstructionMode, GameMode, GameState,
    ResourceKind, ResourceLevel, SymmetryMethod, VesselId, WarpMode,
};

pub use embassy_time::Instant;

/// Abstract keyboard lighting driver trait
///
/// Implement this trait to forward finished schemes to a vendor lighting
/// SDK. The renderer is generic over this trait and performs no error
/// handling on its behalf; a write is fire-and-forget.
pub trait OutputDriver {
    /// Write one complete scheme to the device
    fn write(&mut self, scheme: &ColorScheme);
}
