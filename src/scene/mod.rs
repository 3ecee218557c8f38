//! Per-context scheme builders.
//!
//! One manager per game context. Each owns its scheme across polls and
//! repaints it from live state on every call; the variant set is closed
//! (flight and editor, with the idle scheme handled by the renderer).

mod editor;
mod flight;

pub use editor::EditorSceneManager;
pub use flight::FlightSceneManager;

use crate::scheme::ColorScheme;
use crate::state::GameState;

pub trait SceneManager {
    /// Build the scheme for the current poll.
    ///
    /// Mutates internal state as a side effect; call exactly once per poll.
    fn scheme<S: GameState>(&mut self, state: &S) -> &ColorScheme;
}
