//! Keyboard animations and the single active-animation slot.
//!
//! Animations override ordinary scene rendering wholesale: while one is
//! running, its frames are the poll output and no scene manager is queried.
//! The variant set is closed and known at compile time.

mod power_lost;

use embassy_time::Instant;

pub use power_lost::PowerLostAnimation;

use crate::scheme::ColorScheme;
use crate::state::GameState;

pub trait Animation {
    /// Current animation frame for this poll.
    fn frame(&mut self, now: Instant) -> &ColorScheme;

    /// True once the condition that started the animation has cleared.
    fn is_finished<S: GameState>(&self, state: &S) -> bool;
}

/// Animation slot - enum containing all possible animations.
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Vessel is out of electric charge and cannot be controlled.
    PowerLost(PowerLostAnimation),
}

impl AnimationSlot {
    /// Render the current frame of the held animation.
    pub fn frame(&mut self, now: Instant) -> &ColorScheme {
        match self {
            Self::PowerLost(animation) => animation.frame(now),
        }
    }

    /// Check the held animation's completion against live state.
    pub fn is_finished<S: GameState>(&self, state: &S) -> bool {
        match self {
            Self::PowerLost(animation) => animation.is_finished(state),
        }
    }
}

/// Holds at most one active animation.
///
/// The slot is never cleared eagerly: a finished animation simply stops being
/// asked for frames, and the next [`AnimationManager::set_animation`] call
/// replaces it.
#[derive(Debug, Clone, Default)]
pub struct AnimationManager {
    active: Option<AnimationSlot>,
    idle: ColorScheme,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever animation is currently held. Last setter wins.
    pub fn set_animation(&mut self, animation: AnimationSlot) {
        self.active = Some(animation);
    }

    /// True iff an animation is held and not yet finished.
    pub fn is_running<S: GameState>(&self, state: &S) -> bool {
        self.active
            .as_ref()
            .is_some_and(|animation| !animation.is_finished(state))
    }

    /// Current frame of the running animation, or all keys off.
    pub fn frame<S: GameState>(&mut self, state: &S, now: Instant) -> &ColorScheme {
        match &mut self.active {
            Some(animation) if !animation.is_finished(state) => animation.frame(now),
            _ => &self.idle,
        }
    }
}
