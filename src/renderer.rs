//! Per-poll orchestration: animation gating, scene dispatch, driver fan-out.

use embassy_time::Instant;
use log::{debug, info};

use crate::OutputDriver;
use crate::animation::{AnimationManager, AnimationSlot, PowerLostAnimation};
use crate::bindings::KeyBindings;
use crate::scene::{EditorSceneManager, FlightSceneManager, SceneManager};
use crate::scheme::{ColorScheme, presets};
use crate::state::{GameMode, GameState};

/// Keyboard renderer - the main orchestrator.
///
/// Owns both scene managers, the animation slot and the idle scheme, and is
/// polled by the host once per simulation frame. Every poll is a full,
/// independent re-render: the finished scheme is written to every registered
/// driver with no diffing against the previous frame.
pub struct Renderer<'a, const MAX_DRIVERS: usize> {
    flight: FlightSceneManager,
    editor: EditorSceneManager,
    animations: AnimationManager,
    logo: ColorScheme,
    drivers: heapless::Vec<&'a mut dyn OutputDriver, MAX_DRIVERS>,
}

impl<'a, const MAX_DRIVERS: usize> Renderer<'a, MAX_DRIVERS> {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            flight: FlightSceneManager::new(bindings.clone()),
            editor: EditorSceneManager::new(bindings),
            animations: AnimationManager::new(),
            logo: presets::logo(),
            drivers: heapless::Vec::new(),
        }
    }

    /// Register an output driver.
    ///
    /// Returns the driver back if all `MAX_DRIVERS` slots are taken.
    pub fn add_driver(
        &mut self,
        driver: &'a mut dyn OutputDriver,
    ) -> Result<(), &'a mut dyn OutputDriver> {
        self.drivers.push(driver)?;
        debug!("output driver registered ({} active)", self.drivers.len());
        Ok(())
    }

    /// Access the animation slot, e.g. to start an animation from the host.
    pub fn animations_mut(&mut self) -> &mut AnimationManager {
        &mut self.animations
    }

    /// Process one poll.
    ///
    /// Call once per simulation frame. Returns the scheme that was sent to
    /// the drivers.
    pub fn poll<S: GameState>(&mut self, state: &S, now: Instant) -> &ColorScheme {
        self.check_triggers(state);

        let scheme: &ColorScheme = if self.animations.is_running(state) {
            self.animations.frame(state, now)
        } else {
            match state.mode() {
                GameMode::Flight => self.flight.scheme(state),
                GameMode::Editor => self.editor.scheme(state),
                GameMode::Other => &self.logo,
            }
        };

        for driver in &mut self.drivers {
            driver.write(scheme);
        }

        scheme
    }

    /// Start animations whose trigger condition holds this poll.
    fn check_triggers<S: GameState>(&mut self, state: &S) {
        if state.mode() == GameMode::Flight
            && !self.animations.is_running(state)
            && PowerLostAnimation::charge_depleted(state)
        {
            info!("electric charge depleted, starting power lost warning");
            self.animations
                .set_animation(AnimationSlot::PowerLost(PowerLostAnimation::new()));
        }
    }
}
