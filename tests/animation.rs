mod common;

use common::FakeState;
use embassy_time::Instant;
use keylight_composer::color;
use keylight_composer::{
    Animation, AnimationManager, AnimationSlot, ColorScheme, KeyCode, PowerLostAnimation,
    ResourceKind,
};

fn depleted_flight() -> FakeState {
    FakeState::flight().with_resource(ResourceKind::ElectricCharge, 0.0, 50.0)
}

#[test]
fn power_lost_alternates_once_per_second() {
    let mut animation = PowerLostAnimation::new();

    let red_frame = animation.frame(Instant::from_secs(2)).clone();
    assert_eq!(red_frame.color_of(KeyCode::A), Some(color::RED));
    assert_eq!(red_frame.color_of(KeyCode::F2), Some(color::BLUE));

    let blue_frame = animation.frame(Instant::from_secs(3)).clone();
    assert_eq!(blue_frame.color_of(KeyCode::A), Some(color::BLUE));
    assert_eq!(blue_frame.color_of(KeyCode::F2), Some(color::WHITE));

    assert_eq!(animation.frame(Instant::from_secs(4)), &red_frame);
}

#[test]
fn power_lost_runs_while_charge_is_depleted() {
    let animation = PowerLostAnimation::new();

    assert!(!animation.is_finished(&depleted_flight()));

    let recharged = FakeState::flight().with_resource(ResourceKind::ElectricCharge, 5.0, 50.0);
    assert!(animation.is_finished(&recharged));
}

#[test]
fn power_lost_ends_when_flight_does() {
    let animation = PowerLostAnimation::new();

    let mut state = depleted_flight();
    state.mode = keylight_composer::GameMode::Other;
    assert!(animation.is_finished(&state));
}

#[test]
fn power_lost_ignores_vessels_without_charge_storage() {
    let animation = PowerLostAnimation::new();

    // No electric charge store at all: nothing to wait for.
    assert!(animation.is_finished(&FakeState::flight()));
}

#[test]
fn manager_runs_until_the_trigger_clears() {
    let mut manager = AnimationManager::new();
    let depleted = depleted_flight();

    assert!(!manager.is_running(&depleted));
    manager.set_animation(AnimationSlot::PowerLost(PowerLostAnimation::new()));
    assert!(manager.is_running(&depleted));

    let mut expected = PowerLostAnimation::new();
    let now = Instant::from_secs(7);
    assert_eq!(manager.frame(&depleted, now), expected.frame(now));

    // The slot is not cleared; it just stops counting as running.
    let recharged = FakeState::flight().with_resource(ResourceKind::ElectricCharge, 50.0, 50.0);
    assert!(!manager.is_running(&recharged));
}

#[test]
fn manager_frame_is_all_off_when_idle() {
    let mut manager = AnimationManager::new();
    let state = FakeState::flight();

    assert_eq!(
        manager.frame(&state, Instant::from_secs(0)),
        &ColorScheme::default()
    );
}
