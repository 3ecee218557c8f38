mod common;

use common::{CaptureDriver, FakeState};
use embassy_time::Instant;
use keylight_composer::color;
use keylight_composer::scheme::presets;
use keylight_composer::{KeyBindings, KeyCode, Renderer, ResourceKind};

#[test]
fn other_modes_render_the_idle_scheme() {
    let mut renderer = Renderer::<4>::new(KeyBindings::default());
    let scheme = renderer.poll(&FakeState::other(), Instant::from_secs(0));
    assert_eq!(scheme, &presets::logo());
}

#[test]
fn animation_preempts_the_scene_manager() {
    let mut renderer = Renderer::<4>::new(KeyBindings::default());
    let depleted = FakeState::flight().with_resource(ResourceKind::ElectricCharge, 0.0, 50.0);

    // Even second: the red warning frame, not the flight scheme.
    let scheme = renderer.poll(&depleted, Instant::from_secs(2));
    assert_eq!(scheme.color_of(KeyCode::A), Some(color::RED));
    assert_eq!(scheme.color_of(KeyCode::F2), Some(color::BLUE));

    let scheme = renderer.poll(&depleted, Instant::from_secs(3));
    assert_eq!(scheme.color_of(KeyCode::A), Some(color::BLUE));
    assert_eq!(scheme.color_of(KeyCode::F2), Some(color::WHITE));
}

#[test]
fn scene_rendering_resumes_once_the_charge_returns() {
    let mut renderer = Renderer::<4>::new(KeyBindings::default());
    let depleted = FakeState::flight().with_resource(ResourceKind::ElectricCharge, 0.0, 50.0);
    renderer.poll(&depleted, Instant::from_secs(0));

    let recharged = FakeState::flight().with_resource(ResourceKind::ElectricCharge, 50.0, 50.0);
    let scheme = renderer.poll(&recharged, Instant::from_secs(1));

    // Flight scene output again: attitude cluster white, charge gauge full.
    assert_eq!(scheme.color_of(KeyCode::W), Some(color::WHITE));
    assert_eq!(scheme.color_of(KeyCode::PrintScreen), Some(color::BLUE));
}

#[test]
fn every_driver_sees_every_poll() {
    let mut first = CaptureDriver::default();
    let mut second = CaptureDriver::default();

    let expected = {
        let mut renderer = Renderer::<4>::new(KeyBindings::default());
        assert!(renderer.add_driver(&mut first).is_ok());
        assert!(renderer.add_driver(&mut second).is_ok());

        renderer.poll(&FakeState::other(), Instant::from_secs(0));
        renderer
            .poll(&FakeState::editor(), Instant::from_secs(1))
            .clone()
    };

    assert_eq!(first.frames.len(), 2);
    assert_eq!(second.frames.len(), 2);
    assert_eq!(first.frames[0], presets::logo());
    assert_eq!(first.frames[1], expected);
    assert_eq!(second.frames, first.frames);
}

#[test]
fn driver_slots_are_bounded() {
    let mut first = CaptureDriver::default();
    let mut second = CaptureDriver::default();

    let mut renderer = Renderer::<1>::new(KeyBindings::default());
    assert!(renderer.add_driver(&mut first).is_ok());
    assert!(renderer.add_driver(&mut second).is_err());
}
