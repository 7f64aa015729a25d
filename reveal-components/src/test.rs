//! Gesture scenarios that drive mounted sliders through a fake host.

use std::{
    cell::Cell,
    sync::{Arc, Mutex},
};

use reveal_ui::{Document, ListenerKind, PointerEvent, Px, PxPosition, PxRect};

use crate::comparison_slider::{
    ComparisonSlider, ComparisonSliderArgs, ComparisonSliderController, ExtensionBreakpoints,
    HitZone, LayoutProbe,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("reveal_components=trace"))
        .with_test_writer()
        .try_init();
}

/// Host layout that can change between events.
struct FakeHost {
    region: Cell<Option<PxRect>>,
    wrapper: Cell<Option<PxRect>>,
    viewport: Cell<Px>,
}

impl FakeHost {
    fn new(region: PxRect) -> Self {
        Self {
            region: Cell::new(Some(region)),
            wrapper: Cell::new(None),
            viewport: Cell::new(Px(1440)),
        }
    }

    fn with_wrapper(self, wrapper: PxRect) -> Self {
        self.wrapper.set(Some(wrapper));
        self
    }
}

impl LayoutProbe for FakeHost {
    fn region_rect(&self) -> Option<PxRect> {
        self.region.get()
    }

    fn wrapper_rect(&self) -> Option<PxRect> {
        self.wrapper.get()
    }

    fn viewport_width(&self) -> Px {
        self.viewport.get()
    }
}

fn rect(x: i32, width: i32) -> PxRect {
    PxRect::new(Px(x), Px(0), Px(width), Px(400))
}

fn at(x: i32) -> PxPosition {
    PxPosition::new(Px(x), Px(200))
}

#[test]
fn drag_across_a_600px_region() {
    init_logging();
    let host = FakeHost::new(rect(200, 600));
    let mut slider = ComparisonSlider::mount(ComparisonSliderArgs::default(), Document::new());

    slider.handle_event(&PointerEvent::mouse_down(at(500)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(200)), &host);
    assert_eq!(slider.position(), 0.0);
    slider.handle_event(&PointerEvent::mouse_move(at(800)), &host);
    assert_eq!(slider.position(), 100.0);
    slider.handle_event(&PointerEvent::mouse_move(at(500)), &host);
    assert_eq!(slider.position(), 50.0);

    let description = slider.render(&host);
    assert_eq!(description.after_clip.right_percent, 50.0);
    assert_eq!(description.handle.left_percent, 50.0);
}

#[test]
fn left_to_right_drag_never_decreases_position() {
    let host = FakeHost::new(rect(13, 587));
    let mut slider = ComparisonSlider::mount(ComparisonSliderArgs::default(), Document::new());

    slider.handle_event(&PointerEvent::touch_start(at(13)), &host);
    let mut last = 0.0;
    for x in (-50..700).step_by(3) {
        slider.handle_event(&PointerEvent::touch_move(at(x)), &host);
        let position = slider.position();
        assert!(position >= last, "position decreased at x = {x}");
        assert!((0.0..=100.0).contains(&position));
        last = position;
    }
    assert_eq!(slider.position(), 100.0);
}

#[test]
fn release_outside_the_region_ends_the_drag() {
    let document = Document::new();
    let host = FakeHost::new(rect(0, 600));
    let mut slider = ComparisonSlider::mount(ComparisonSliderArgs::default(), document.clone());

    slider.handle_event(&PointerEvent::mouse_down(at(300)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(2000)), &host);
    slider.handle_event(&PointerEvent::mouse_up(at(2000)), &host);

    assert!(!slider.is_dragging());
    assert_eq!(slider.position(), 100.0);
    assert_eq!(document.listener_count(), 0);

    // Stray moves after the release no longer reach the slider.
    let response = slider.handle_event(&PointerEvent::mouse_move(at(0)), &host);
    assert!(!response.consumed);
    assert_eq!(slider.position(), 100.0);
}

#[test]
fn extended_hit_zone_margin_scenario() {
    let host = FakeHost::new(rect(50, 600)).with_wrapper(rect(0, 700));
    let args = ComparisonSliderArgs::new("before.jpg", "after.jpg")
        .hit_zone(HitZone::Extended(ExtensionBreakpoints::default()));
    let mut slider = ComparisonSlider::mount(args, Document::new());

    slider.handle_event(&PointerEvent::mouse_down(at(300)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(10)), &host);
    assert_eq!(slider.position(), 0.0);

    let description = slider.render(&host);
    assert_eq!(description.after_clip.right_percent, 100.0);
    assert!(description.handle.left_percent < 0.0);

    slider.handle_event(&PointerEvent::mouse_move(at(690)), &host);
    assert_eq!(slider.position(), 100.0);
    assert_eq!(slider.render(&host).after_clip.right_percent, 0.0);
}

#[test]
fn extension_follows_the_viewport() {
    let host = FakeHost::new(rect(50, 600)).with_wrapper(rect(0, 700));
    let args = ComparisonSliderArgs::default()
        .hit_zone(HitZone::Extended(ExtensionBreakpoints::default()));
    let mut slider = ComparisonSlider::mount(args, Document::new());

    // Wrapper-relative x = 35 is inside the 30px desktop extension but
    // outside the 10px mobile one.
    slider.handle_event(&PointerEvent::mouse_down(at(300)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(35)), &host);
    let desktop = slider.position();
    assert!(desktop > 0.0);

    host.viewport.set(Px(400));
    slider.handle_event(&PointerEvent::mouse_move(at(35)), &host);
    assert_eq!(slider.position(), 0.0);
}

#[test]
fn geometry_is_read_fresh_on_every_event() {
    let host = FakeHost::new(rect(0, 400));
    let mut slider = ComparisonSlider::mount(ComparisonSliderArgs::default(), Document::new());

    slider.handle_event(&PointerEvent::mouse_down(at(100)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(100)), &host);
    assert_eq!(slider.position(), 25.0);

    host.region.set(Some(rect(0, 200)));
    slider.handle_event(&PointerEvent::mouse_move(at(100)), &host);
    assert_eq!(slider.position(), 50.0);
}

#[test]
fn tap_then_drag_then_click() {
    let host = FakeHost::new(rect(0, 100));
    let mut slider = ComparisonSlider::mount(ComparisonSliderArgs::default(), Document::new());

    let response = slider.handle_event(&PointerEvent::click(at(37)), &host);
    assert!(response.position_changed);
    assert_eq!(slider.position(), 37.0);

    slider.handle_event(&PointerEvent::mouse_down(at(37)), &host);
    assert!(slider.is_dragging());
    let response = slider.handle_event(&PointerEvent::click(at(80)), &host);
    assert!(!response.position_changed);
    assert_eq!(slider.position(), 37.0);
}

#[test]
fn unmount_while_dragging_releases_listeners() {
    let document = Document::new();
    let host = FakeHost::new(rect(0, 600));
    let mut slider = ComparisonSlider::mount(ComparisonSliderArgs::default(), document.clone());

    slider.handle_event(&PointerEvent::touch_start(at(10)), &host);
    assert_eq!(document.listener_count(), ListenerKind::DRAG.len());

    slider.unmount();
    assert_eq!(document.listener_count(), 0);

    let args = ComparisonSliderArgs::default();
    let mut controller = ComparisonSliderController::new(&args, document.clone());
    controller.handle_event(&args, &PointerEvent::mouse_down(at(10)), &host);
    assert_eq!(document.listener_count(), ListenerKind::DRAG.len());
    drop(controller);
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn only_the_dragging_slider_receives_document_moves() {
    let document = Document::new();
    let host = FakeHost::new(rect(0, 100));
    let mut first = ComparisonSlider::mount(ComparisonSliderArgs::default(), document.clone());
    let mut second = ComparisonSlider::mount(ComparisonSliderArgs::default(), document.clone());

    second.handle_event(&PointerEvent::mouse_down(at(50)), &host);
    assert_eq!(
        document.listeners(ListenerKind::MouseMove).as_slice(),
        &[second.controller().owner()]
    );

    // A host that blindly broadcasts still only moves the registered slider.
    let event = PointerEvent::mouse_move(at(90));
    first.handle_event(&event, &host);
    second.handle_event(&event, &host);
    assert_eq!(first.position(), 50.0);
    assert_eq!(second.position(), 90.0);
}

#[test]
fn configured_initial_position_always_wins() {
    let document = Document::new();
    let zero = ComparisonSlider::mount(
        ComparisonSliderArgs::default().initial_position(0.0),
        document.clone(),
    );
    assert_eq!(zero.position(), 0.0);

    let too_far = ComparisonSlider::mount(
        ComparisonSliderArgs::default().initial_position(117.0),
        document.clone(),
    );
    assert_eq!(too_far.position(), 100.0);

    let nan = ComparisonSlider::mount(
        ComparisonSliderArgs::default().initial_position(f32::NAN),
        document,
    );
    assert_eq!(nan.position(), 50.0);
}

#[test]
fn on_change_reports_each_accepted_position() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let args = ComparisonSliderArgs::default().on_change(move |position| {
        sink.lock().expect("sink lock").push(position);
    });
    let host = FakeHost::new(rect(0, 100));
    let mut slider = ComparisonSlider::mount(args, Document::new());

    slider.handle_event(&PointerEvent::mouse_down(at(50)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(60)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(60)), &host);
    slider.handle_event(&PointerEvent::mouse_move(at(70)), &host);
    slider.handle_event(&PointerEvent::mouse_up(at(70)), &host);
    assert!(slider.increment());

    assert_eq!(*seen.lock().expect("sink lock"), vec![60.0, 70.0, 75.0]);
}
