use reveal_ui::{
    EventTarget, ListenerGuard, ListenerKind, PointerEvent, PointerEventContent, PointerSource,
};

use super::{
    ACCESSIBILITY_STEP, ComparisonSliderArgs, ComparisonSliderController, LayoutProbe,
    layout::{POSITION_MAX, POSITION_MIN, clamp_percent, resolve_position},
};

/// Drag tracking state. The document listeners live exactly as long as the
/// `Dragging` variant does.
pub(super) enum DragPhase {
    Idle,
    Dragging {
        source: PointerSource,
        _listeners: ListenerGuard,
    },
}

impl DragPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging { .. })
    }
}

/// What the component did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The component handled the event; the host should not route it further.
    pub consumed: bool,
    /// The stored position changed and the host should re-render.
    pub position_changed: bool,
    /// The host must suppress the platform default action (scroll/pan under
    /// an active touch drag).
    pub prevent_default: bool,
}

impl EventResponse {
    /// The event was not for this component or could not be applied.
    pub fn ignored() -> Self {
        Self::default()
    }

    fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }
}

pub(super) fn handle_pointer_event(
    controller: &mut ComparisonSliderController,
    args: &ComparisonSliderArgs,
    event: &PointerEvent,
    probe: &dyn LayoutProbe,
) -> EventResponse {
    if args.disabled {
        end_drag(controller, "disabled");
        return EventResponse::ignored();
    }

    match event.content {
        PointerEventContent::Pressed => handle_press(controller, event),
        PointerEventContent::Moved => handle_move(controller, args, event, probe),
        PointerEventContent::Released => handle_release(controller, event),
        PointerEventContent::Clicked => handle_click(controller, args, event, probe),
    }
}

fn handle_press(controller: &mut ComparisonSliderController, event: &PointerEvent) -> EventResponse {
    if event.target != EventTarget::Region {
        return EventResponse::ignored();
    }
    if controller.phase.is_dragging() {
        return EventResponse::consumed();
    }

    let listeners = controller
        .document
        .listen(controller.owner, &ListenerKind::DRAG);
    controller.phase = DragPhase::Dragging {
        source: event.source,
        _listeners: listeners,
    };
    tracing::debug!(
        owner = controller.owner.raw(),
        source = ?event.source,
        "comparison slider drag started"
    );
    EventResponse::consumed()
}

fn handle_move(
    controller: &mut ComparisonSliderController,
    args: &ComparisonSliderArgs,
    event: &PointerEvent,
    probe: &dyn LayoutProbe,
) -> EventResponse {
    if !is_delivered_to(controller, event) {
        return EventResponse::ignored();
    }

    let prevent_default = event.source == PointerSource::Touch;
    let position_changed = match resolve_position(&args.hit_zone, event.position.x, probe) {
        Ok(position) => apply_position(controller, args, position),
        Err(err) => {
            tracing::debug!(%err, "ignoring move, layout is not measurable");
            false
        }
    };

    EventResponse {
        consumed: true,
        position_changed,
        prevent_default,
    }
}

fn handle_release(
    controller: &mut ComparisonSliderController,
    event: &PointerEvent,
) -> EventResponse {
    if !is_delivered_to(controller, event) {
        return EventResponse::ignored();
    }
    end_drag(controller, "released");
    EventResponse::consumed()
}

fn handle_click(
    controller: &mut ComparisonSliderController,
    args: &ComparisonSliderArgs,
    event: &PointerEvent,
    probe: &dyn LayoutProbe,
) -> EventResponse {
    if event.target != EventTarget::Region {
        return EventResponse::ignored();
    }
    // A click that lands while a drag is still active belongs to that drag.
    if controller.phase.is_dragging() {
        return EventResponse::consumed();
    }

    match resolve_position(&args.hit_zone, event.position.x, probe) {
        Ok(position) => {
            let position_changed = apply_position(controller, args, position);
            tracing::debug!(position = controller.position, "comparison slider tapped");
            EventResponse {
                consumed: true,
                position_changed,
                prevent_default: false,
            }
        }
        Err(err) => {
            tracing::debug!(%err, "ignoring click, layout is not measurable");
            EventResponse::consumed()
        }
    }
}

/// Document events only reach the controller while it holds a listener for
/// their class.
fn is_delivered_to(controller: &ComparisonSliderController, event: &PointerEvent) -> bool {
    event
        .listener_kind()
        .is_some_and(|kind| controller.document.is_listening(controller.owner, kind))
}

pub(super) fn end_drag(controller: &mut ComparisonSliderController, reason: &'static str) {
    if let DragPhase::Dragging { source, .. } =
        std::mem::replace(&mut controller.phase, DragPhase::Idle)
    {
        tracing::debug!(
            owner = controller.owner.raw(),
            ?source,
            reason,
            "comparison slider drag ended"
        );
    }
}

/// Stores a new position and notifies `on_change` if it moved.
pub(super) fn apply_position(
    controller: &mut ComparisonSliderController,
    args: &ComparisonSliderArgs,
    position: f32,
) -> bool {
    let Some(position) = clamp_percent(position) else {
        return false;
    };
    if (position - controller.position).abs() <= f32::EPSILON {
        return false;
    }
    controller.position = position;
    tracing::trace!(position, "comparison slider position updated");
    args.on_change.call(position);
    true
}

pub(super) fn step_position(
    controller: &mut ComparisonSliderController,
    args: &ComparisonSliderArgs,
    direction: f32,
) -> bool {
    if args.disabled {
        return false;
    }
    let next = (controller.position + direction * ACCESSIBILITY_STEP).clamp(POSITION_MIN, POSITION_MAX);
    apply_position(controller, args, next)
}
