//! Pointer and touch events delivered by the host.
//!
//! The host translates its windowing or DOM events into [`PointerEvent`]s and
//! forwards them to components. Mouse and touch input share one event shape;
//! [`PointerSource`] records where an event came from so that components can
//! apply input-class specific behaviour (for example suppressing scroll while
//! a touch drag is active).
//!
//! # Routing
//!
//! Events that hit-test inside a component carry [`EventTarget::Region`].
//! Events the host delivers through document-scoped listeners (see
//! [`crate::document`]) carry [`EventTarget::Document`]; those may be located
//! anywhere on screen, including far outside the component.
//!
//! ```
//! use reveal_ui::cursor::{EventTarget, PointerEvent, PointerEventContent, PointerSource};
//! use reveal_ui::document::ListenerKind;
//! use reveal_ui::px::{Px, PxPosition};
//!
//! let event = PointerEvent::new(
//!     PointerSource::Touch,
//!     PointerEventContent::Moved,
//!     PxPosition::new(Px::new(120), Px::new(80)),
//!     EventTarget::Document,
//! );
//! assert_eq!(event.listener_kind(), Some(ListenerKind::TouchMove));
//! ```

#[cfg(not(target_family = "wasm"))]
use std::time::Instant;

#[cfg(target_family = "wasm")]
use web_time::Instant;

use crate::{PxPosition, document::ListenerKind};

/// The input class an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerSource {
    /// A mouse, pen or trackpad pointer.
    Mouse,
    /// The primary touch point of a touch screen.
    Touch,
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEventContent {
    /// A button was pressed or a touch started.
    Pressed,
    /// The pointer or touch point moved.
    Moved,
    /// A button was released or a touch ended.
    Released,
    /// A completed press/release pair that the host reports as a click or
    /// tap on the target.
    Clicked,
}

/// Where the host routed an event from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventTarget {
    /// The event hit-tested inside the component's interactive region.
    Region,
    /// The event was delivered through a document-scoped listener.
    Document,
}

/// A single pointer or touch event with timing information.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    /// Timestamp indicating when this event occurred.
    pub timestamp: Instant,
    /// The input class that produced the event.
    pub source: PointerSource,
    /// The specific kind of event.
    pub content: PointerEventContent,
    /// Pointer location in viewport coordinates. For touch input this is the
    /// first active touch point.
    pub position: PxPosition,
    /// How the host routed this event.
    pub target: EventTarget,
}

impl PointerEvent {
    /// Creates an event stamped with the current time.
    pub fn new(
        source: PointerSource,
        content: PointerEventContent,
        position: PxPosition,
        target: EventTarget,
    ) -> Self {
        Self {
            timestamp: Instant::now(),
            source,
            content,
            position,
            target,
        }
    }

    /// Mouse press inside the component.
    pub fn mouse_down(position: PxPosition) -> Self {
        Self::new(
            PointerSource::Mouse,
            PointerEventContent::Pressed,
            position,
            EventTarget::Region,
        )
    }

    /// Mouse move delivered through the document.
    pub fn mouse_move(position: PxPosition) -> Self {
        Self::new(
            PointerSource::Mouse,
            PointerEventContent::Moved,
            position,
            EventTarget::Document,
        )
    }

    /// Mouse release delivered through the document.
    pub fn mouse_up(position: PxPosition) -> Self {
        Self::new(
            PointerSource::Mouse,
            PointerEventContent::Released,
            position,
            EventTarget::Document,
        )
    }

    /// Click on the component.
    pub fn click(position: PxPosition) -> Self {
        Self::new(
            PointerSource::Mouse,
            PointerEventContent::Clicked,
            position,
            EventTarget::Region,
        )
    }

    /// Touch start inside the component.
    pub fn touch_start(position: PxPosition) -> Self {
        Self::new(
            PointerSource::Touch,
            PointerEventContent::Pressed,
            position,
            EventTarget::Region,
        )
    }

    /// Touch move delivered through the document.
    pub fn touch_move(position: PxPosition) -> Self {
        Self::new(
            PointerSource::Touch,
            PointerEventContent::Moved,
            position,
            EventTarget::Document,
        )
    }

    /// Touch end delivered through the document.
    pub fn touch_end(position: PxPosition) -> Self {
        Self::new(
            PointerSource::Touch,
            PointerEventContent::Released,
            position,
            EventTarget::Document,
        )
    }

    /// Returns the document listener class that receives this event, if any.
    ///
    /// Presses and clicks are only delivered to the element they hit, so they
    /// have no document listener class.
    pub fn listener_kind(&self) -> Option<ListenerKind> {
        match (self.source, self.content) {
            (PointerSource::Mouse, PointerEventContent::Moved) => Some(ListenerKind::MouseMove),
            (PointerSource::Mouse, PointerEventContent::Released) => Some(ListenerKind::MouseUp),
            (PointerSource::Touch, PointerEventContent::Moved) => Some(ListenerKind::TouchMove),
            (PointerSource::Touch, PointerEventContent::Released) => Some(ListenerKind::TouchEnd),
            _ => None,
        }
    }
}
