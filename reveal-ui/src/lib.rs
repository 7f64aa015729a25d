//! reveal-ui carries the host-facing primitives that reveal components are
//! built on.
//!
//! A host (a DOM binding, a canvas renderer, an immediate-mode GUI) owns the
//! event loop and the layout engine. Components never query the screen on
//! their own; instead the host hands them:
//!
//! - pointer and touch input as [`PointerEvent`]s,
//! - element bounding boxes in physical pixels ([`PxRect`]) on demand,
//! - a [`Document`] handle through which components register the
//!   document-scoped listeners an interaction needs while it is active.
//!
//! # Listener scoping
//!
//! Registrations are returned as [`ListenerGuard`]s and released on drop.
//!
//! ```
//! use reveal_ui::{Document, ListenerKind, ListenerOwner};
//!
//! let document = Document::new();
//! {
//!     let _drag = document.listen(ListenerOwner::next(), &ListenerKind::DRAG);
//!     assert_eq!(document.listener_count(), 4);
//! }
//! assert_eq!(document.listener_count(), 0);
//! ```
//!
//! # Logging
//!
//! Everything logs through `tracing`. Hosts without a subscriber of their own
//! can call [`init_tracing`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod cursor;
pub mod document;
mod entry_point;
pub mod prop;
pub mod px;

pub use crate::{
    cursor::{EventTarget, PointerEvent, PointerEventContent, PointerSource},
    document::{Document, ListenerGuard, ListenerKind, ListenerOwner},
    entry_point::init_tracing,
    prop::CallbackWith,
    px::{Px, PxPosition, PxRect, PxSize},
};
