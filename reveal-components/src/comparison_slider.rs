//! A before/after image comparison slider.
//!
//! Two images of matching aspect ratio are stacked; the top ("after") layer
//! is clipped at a divider the user drags horizontally. The component owns a
//! single normalized position in `[0, 100]` and turns pointer input into that
//! position and back into render parameters.
//!
//! ## Usage
//!
//! The host supplies [`ComparisonSliderArgs`], forwards pointer events, and
//! answers layout queries through a [`LayoutProbe`]. After each event it asks
//! for a [`RenderDescription`] and draws the two layers, the divider and the
//! handle from it.
//!
//! ```
//! use reveal_components::comparison_slider::{
//!     ComparisonSlider, ComparisonSliderArgs, LayoutProbe,
//! };
//! use reveal_ui::{Document, PointerEvent, Px, PxPosition, PxRect};
//!
//! struct Page;
//!
//! impl LayoutProbe for Page {
//!     fn region_rect(&self) -> Option<PxRect> {
//!         Some(PxRect::new(Px(100), Px(0), Px(600), Px(400)))
//!     }
//!
//!     fn viewport_width(&self) -> Px {
//!         Px(1280)
//!     }
//! }
//!
//! let document = Document::new();
//! let mut slider = ComparisonSlider::mount(
//!     ComparisonSliderArgs::new("/img/site.jpg", "/img/finished.jpg"),
//!     document.clone(),
//! );
//!
//! let press = PxPosition::new(Px(400), Px(200));
//! slider.handle_event(&PointerEvent::mouse_down(press), &Page);
//! slider.handle_event(&PointerEvent::mouse_move(PxPosition::new(Px(550), Px(200))), &Page);
//! slider.handle_event(&PointerEvent::mouse_up(PxPosition::new(Px(550), Px(200))), &Page);
//!
//! let description = slider.render(&Page);
//! assert_eq!(description.position, 75.0);
//! assert_eq!(description.after_clip.right_percent, 25.0);
//! assert_eq!(document.listener_count(), 0);
//! ```
//!
//! ## Extended hit zone
//!
//! With [`HitZone::Extended`] the draggable area reaches past the image into
//! the surrounding wrapper, so the user can grab near an edge without
//! landing exactly on it. The clip still saturates at the image's own edges;
//! only the divider visuals follow the pointer into the margin.
use derive_setters::Setters;
use reveal_ui::{CallbackWith, Document, ListenerOwner, PointerEvent, Px, PxRect};
use thiserror::Error;

use interaction::{DragPhase, end_drag, handle_pointer_event, step_position};
use layout::{POSITION_MAX, POSITION_MIN};
use render::describe;

pub use interaction::EventResponse;
pub use layout::{
    ExtendedGeometry, ExtensionBreakpoints, HitZone, LayoutTier, TierMetrics, resolve_basic,
};
pub use render::{
    AccessibilityInfo, ClipInset, CursorHint, HandlePlacement, ImageLayer, RenderDescription,
};

mod interaction;
mod layout;
mod render;

const DEFAULT_POSITION: f32 = 50.0;
const ACCESSIBILITY_STEP: f32 = 5.0;

/// Errors raised while measuring the live layout.
///
/// These never leave event handling: the controller logs them and keeps its
/// last position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// The probe has no bounding box for the interactive region.
    #[error("interactive region is not mounted")]
    MissingRegion,
    /// The extended hit zone needs the wrapper's bounding box.
    #[error("wrapper element is not mounted")]
    MissingWrapper,
    /// The interactive region has no usable width.
    #[error("interactive region has non-positive width {width}px")]
    UnmeasurableRegion {
        /// Reported width.
        width: i32,
    },
    /// The wrapper has no usable width.
    #[error("wrapper has non-positive width {width}px")]
    UnmeasurableWrapper {
        /// Reported width.
        width: i32,
    },
    /// The extension shrinks the hit zone to nothing.
    #[error("extended hit zone has no width")]
    DegenerateHitZone,
}

/// Live layout queries answered by the host.
///
/// Every method is called fresh on each event; implementations should read
/// the current layout rather than cache it.
pub trait LayoutProbe {
    /// Bounding box of the interactive region, or `None` if it is not laid
    /// out.
    fn region_rect(&self) -> Option<PxRect>;

    /// Bounding box of the wrapper around the region. Only the extended hit
    /// zone needs it.
    fn wrapper_rect(&self) -> Option<PxRect> {
        None
    }

    /// Current viewport width.
    fn viewport_width(&self) -> Px;
}

/// Arguments for the comparison slider.
#[derive(PartialEq, Clone, Debug, Setters)]
pub struct ComparisonSliderArgs {
    /// Image shown underneath.
    #[setters(into)]
    pub before_image: String,
    /// Image revealed from the left as the position grows.
    #[setters(into)]
    pub after_image: String,
    /// Label beside the "before" side.
    #[setters(into)]
    pub before_label: String,
    /// Label beside the "after" side.
    #[setters(into)]
    pub after_label: String,
    /// Alt text for the "before" image. Defaults to `before_label`.
    #[setters(strip_option, into)]
    pub before_alt: Option<String>,
    /// Alt text for the "after" image. Defaults to `after_label`.
    #[setters(strip_option, into)]
    pub after_alt: Option<String>,
    /// Position at mount, in `[0, 100]`.
    pub initial_position: f32,
    /// Reach of the draggable area.
    pub hit_zone: HitZone,
    /// Disable interaction.
    pub disabled: bool,
    /// Optional accessibility label read by assistive technologies.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,
    /// Called with the new position whenever it changes.
    #[setters(skip)]
    pub on_change: CallbackWith<f32>,
}

impl ComparisonSliderArgs {
    /// Args for the given image pair with default labels and position.
    pub fn new(before_image: impl Into<String>, after_image: impl Into<String>) -> Self {
        Self {
            before_image: before_image.into(),
            after_image: after_image.into(),
            ..Self::default()
        }
    }

    /// Sets the on_change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the on_change handler using a shared callback.
    pub fn on_change_shared(mut self, on_change: impl Into<CallbackWith<f32>>) -> Self {
        self.on_change = on_change.into();
        self
    }

    fn clamped_initial_position(&self) -> f32 {
        let value = self.initial_position;
        if (POSITION_MIN..=POSITION_MAX).contains(&value) {
            return value;
        }
        let clamped = if value.is_nan() {
            DEFAULT_POSITION
        } else {
            value.clamp(POSITION_MIN, POSITION_MAX)
        };
        tracing::warn!(
            configured = value,
            used = clamped,
            "initial position outside [0, 100]"
        );
        clamped
    }
}

impl Default for ComparisonSliderArgs {
    fn default() -> Self {
        Self {
            before_image: String::new(),
            after_image: String::new(),
            before_label: "Before".to_string(),
            after_label: "After".to_string(),
            before_alt: None,
            after_alt: None,
            initial_position: DEFAULT_POSITION,
            hit_zone: HitZone::default(),
            disabled: false,
            accessibility_label: None,
            on_change: CallbackWith::default(),
        }
    }
}

/// Controller for the comparison slider.
///
/// Holds the stored position and the drag state. While a drag is active the
/// controller also holds the document listeners for it; dropping the
/// controller releases them.
pub struct ComparisonSliderController {
    position: f32,
    phase: DragPhase,
    owner: ListenerOwner,
    document: Document,
}

impl ComparisonSliderController {
    /// Creates an idle controller at the configured initial position.
    pub fn new(args: &ComparisonSliderArgs, document: Document) -> Self {
        Self {
            position: args.clamped_initial_position(),
            phase: DragPhase::Idle,
            owner: ListenerOwner::next(),
            document,
        }
    }

    /// The stored position, in `[0, 100]`.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Identity under which this controller registers document listeners.
    pub fn owner(&self) -> ListenerOwner {
        self.owner
    }

    /// The document this controller registers listeners with.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Runs one event through the interaction state machine.
    pub fn handle_event(
        &mut self,
        args: &ComparisonSliderArgs,
        event: &PointerEvent,
        probe: &dyn LayoutProbe,
    ) -> EventResponse {
        handle_pointer_event(self, args, event, probe)
    }

    /// Derives render parameters from the stored position and live layout.
    pub fn render(&self, args: &ComparisonSliderArgs, probe: &dyn LayoutProbe) -> RenderDescription {
        describe(args, self.position, self.is_dragging(), probe)
    }

    /// Moves the position one accessibility step to the right.
    pub fn increment(&mut self, args: &ComparisonSliderArgs) -> bool {
        step_position(self, args, 1.0)
    }

    /// Moves the position one accessibility step to the left.
    pub fn decrement(&mut self, args: &ComparisonSliderArgs) -> bool {
        step_position(self, args, -1.0)
    }

    /// Ends any active drag and releases its listeners.
    pub fn cancel_drag(&mut self) {
        end_drag(self, "cancelled");
    }
}

impl Drop for ComparisonSliderController {
    fn drop(&mut self) {
        end_drag(self, "unmounted");
    }
}

/// A mounted comparison slider: args, controller and document together.
pub struct ComparisonSlider {
    args: ComparisonSliderArgs,
    controller: ComparisonSliderController,
}

impl ComparisonSlider {
    /// Mounts a slider that registers drag listeners with `document`.
    pub fn mount(args: ComparisonSliderArgs, document: Document) -> Self {
        let controller = ComparisonSliderController::new(&args, document);
        tracing::debug!(
            owner = controller.owner().raw(),
            position = controller.position(),
            "comparison slider mounted"
        );
        Self { args, controller }
    }

    /// The args this slider was mounted with.
    pub fn args(&self) -> &ComparisonSliderArgs {
        &self.args
    }

    /// The underlying controller.
    pub fn controller(&self) -> &ComparisonSliderController {
        &self.controller
    }

    /// Runs one event through the interaction state machine.
    pub fn handle_event(&mut self, event: &PointerEvent, probe: &dyn LayoutProbe) -> EventResponse {
        self.controller.handle_event(&self.args, event, probe)
    }

    /// Derives render parameters from the stored position and live layout.
    pub fn render(&self, probe: &dyn LayoutProbe) -> RenderDescription {
        self.controller.render(&self.args, probe)
    }

    /// The stored position, in `[0, 100]`.
    pub fn position(&self) -> f32 {
        self.controller.position()
    }

    /// Returns whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Moves the position one accessibility step to the right.
    pub fn increment(&mut self) -> bool {
        self.controller.increment(&self.args)
    }

    /// Moves the position one accessibility step to the left.
    pub fn decrement(&mut self) -> bool {
        self.controller.decrement(&self.args)
    }

    /// Tears the slider down, releasing any listeners an active drag holds.
    pub fn unmount(self) {
        tracing::debug!(
            owner = self.controller.owner().raw(),
            "comparison slider unmounted"
        );
    }
}
