use reveal_ui::{Px, PxRect};

use super::{LayoutProbe, SliderError};

/// Lower bound of the normalized position range.
pub const POSITION_MIN: f32 = 0.0;
/// Upper bound of the normalized position range.
pub const POSITION_MAX: f32 = 100.0;

/// Clamps a computed fraction into `[0, 100]`. Non-finite input yields `None`.
pub(super) fn clamp_percent(value: f32) -> Option<f32> {
    value
        .is_finite()
        .then(|| value.clamp(POSITION_MIN, POSITION_MAX))
}

/// Responsive layout tier, selected from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutTier {
    /// Viewports up to 480px wide.
    Mobile,
    /// Viewports up to 768px wide.
    Tablet,
    /// Anything wider.
    #[default]
    Desktop,
}

/// Visual metrics of the divider and handle at one layout tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierMetrics {
    /// Width of the divider line.
    pub divider_width: Px,
    /// Diameter of the round drag handle.
    pub handle_diameter: Px,
}

const MOBILE_MAX_WIDTH: Px = Px(480);
const TABLET_MAX_WIDTH: Px = Px(768);

impl LayoutTier {
    /// Picks the tier for a viewport width.
    pub fn from_viewport_width(width: Px) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            LayoutTier::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            LayoutTier::Tablet
        } else {
            LayoutTier::Desktop
        }
    }

    /// Divider and handle metrics for this tier.
    pub fn metrics(self) -> TierMetrics {
        match self {
            LayoutTier::Mobile => TierMetrics {
                divider_width: Px(2),
                handle_diameter: Px(30),
            },
            LayoutTier::Tablet => TierMetrics {
                divider_width: Px(3),
                handle_diameter: Px(35),
            },
            LayoutTier::Desktop => TierMetrics {
                divider_width: Px(4),
                handle_diameter: Px(40),
            },
        }
    }

    /// Touch-first tiers use grab cursors instead of a resize cursor.
    pub fn is_touch_first(self) -> bool {
        !matches!(self, LayoutTier::Desktop)
    }
}

/// Step function from viewport width to hit-zone extension.
///
/// `thresholds` are inclusive upper bounds in ascending order; a viewport
/// no wider than `thresholds[i]` gets `extensions[i]`, and anything wider
/// than the last threshold gets `extensions[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtensionBreakpoints {
    /// Inclusive viewport width upper bounds, ascending.
    pub thresholds: [Px; 3],
    /// Extension per tier, narrowest first.
    pub extensions: [Px; 4],
}

impl Default for ExtensionBreakpoints {
    fn default() -> Self {
        Self {
            thresholds: [Px(480), Px(768), Px(1024)],
            extensions: [Px(10), Px(15), Px(20), Px(30)],
        }
    }
}

impl ExtensionBreakpoints {
    /// Extension in pixels for the given viewport width.
    pub fn extension_for(&self, viewport_width: Px) -> Px {
        self.thresholds
            .iter()
            .position(|threshold| viewport_width <= *threshold)
            .map(|index| self.extensions[index])
            .unwrap_or(self.extensions[3])
    }
}

/// How far the draggable area reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitZone {
    /// The draggable area is exactly the interactive region.
    #[default]
    Basic,
    /// The draggable area extends past the region's left and right edges
    /// into the surrounding wrapper by a viewport-dependent margin.
    Extended(ExtensionBreakpoints),
}

/// Maps a pointer x-coordinate to a position fraction of `region`.
///
/// ```
/// use reveal_components::comparison_slider::resolve_basic;
/// use reveal_ui::{Px, PxRect};
///
/// let region = PxRect::new(Px(100), Px(0), Px(600), Px(400));
/// assert_eq!(resolve_basic(Px(400), region), Ok(50.0));
/// assert_eq!(resolve_basic(Px(-5000), region), Ok(0.0));
/// ```
pub fn resolve_basic(pointer_x: Px, region: PxRect) -> Result<f32, SliderError> {
    if !region.width.is_positive() {
        return Err(SliderError::UnmeasurableRegion {
            width: region.width.raw(),
        });
    }
    let offset = pointer_x.saturating_sub(region.left()).to_f32();
    clamp_percent(offset * 100.0 / region.width.to_f32()).ok_or(SliderError::UnmeasurableRegion {
        width: region.width.raw(),
    })
}

/// Bounds of the extended hit zone, measured relative to the wrapper.
///
/// The draggable span runs from `extension` pixels before the region's left
/// edge to `extension` pixels after its right edge. A stored position maps
/// onto that span. Two inverse mappings are derived from it:
///
/// - [`clip_inset`](Self::clip_inset) is relative to the image itself and
///   saturates once the position leaves the image's own span;
/// - [`container_fraction`](Self::container_fraction) places the divider
///   inside the region's box and may fall outside `[0, 100]` while the
///   pointer is in the margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedGeometry {
    wrapper_left: f32,
    wrapper_width: f32,
    image_start: f32,
    image_end: f32,
    extended_start: f32,
    extended_end: f32,
}

impl ExtendedGeometry {
    /// Measures the hit zone from the current bounding boxes.
    pub fn measure(region: PxRect, wrapper: PxRect, extension: Px) -> Result<Self, SliderError> {
        if !region.width.is_positive() {
            return Err(SliderError::UnmeasurableRegion {
                width: region.width.raw(),
            });
        }
        if !wrapper.width.is_positive() {
            return Err(SliderError::UnmeasurableWrapper {
                width: wrapper.width.raw(),
            });
        }

        let image_start = (region.left() - wrapper.left()).to_f32();
        let image_end = (region.right() - wrapper.left()).to_f32();
        let extension = extension.to_f32();
        let extended_start = image_start - extension;
        let extended_end = image_end + extension;
        if extended_end <= extended_start {
            return Err(SliderError::DegenerateHitZone);
        }

        Ok(Self {
            wrapper_left: wrapper.left().to_f32(),
            wrapper_width: wrapper.width.to_f32(),
            image_start,
            image_end,
            extended_start,
            extended_end,
        })
    }

    /// Left edge of the hit zone as a percentage of the wrapper width.
    pub fn left_bound_percent(&self) -> f32 {
        self.extended_start * 100.0 / self.wrapper_width
    }

    /// Right edge of the hit zone as a percentage of the wrapper width.
    pub fn right_bound_percent(&self) -> f32 {
        self.extended_end * 100.0 / self.wrapper_width
    }

    /// Maps a pointer x-coordinate onto the hit zone, re-normalized to
    /// `[0, 100]`.
    pub fn position_for(&self, pointer_x: Px) -> f32 {
        let raw = (pointer_x.to_f32() - self.wrapper_left) * 100.0 / self.wrapper_width;
        let left = self.left_bound_percent();
        let right = self.right_bound_percent();
        clamp_percent((raw - left) * 100.0 / (right - left)).unwrap_or(POSITION_MIN)
    }

    fn span(&self) -> f32 {
        self.extended_end - self.extended_start
    }

    /// Where the image's left edge falls in the `[0, 100]` drag range.
    pub fn image_start_in_drag_range(&self) -> f32 {
        (self.image_start - self.extended_start) * 100.0 / self.span()
    }

    /// Where the image's right edge falls in the `[0, 100]` drag range.
    pub fn image_end_in_drag_range(&self) -> f32 {
        (self.image_end - self.extended_start) * 100.0 / self.span()
    }

    /// Right inset of the "after" layer, relative to the image width.
    ///
    /// Exactly 100 at or before the image's start, exactly 0 at or after its
    /// end.
    pub fn clip_inset(&self, position: f32) -> f32 {
        let start = self.image_start_in_drag_range();
        let end = self.image_end_in_drag_range();
        if position <= start {
            POSITION_MAX
        } else if position >= end {
            POSITION_MIN
        } else {
            let image_relative = (position - start) * 100.0 / (end - start);
            clamp_percent(POSITION_MAX - image_relative).unwrap_or(POSITION_MAX)
        }
    }

    /// Divider placement as a percentage of the region's own width.
    pub fn container_fraction(&self, position: f32) -> f32 {
        let x = self.extended_start + position * self.span() / 100.0;
        (x - self.image_start) * 100.0 / (self.image_end - self.image_start)
    }
}

/// Inverse mapping from a stored position to render parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Projection {
    Basic,
    Extended(ExtendedGeometry),
}

impl Projection {
    pub fn clip_inset(&self, position: f32) -> f32 {
        match self {
            Projection::Basic => POSITION_MAX - position,
            Projection::Extended(geometry) => geometry.clip_inset(position),
        }
    }

    pub fn container_fraction(&self, position: f32) -> f32 {
        match self {
            Projection::Basic => position,
            Projection::Extended(geometry) => geometry.container_fraction(position),
        }
    }
}

fn measure_extended(
    breakpoints: &ExtensionBreakpoints,
    region: PxRect,
    probe: &dyn LayoutProbe,
) -> Result<ExtendedGeometry, SliderError> {
    let wrapper = probe.wrapper_rect().ok_or(SliderError::MissingWrapper)?;
    let extension = breakpoints.extension_for(probe.viewport_width());
    ExtendedGeometry::measure(region, wrapper, extension)
}

/// Resolves a pointer x-coordinate against the live layout.
pub(super) fn resolve_position(
    hit_zone: &HitZone,
    pointer_x: Px,
    probe: &dyn LayoutProbe,
) -> Result<f32, SliderError> {
    let region = probe.region_rect().ok_or(SliderError::MissingRegion)?;
    match hit_zone {
        HitZone::Basic => resolve_basic(pointer_x, region),
        HitZone::Extended(breakpoints) => {
            Ok(measure_extended(breakpoints, region, probe)?.position_for(pointer_x))
        }
    }
}

/// Measures the inverse mapping against the live layout.
pub(super) fn measure_projection(
    hit_zone: &HitZone,
    probe: &dyn LayoutProbe,
) -> Result<Projection, SliderError> {
    let region = probe.region_rect().ok_or(SliderError::MissingRegion)?;
    match hit_zone {
        HitZone::Basic => {
            if region.width.is_positive() {
                Ok(Projection::Basic)
            } else {
                Err(SliderError::UnmeasurableRegion {
                    width: region.width.raw(),
                })
            }
        }
        HitZone::Extended(breakpoints) => Ok(Projection::Extended(measure_extended(
            breakpoints,
            region,
            probe,
        )?)),
    }
}
