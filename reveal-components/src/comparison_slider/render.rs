use reveal_ui::Px;

use super::{
    ComparisonSliderArgs, LayoutProbe,
    layout::{LayoutTier, Projection, measure_projection},
};

/// One of the two stacked image layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageLayer {
    /// Image URL or host handle, passed through untouched.
    pub source: String,
    /// Alternative text for the image.
    pub alt: String,
    /// Side label shown next to the slider.
    pub label: String,
}

/// Clip of the "after" layer, as a percent inset from its right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipInset {
    /// Right inset in percent of the image width, in `[0, 100]`.
    pub right_percent: f32,
}

impl ClipInset {
    /// CSS `clip-path` value for DOM hosts.
    ///
    /// ```
    /// use reveal_components::comparison_slider::ClipInset;
    ///
    /// let clip = ClipInset { right_percent: 62.5 };
    /// assert_eq!(clip.to_css(), "inset(0 62.5% 0 0)");
    /// ```
    pub fn to_css(&self) -> String {
        format!("inset(0 {}% 0 0)", self.right_percent)
    }
}

/// Horizontal placement of a visual centred on the divider boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandlePlacement {
    /// Offset of the boundary from the region's left edge, in percent of the
    /// region width.
    pub left_percent: f32,
    /// Pixels to subtract from the percentage offset so that the visual's
    /// centre, not its left edge, sits on the boundary.
    pub correction: Px,
}

impl HandlePlacement {
    /// CSS `left` value for DOM hosts.
    ///
    /// ```
    /// use reveal_components::comparison_slider::HandlePlacement;
    /// use reveal_ui::Px;
    ///
    /// let handle = HandlePlacement { left_percent: 50.0, correction: Px(20) };
    /// assert_eq!(handle.to_css(), "calc(50% - 20px)");
    /// ```
    pub fn to_css(&self) -> String {
        format!("calc({}% - {}px)", self.left_percent, self.correction.raw())
    }
}

/// Pointer cursor the host should show over the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorHint {
    /// Horizontal resize cursor.
    ColResize,
    /// Open hand.
    Grab,
    /// Closed hand.
    Grabbing,
}

/// Values assistive technologies need to expose the slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibilityInfo {
    /// Optional label read by assistive technologies.
    pub label: Option<String>,
    /// Current value.
    pub value: f32,
    /// Lower end of the value range.
    pub min: f32,
    /// Upper end of the value range.
    pub max: f32,
    /// Whether interaction is disabled.
    pub disabled: bool,
}

/// Everything a rendering layer needs to draw the slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderDescription {
    /// The fully visible bottom layer.
    pub before: ImageLayer,
    /// The clipped top layer.
    pub after: ImageLayer,
    /// Clip applied to `after`.
    pub after_clip: ClipInset,
    /// Divider line placement.
    pub divider: HandlePlacement,
    /// Round drag handle placement.
    pub handle: HandlePlacement,
    /// Cursor over the interactive region.
    pub cursor: CursorHint,
    /// Responsive tier the metrics were taken from.
    pub tier: LayoutTier,
    /// The stored position this description was derived from.
    pub position: f32,
    /// Whether a drag is in progress.
    pub is_dragging: bool,
    /// `false` when the live layout could not be measured. The description
    /// then falls back to the basic mapping.
    pub measurable: bool,
    /// Accessibility values.
    pub accessibility: AccessibilityInfo,
}

pub(super) fn describe(
    args: &ComparisonSliderArgs,
    position: f32,
    is_dragging: bool,
    probe: &dyn LayoutProbe,
) -> RenderDescription {
    let tier = LayoutTier::from_viewport_width(probe.viewport_width());
    let metrics = tier.metrics();

    let (projection, measurable) = match measure_projection(&args.hit_zone, probe) {
        Ok(projection) => (projection, true),
        Err(err) => {
            tracing::trace!(%err, "rendering with basic projection");
            (Projection::Basic, false)
        }
    };
    let left_percent = projection.container_fraction(position);

    RenderDescription {
        before: ImageLayer {
            source: args.before_image.clone(),
            alt: args
                .before_alt
                .clone()
                .unwrap_or_else(|| args.before_label.clone()),
            label: args.before_label.clone(),
        },
        after: ImageLayer {
            source: args.after_image.clone(),
            alt: args
                .after_alt
                .clone()
                .unwrap_or_else(|| args.after_label.clone()),
            label: args.after_label.clone(),
        },
        after_clip: ClipInset {
            right_percent: projection.clip_inset(position),
        },
        divider: HandlePlacement {
            left_percent,
            correction: metrics.divider_width / 2,
        },
        handle: HandlePlacement {
            left_percent,
            correction: metrics.handle_diameter / 2,
        },
        cursor: cursor_hint(tier, is_dragging),
        tier,
        position,
        is_dragging,
        measurable,
        accessibility: AccessibilityInfo {
            label: args.accessibility_label.clone(),
            value: position,
            min: super::layout::POSITION_MIN,
            max: super::layout::POSITION_MAX,
            disabled: args.disabled,
        },
    }
}

fn cursor_hint(tier: LayoutTier, is_dragging: bool) -> CursorHint {
    match (tier.is_touch_first(), is_dragging) {
        (false, _) => CursorHint::ColResize,
        (true, false) => CursorHint::Grab,
        (true, true) => CursorHint::Grabbing,
    }
}
