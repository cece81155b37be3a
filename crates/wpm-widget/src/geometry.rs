//! Pure geometry: polar mapping for the gauge, range scaling for the chart.
//!
//! Nothing here touches a surface, so every function is unit-testable on its
//! own. Angles are in degrees, counter-clockwise from the positive x axis.
//! Pixel rows grow downward, so the vertical component is negated.
//!
//! Float-to-pixel conversions truncate toward zero (`as i32`).

use core::num::NonZeroU8;

use embedded_graphics::prelude::Point;

use crate::config::{RangeMode, RenderConfig};
use crate::layout::{ChartLayout, CHART_MARGIN};
use crate::snapshot::StatusSnapshot;

/// Angle of the dial's zero mark.
pub const GAUGE_START_DEG: f32 = 225.0;

/// Angular span of the dial.
pub const GAUGE_SWEEP_DEG: f32 = 90.0;

/// Angle of the dial's full-scale mark.
pub const GAUGE_END_DEG: f32 = GAUGE_START_DEG + GAUGE_SWEEP_DEG;

/// Number of tick marks across the dial, both ends included.
pub const TICK_COUNT: usize = 5;

/// Angular distance between adjacent ticks.
pub const TICK_STEP_DEG: f32 = 22.5;

/// Degrees to radians.
#[must_use]
pub fn to_radians(deg: f32) -> f32 {
    deg * (core::f32::consts::PI / 180.0)
}

/// Pixel offset of a point `radius` away from the origin at `angle_deg`.
///
/// Returns `(r·cos θ, −r·sin θ)`, each component truncated toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // display-sized radii; truncation is the rounding rule
pub fn polar_offset(angle_deg: f32, radius: f32) -> Point {
    let theta = to_radians(angle_deg);
    let dx = (radius * libm::cosf(theta)) as i32;
    let dy = (radius * libm::sinf(theta)) as i32;
    Point::new(dx, dy.saturating_neg())
}

/// Absolute pixel position `radius` away from `center` at `angle_deg`.
#[must_use]
pub fn polar_point(center: Point, angle_deg: f32, radius: f32) -> Point {
    let offset = polar_offset(angle_deg, radius);
    Point::new(
        center.x.saturating_add(offset.x),
        center.y.saturating_add(offset.y),
    )
}

/// Fraction of full scale for the gauge: `min(wpm, max) / max`, in `[0, 1]`.
#[must_use]
pub fn gauge_ratio(wpm: u8, full_scale: NonZeroU8) -> f32 {
    let max = full_scale.get();
    f32::from(wpm.min(max)) / f32::from(max)
}

/// Needle angle for `wpm`, always within `[GAUGE_START_DEG, GAUGE_END_DEG]`.
#[must_use]
pub fn needle_angle(wpm: u8, full_scale: NonZeroU8) -> f32 {
    GAUGE_START_DEG + gauge_ratio(wpm, full_scale) * GAUGE_SWEEP_DEG
}

/// Angle of tick `index` (0 at the zero mark).
#[must_use]
#[allow(clippy::cast_precision_loss)] // index < TICK_COUNT
pub fn tick_angle(index: usize) -> f32 {
    GAUGE_START_DEG + index as f32 * TICK_STEP_DEG
}

/// Value range the chart maps onto its plot height.
///
/// Bounds are `u16` so a flat history at 255 can still widen to `[255, 256]`.
/// Invariant: `hi > lo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleRange {
    lo: u16,
    hi: u16,
}

impl ScaleRange {
    /// `[0, max]`.
    #[must_use]
    pub fn fixed(full_scale: NonZeroU8) -> Self {
        Self {
            lo: 0,
            hi: u16::from(full_scale.get()),
        }
    }

    /// `[min, max]`, widened to `[min, min + 1]` when the window is flat.
    #[must_use]
    pub fn dynamic(min: u8, max: u8) -> Self {
        let lo = u16::from(min.min(max));
        let hi = u16::from(max.max(min));
        if hi == lo {
            Self {
                lo,
                hi: lo.saturating_add(1),
            }
        } else {
            Self { lo, hi }
        }
    }

    /// Range for `snapshot` under `config`'s scaling policy.
    #[must_use]
    pub fn for_snapshot<const N: usize>(snapshot: &StatusSnapshot<N>, config: &RenderConfig) -> Self {
        match config.range() {
            RangeMode::Fixed => Self::fixed(config.full_scale()),
            RangeMode::Dynamic => {
                let (min, max) = snapshot.min_max();
                Self::dynamic(min, max)
            }
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn lo(&self) -> u16 {
        self.lo
    }

    /// Upper bound.
    #[must_use]
    pub const fn hi(&self) -> u16 {
        self.hi
    }

    /// Position of `value` within the range, clamped to `[0, 1]`.
    ///
    /// Fixed mode can see samples above `max`; those saturate at 1.0.
    #[must_use]
    pub fn ratio(&self, value: u8) -> f32 {
        let span = f32::from(self.hi.saturating_sub(self.lo).max(1));
        let ratio = (f32::from(value) - f32::from(self.lo)) / span;
        ratio.clamp(0.0, 1.0)
    }
}

/// Horizontal distance between adjacent chart points for an `n`-sample window.
#[must_use]
#[allow(clippy::cast_precision_loss)] // chart widths and window sizes are tiny
pub fn chart_x_step(chart: &ChartLayout, n: usize) -> f32 {
    let inner = chart.size.width.saturating_sub(CHART_MARGIN.unsigned_abs().saturating_mul(2));
    inner as f32 / n.saturating_sub(1).max(1) as f32
}

/// Pixel position of sample `index` at `ratio` inside the plot area.
///
/// Higher ratios sit higher on screen. Both axes are inset by [`CHART_MARGIN`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)] // display-sized values; truncation is the rounding rule
pub fn chart_point(chart: &ChartLayout, x_step: f32, index: usize, ratio: f32) -> Point {
    let inner_height = chart.size.height.saturating_sub(CHART_MARGIN.unsigned_abs().saturating_mul(2)) as f32;
    let x_offset = (index as f32 * x_step) as i32;
    let y_offset = (ratio.clamp(0.0, 1.0) * inner_height) as i32;

    let bottom = chart
        .origin
        .y
        .saturating_add(chart.size.height as i32)
        .saturating_sub(CHART_MARGIN);

    Point::new(
        chart
            .origin
            .x
            .saturating_add(CHART_MARGIN)
            .saturating_add(x_offset),
        bottom.saturating_sub(y_offset),
    )
}

/// Bottom row of the plot area (ratio 0).
#[must_use]
#[allow(clippy::cast_possible_wrap)] // display-sized height
pub fn chart_bottom(chart: &ChartLayout) -> i32 {
    chart
        .origin
        .y
        .saturating_add(chart.size.height as i32)
        .saturating_sub(CHART_MARGIN)
}

/// Top row of the plot area (ratio 1).
#[must_use]
pub fn chart_top(chart: &ChartLayout) -> i32 {
    let inner = chart.size.height.saturating_sub(CHART_MARGIN.unsigned_abs().saturating_mul(2));
    chart_bottom(chart).saturating_sub(i32::try_from(inner).unwrap_or(i32::MAX))
}
