//! Analog gauge for the latest sample.
//!
//! A 90° dial from 225° (zero) to 315° (full scale), five ticks, a needle and a
//! centre dot. The needle clamps at full scale rather than wrapping.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::RenderConfig;
use crate::geometry::{needle_angle, polar_point, tick_angle, GAUGE_END_DEG, GAUGE_START_DEG, TICK_COUNT};
use crate::layout::GaugeLayout;
use crate::surface::{ArcStyle, CornerRadius, DrawSurface, LineStyle, RectStyle};

/// Arc stroke width.
pub const ARC_WIDTH: u32 = 2;
/// Tick stroke width.
pub const TICK_WIDTH: u32 = 1;
/// Needle stroke width.
pub const NEEDLE_WIDTH: u32 = 2;
/// Ticks start this far inside the arc.
pub const TICK_INSET: u32 = 3;
/// Ticks end this far outside the arc.
pub const TICK_OUTSET: u32 = 2;
/// Side of the square the centre dot is inscribed in.
pub const DOT_SIZE: u32 = 5;

/// Endpoints of tick `index`, inner point first.
#[must_use]
#[allow(clippy::cast_precision_loss)] // display-sized radii
pub fn tick_points(gauge: &GaugeLayout, index: usize) -> [Point; 2] {
    let angle = tick_angle(index);
    let inner = gauge.radius.saturating_sub(TICK_INSET) as f32;
    let outer = gauge.radius.saturating_add(TICK_OUTSET) as f32;
    [
        polar_point(gauge.center, angle, inner),
        polar_point(gauge.center, angle, outer),
    ]
}

/// Needle segment from the dial centre to its tip.
#[must_use]
#[allow(clippy::cast_precision_loss)] // display-sized length
pub fn needle_points(gauge: &GaugeLayout, wpm: u8, config: &RenderConfig) -> [Point; 2] {
    let angle = needle_angle(wpm, config.full_scale());
    let tip = polar_point(gauge.center, angle, gauge.needle_length as f32);
    [gauge.center, tip]
}

/// Bounds of the centre dot.
#[must_use]
pub fn dot_bounds(gauge: &GaugeLayout) -> Rectangle {
    let half = i32::try_from(DOT_SIZE / 2).unwrap_or(0);
    Rectangle::new(
        gauge.center - Point::new(half, half),
        Size::new(DOT_SIZE, DOT_SIZE),
    )
}

/// Draw the gauge for `wpm`.
pub fn draw_gauge<S: DrawSurface>(
    surface: &mut S,
    gauge: &GaugeLayout,
    wpm: u8,
    config: &RenderConfig,
) -> Result<(), S::Error> {
    let ink = config.palette().foreground;

    surface.draw_arc(
        gauge.center,
        gauge.radius,
        GAUGE_START_DEG,
        GAUGE_END_DEG,
        &ArcStyle {
            color: ink,
            width: ARC_WIDTH,
        },
    )?;

    let tick_style = LineStyle {
        color: ink,
        width: TICK_WIDTH,
    };
    for index in 0..TICK_COUNT {
        surface.draw_line(tick_points(gauge, index), &tick_style)?;
    }

    surface.draw_line(
        needle_points(gauge, wpm, config),
        &LineStyle {
            color: ink,
            width: NEEDLE_WIDTH,
        },
    )?;

    surface.draw_filled_rect(
        dot_bounds(gauge),
        &RectStyle {
            color: ink,
            radius: CornerRadius::Circle,
        },
    )
}
