//! Top-level status widget: gauge, chart, then text.
//!
//! Rendering is a pure function of `(snapshot, config, layout)`. The surface is
//! not cleared first; the host decides when to blank the canvas.

use crate::chart::draw_chart;
use crate::config::RenderConfig;
use crate::gauge::draw_gauge;
use crate::layout::Layout;
use crate::snapshot::StatusSnapshot;
use crate::surface::DrawSurface;
use crate::text::draw_text;

/// Render the widget at the default geometry.
///
/// # Errors
///
/// Propagates the first error the surface returns. Commands already issued stay
/// drawn.
pub fn render_wpm_status<S: DrawSurface, const N: usize>(
    surface: &mut S,
    snapshot: &StatusSnapshot<N>,
    config: &RenderConfig,
) -> Result<(), S::Error> {
    render_wpm_status_with_layout(surface, snapshot, config, &Layout::DEFAULT)
}

/// Render the widget at a caller-supplied geometry.
///
/// # Errors
///
/// Propagates the first error the surface returns.
pub fn render_wpm_status_with_layout<S: DrawSurface, const N: usize>(
    surface: &mut S,
    snapshot: &StatusSnapshot<N>,
    config: &RenderConfig,
    layout: &Layout,
) -> Result<(), S::Error> {
    let latest = snapshot.latest();

    draw_gauge(surface, &layout.gauge, latest, config)?;
    draw_chart(surface, &layout.chart, snapshot, config)?;
    draw_text(surface, &layout.text, latest, config)
}
