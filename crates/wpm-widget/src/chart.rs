//! History line chart.
//!
//! Draws the layout's grid image, then `N - 1` independent segments joining
//! adjacent samples. Scaling is either fixed (`[0, max]`) or dynamic (window min/max,
//! widened by one when flat).

use embedded_graphics::prelude::Point;

use crate::config::RenderConfig;
use crate::geometry::{chart_point, chart_x_step, ScaleRange};
use crate::layout::ChartLayout;
use crate::snapshot::StatusSnapshot;
use crate::surface::{DrawSurface, ImageStyle, LineStyle};

/// Trace stroke width.
pub const TRACE_WIDTH: u32 = 2;

/// Pixel position of every sample, oldest first.
#[must_use]
pub fn trace_points<const N: usize>(
    chart: &ChartLayout,
    snapshot: &StatusSnapshot<N>,
    config: &RenderConfig,
) -> [Point; N] {
    let range = ScaleRange::for_snapshot(snapshot, config);
    let step = chart_x_step(chart, N);

    let mut points = [chart.origin; N];
    for (index, (slot, &value)) in points.iter_mut().zip(snapshot.samples()).enumerate() {
        *slot = chart_point(chart, step, index, range.ratio(value));
    }
    points
}

/// Draw the layout's grid image, then one segment per adjacent sample pair.
pub fn draw_chart<S: DrawSurface, const N: usize>(
    surface: &mut S,
    chart: &ChartLayout,
    snapshot: &StatusSnapshot<N>,
    config: &RenderConfig,
) -> Result<(), S::Error> {
    let ink = config.palette().foreground;

    surface.draw_image(chart.origin, chart.grid, &ImageStyle { color: ink })?;

    let style = LineStyle {
        color: ink,
        width: TRACE_WIDTH,
    };
    let range = ScaleRange::for_snapshot(snapshot, config);
    let step = chart_x_step(chart, N);
    for (index, older, newer) in snapshot.iter_pairs() {
        let from = chart_point(chart, step, index, range.ratio(older));
        let to = chart_point(chart, step, index.saturating_add(1), range.ratio(newer));
        surface.draw_line([from, to], &style)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageAsset;
    use crate::geometry::{chart_bottom, chart_top};
    use embedded_graphics::prelude::Size;
    use crate::layout::Layout;
    use crate::mocks::{DrawCommand, RecordingSurface};
    use crate::snapshot::HISTORY_SIZE;

    const CHART: ChartLayout = Layout::DEFAULT.chart;

    #[test]
    fn grid_then_n_minus_one_segments() {
        let mut surface = RecordingSurface::new();
        let snap = StatusSnapshot::new([5, 9, 2, 7, 7, 1, 0, 3, 8, 4]);
        draw_chart(&mut surface, &CHART, &snap, &RenderConfig::default()).unwrap();

        assert!(matches!(
            surface.commands().first(),
            Some(DrawCommand::Image { position, .. }) if *position == CHART.origin
        ));
        assert_eq!(surface.lines().count(), HISTORY_SIZE - 1);
    }

    #[test]
    fn segments_are_connected() {
        let mut surface = RecordingSurface::new();
        let snap = StatusSnapshot::new([5, 9, 2, 7, 7, 1, 0, 3, 8, 4]);
        draw_chart(&mut surface, &CHART, &snap, &RenderConfig::default()).unwrap();

        let lines: heapless::Vec<[Point; 2], 16> = surface.lines().map(|(p, _)| p).collect();
        for pair in lines.windows(2) {
            if let [a, b] = pair {
                assert_eq!(a[1], b[0]);
            }
        }
    }

    #[test]
    fn segments_join_trace_points() {
        let mut surface = RecordingSurface::new();
        let snap = StatusSnapshot::new([5, 9, 2, 7, 7, 1, 0, 3, 8, 4]);
        let cfg = RenderConfig::new(true, 10).unwrap();
        draw_chart(&mut surface, &CHART, &snap, &cfg).unwrap();

        let pts = trace_points(&CHART, &snap, &cfg);
        let lines: heapless::Vec<[Point; 2], 16> = surface.lines().map(|(p, _)| p).collect();
        let expected: heapless::Vec<[Point; 2], 16> = pts
            .windows(2)
            .filter_map(|w| match *w {
                [from, to] => Some([from, to]),
                _ => None,
            })
            .collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn grid_comes_from_the_layout() {
        static SMALL_GRID: ImageAsset = ImageAsset {
            width: 8,
            height: 2,
            data: &[0xFF, 0x81],
        };
        let chart = ChartLayout {
            origin: Point::new(4, 6),
            size: Size::new(8, 2),
            grid: &SMALL_GRID,
        };
        let mut surface = RecordingSurface::new();
        draw_chart(&mut surface, &chart, &StatusSnapshot::<10>::flat(1), &RenderConfig::default())
            .unwrap();

        assert!(matches!(
            surface.commands().first(),
            Some(DrawCommand::Image { position, size, .. })
                if *position == Point::new(4, 6) && *size == Size::new(8, 2)
        ));
    }

    #[test]
    fn ramp_spans_bottom_to_top() {
        let snap = StatusSnapshot::new([10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        let pts = trace_points(&CHART, &snap, &RenderConfig::default());
        assert_eq!(pts.first().map(|p| p.y), Some(chart_bottom(&CHART)));
        assert_eq!(pts.last().map(|p| p.y), Some(chart_top(&CHART)));
    }

    #[test]
    fn flat_history_is_flat_at_bottom() {
        let pts = trace_points(&CHART, &StatusSnapshot::<10>::flat(37), &RenderConfig::default());
        assert!(pts.iter().all(|p| p.y == chart_bottom(&CHART)));
    }

    #[test]
    fn fixed_range_saturates_at_top() {
        let cfg = RenderConfig::new(true, 100).unwrap();
        let pts = trace_points(&CHART, &StatusSnapshot::<10>::flat(255), &cfg);
        assert!(pts.iter().all(|p| p.y == chart_top(&CHART)));
    }

    #[test]
    fn x_positions_step_evenly() {
        let pts = trace_points(&CHART, &StatusSnapshot::<10>::flat(0), &RenderConfig::default());
        let xs: heapless::Vec<i32, 10> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs.as_slice(), &[40, 47, 54, 61, 68, 75, 82, 89, 96, 103]);
    }

    #[test]
    fn trace_uses_palette_foreground() {
        let mut surface = RecordingSurface::new();
        let cfg = RenderConfig::default().with_inverted(true);
        draw_chart(&mut surface, &CHART, &StatusSnapshot::<10>::flat(3), &cfg).unwrap();
        assert!(surface
            .lines()
            .all(|(_, style)| style.color == cfg.palette().foreground && style.width == 2));
    }
}
