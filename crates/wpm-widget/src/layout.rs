//! Fixed pixel geometry of the status widget.
//!
//! These values place things on screen; none of them drives branching logic.
//! [`Layout::DEFAULT`] matches the 144-pixel-wide status canvas.

use embedded_graphics::prelude::{Point, Size};

use crate::assets::{ImageAsset, GRID};

/// Canvas width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Canvas height in pixels.
pub const SCREEN_HEIGHT: u32 = 140;

/// Bongo cat frame width in pixels.
pub const BONGO_CAT_WIDTH: u32 = 64;

/// Bongo cat frame height in pixels.
pub const BONGO_CAT_HEIGHT: u32 = 32;

/// Inset of the chart trace from every edge of the plot area.
pub const CHART_MARGIN: i32 = 2;

/// Gauge dial geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GaugeLayout {
    /// Dial centre.
    pub center: Point,
    /// Arc radius.
    pub radius: u32,
    /// Needle length from the centre.
    pub needle_length: u32,
}

/// Chart plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChartLayout {
    /// Top-left corner; the grid image is drawn here.
    pub origin: Point,
    /// Plot area size, including the margin.
    pub size: Size,
    /// Background grid drawn at `origin`; sized to match `size`.
    pub grid: &'static ImageAsset,
}

/// Readout rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextLayout {
    /// Top row of the `WPM` label.
    pub label_y: i32,
    /// Top row of the numeric value.
    pub value_y: i32,
    /// Width the text is centred across.
    pub width: u32,
}

/// Complete widget geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// Canvas size.
    pub screen: Size,
    /// Gauge dial.
    pub gauge: GaugeLayout,
    /// History chart.
    pub chart: ChartLayout,
    /// Label and value rows.
    pub text: TextLayout,
    /// Top-left corner of the bongo cat frame.
    pub bongo_origin: Point,
}

impl Layout {
    /// Reference geometry for the 144×140 canvas.
    pub const DEFAULT: Self = Self {
        screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        gauge: GaugeLayout {
            center: Point::new(72, 65),
            radius: 28,
            needle_length: 24,
        },
        chart: ChartLayout {
            origin: Point::new(38, 100),
            size: Size::new(67, 33),
            grid: &GRID,
        },
        text: TextLayout {
            label_y: 38,
            value_y: 48,
            width: SCREEN_WIDTH,
        },
        // (144 - 64) / 2 = 40, above the layer name row.
        bongo_origin: Point::new(40, 35),
    };
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bongo_frame_is_horizontally_centred() {
        let layout = Layout::DEFAULT;
        let right = layout.bongo_origin.x + BONGO_CAT_WIDTH as i32;
        assert_eq!(layout.bongo_origin.x, SCREEN_WIDTH as i32 - right);
    }

    #[test]
    fn chart_fits_on_screen() {
        let chart = Layout::DEFAULT.chart;
        assert!(chart.origin.x + chart.size.width as i32 <= SCREEN_WIDTH as i32);
        assert!(chart.origin.y + chart.size.height as i32 <= SCREEN_HEIGHT as i32);
    }

    #[test]
    fn default_grid_covers_plot_area() {
        let chart = Layout::DEFAULT.chart;
        assert_eq!(chart.grid.width, chart.size.width);
        assert_eq!(chart.grid.height, chart.size.height);
    }

    #[test]
    fn needle_is_shorter_than_dial() {
        let gauge = Layout::DEFAULT.gauge;
        assert!(gauge.needle_length < gauge.radius);
    }
}
