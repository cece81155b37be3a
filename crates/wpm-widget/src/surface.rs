//! Drawing capability the renderers depend on.
//!
//! [`DrawSurface`] is the narrow command set the widget needs: arc, line
//! segment, filled rectangle, image blit and text. Each command takes a small
//! descriptor carrying colour, stroke width, corner radius or alignment.
//!
//! Backends implement the trait once; the renderers never see a concrete
//! display type. [`GraphicsSurface`](crate::GraphicsSurface) adapts any
//! embedded-graphics `DrawTarget`, and [`RecordingSurface`](crate::mocks::RecordingSurface)
//! captures commands for tests.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::assets::ImageAsset;

/// Stroke descriptor for arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArcStyle {
    /// Stroke colour.
    pub color: BinaryColor,
    /// Stroke width in pixels.
    pub width: u32,
}

/// Stroke descriptor for line segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineStyle {
    /// Stroke colour.
    pub color: BinaryColor,
    /// Stroke width in pixels.
    pub width: u32,
}

/// Corner rounding of a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CornerRadius {
    /// Sharp corners.
    #[default]
    Square,
    /// Fixed radius in pixels.
    Pixels(u32),
    /// Radius of half the shorter side (a circle for square bounds).
    Circle,
}

impl CornerRadius {
    /// Effective radius for a rectangle of `width` × `height`.
    #[must_use]
    pub fn resolve(self, width: u32, height: u32) -> u32 {
        let limit = width.min(height) / 2;
        match self {
            Self::Square => 0,
            Self::Pixels(r) => r.min(limit),
            Self::Circle => limit,
        }
    }
}

/// Fill descriptor for rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RectStyle {
    /// Fill colour.
    pub color: BinaryColor,
    /// Corner rounding.
    pub radius: CornerRadius,
}

/// Blit descriptor for 1bpp images.
///
/// Set bits are drawn in `color`; clear bits leave the canvas untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageStyle {
    /// Colour of set bits.
    pub color: BinaryColor,
}

/// Horizontal text alignment within a [`TextArea`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    /// Flush with the left edge.
    Left,
    /// Centred across the area width.
    #[default]
    Center,
    /// Flush with the right edge.
    Right,
}

/// Font size class. Backends pick a concrete font per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// Caption font for labels.
    Small,
    /// Display font for the numeric value.
    Large,
}

/// Text descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelStyle {
    /// Text colour.
    pub color: BinaryColor,
    /// Font size class.
    pub font: FontSize,
    /// Alignment within the area.
    pub align: TextAlign,
}

/// Horizontal band text is laid out in; `origin.y` is the top of the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextArea {
    /// Top-left corner.
    pub origin: Point,
    /// Width the text is aligned within.
    pub width: u32,
}

/// Drawing commands issued by the widget renderers.
///
/// Angles are degrees counter-clockwise from the positive x axis, matching
/// [`crate::geometry`]. Implementations must clip rather than fail on
/// coordinates outside the canvas.
pub trait DrawSurface {
    /// Error raised by the backend. `Infallible` for in-memory framebuffers.
    type Error;

    /// Stroke an arc of `radius` around `center` from `start_deg` to `end_deg`.
    fn draw_arc(
        &mut self,
        center: Point,
        radius: u32,
        start_deg: f32,
        end_deg: f32,
        style: &ArcStyle,
    ) -> Result<(), Self::Error>;

    /// Stroke a straight segment between two points.
    fn draw_line(&mut self, points: [Point; 2], style: &LineStyle) -> Result<(), Self::Error>;

    /// Fill `bounds`, optionally with rounded corners.
    fn draw_filled_rect(&mut self, bounds: Rectangle, style: &RectStyle)
        -> Result<(), Self::Error>;

    /// Blit a 1bpp image with its top-left corner at `position`.
    fn draw_image(
        &mut self,
        position: Point,
        image: &ImageAsset,
        style: &ImageStyle,
    ) -> Result<(), Self::Error>;

    /// Draw `text` aligned within `area`.
    fn draw_text(&mut self, area: TextArea, style: &LabelStyle, text: &str)
        -> Result<(), Self::Error>;
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    type Error = S::Error;

    fn draw_arc(
        &mut self,
        center: Point,
        radius: u32,
        start_deg: f32,
        end_deg: f32,
        style: &ArcStyle,
    ) -> Result<(), Self::Error> {
        (**self).draw_arc(center, radius, start_deg, end_deg, style)
    }

    fn draw_line(&mut self, points: [Point; 2], style: &LineStyle) -> Result<(), Self::Error> {
        (**self).draw_line(points, style)
    }

    fn draw_filled_rect(
        &mut self,
        bounds: Rectangle,
        style: &RectStyle,
    ) -> Result<(), Self::Error> {
        (**self).draw_filled_rect(bounds, style)
    }

    fn draw_image(
        &mut self,
        position: Point,
        image: &ImageAsset,
        style: &ImageStyle,
    ) -> Result<(), Self::Error> {
        (**self).draw_image(position, image, style)
    }

    fn draw_text(
        &mut self,
        area: TextArea,
        style: &LabelStyle,
        text: &str,
    ) -> Result<(), Self::Error> {
        (**self).draw_text(area, style, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_radius_is_half_shorter_side() {
        assert_eq!(CornerRadius::Circle.resolve(5, 5), 2);
        assert_eq!(CornerRadius::Circle.resolve(10, 4), 2);
    }

    #[test]
    fn pixel_radius_is_capped() {
        assert_eq!(CornerRadius::Pixels(1).resolve(5, 5), 1);
        assert_eq!(CornerRadius::Pixels(9).resolve(5, 5), 2);
        assert_eq!(CornerRadius::Square.resolve(5, 5), 0);
    }
}
