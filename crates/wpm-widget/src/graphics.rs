//! embedded-graphics backend for [`DrawSurface`].
//!
//! Wraps any monochrome `DrawTarget` (a panel driver, a framebuffer, the
//! embedded-graphics `MockDisplay`) and turns widget commands into primitives.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::assets::ImageAsset;
use crate::surface::{
    ArcStyle, CornerRadius, DrawSurface, FontSize, ImageStyle, LabelStyle, LineStyle, RectStyle,
    TextAlign, TextArea,
};

/// Non-owning [`DrawSurface`] over an embedded-graphics draw target.
pub struct GraphicsSurface<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsSurface<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Borrow `target` for the duration of a render pass.
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

/// Concrete font for a size class.
pub fn font_for(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Small => &FONT_6X10,
        FontSize::Large => &FONT_10X20,
    }
}

impl<D> DrawSurface for GraphicsSurface<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    /// Angles are counter-clockwise from +x with y pointing down, the same
    /// convention the needle uses. The gauge's 225° to 315° dial arc therefore
    /// lands in the lower quarter of the circle, directly behind the needle's
    /// sweep. A backend that passed the angles through to a clockwise canvas
    /// unchanged would draw it mirrored into the upper quarter instead.
    fn draw_arc(
        &mut self,
        center: Point,
        radius: u32,
        start_deg: f32,
        end_deg: f32,
        style: &ArcStyle,
    ) -> Result<(), Self::Error> {
        let diameter = radius.saturating_mul(2).saturating_add(1);
        // embedded-graphics measures angles clockwise on screen; ours run
        // counter-clockwise, so both start and sweep flip sign.
        let start = -start_deg;
        let sweep = -(end_deg - start_deg);
        Arc::with_center(center, diameter, start.deg(), sweep.deg())
            .into_styled(PrimitiveStyle::with_stroke(style.color, style.width))
            .draw(&mut *self.target)
    }

    fn draw_line(&mut self, points: [Point; 2], style: &LineStyle) -> Result<(), Self::Error> {
        let [from, to] = points;
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(style.color, style.width))
            .draw(&mut *self.target)
    }

    fn draw_filled_rect(
        &mut self,
        bounds: Rectangle,
        style: &RectStyle,
    ) -> Result<(), Self::Error> {
        let fill = PrimitiveStyle::with_fill(style.color);
        let Size { width, height } = bounds.size;

        match style.radius {
            CornerRadius::Circle if width == height => Circle::new(bounds.top_left, width)
                .into_styled(fill)
                .draw(&mut *self.target),
            radius => match radius.resolve(width, height) {
                0 => bounds.into_styled(fill).draw(&mut *self.target),
                r => RoundedRectangle::with_equal_corners(bounds, Size::new(r, r))
                    .into_styled(fill)
                    .draw(&mut *self.target),
            },
        }
    }

    fn draw_image(
        &mut self,
        position: Point,
        image: &ImageAsset,
        style: &ImageStyle,
    ) -> Result<(), Self::Error> {
        let color = style.color;
        self.target.draw_iter(
            image
                .set_pixels()
                .map(|offset| Pixel(position + offset, color)),
        )
    }

    fn draw_text(
        &mut self,
        area: TextArea,
        style: &LabelStyle,
        text: &str,
    ) -> Result<(), Self::Error> {
        let width = i32::try_from(area.width).unwrap_or(i32::MAX);
        let (anchor_x, alignment) = match style.align {
            TextAlign::Left => (area.origin.x, Alignment::Left),
            TextAlign::Center => (area.origin.x.saturating_add(width / 2), Alignment::Center),
            TextAlign::Right => (area.origin.x.saturating_add(width), Alignment::Right),
        };

        let character_style = MonoTextStyle::new(font_for(style.font), style.color);
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(
            text,
            Point::new(anchor_x, area.origin.y),
            character_style,
            text_style,
        )
        .draw(&mut *self.target)
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn line_is_forwarded_to_target() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let style = LineStyle {
            color: BinaryColor::On,
            width: 1,
        };
        GraphicsSurface::new(&mut display)
            .draw_line([Point::new(0, 0), Point::new(4, 0)], &style)
            .unwrap();
        assert_eq!(
            display.affected_area(),
            Rectangle::new(Point::zero(), Size::new(5, 1))
        );
    }

    #[test]
    fn dial_arc_sits_below_its_centre() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let style = ArcStyle {
            color: BinaryColor::On,
            width: 1,
        };
        let center = Point::new(30, 30);
        GraphicsSurface::new(&mut display)
            .draw_arc(center, 20, 225.0, 315.0, &style)
            .unwrap();

        let area = display.affected_area();
        assert!(area.size.height > 0);
        assert!(area.top_left.y > center.y);
        assert_eq!(display.get_pixel(Point::new(30, 10)), None);
    }

    #[test]
    fn square_rect_fills_bounds() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let bounds = Rectangle::new(Point::new(2, 2), Size::new(3, 3));
        let style = RectStyle {
            color: BinaryColor::On,
            radius: CornerRadius::Square,
        };
        GraphicsSurface::new(&mut display)
            .draw_filled_rect(bounds, &style)
            .unwrap();
        assert_eq!(display.affected_area(), bounds);
    }

    #[test]
    fn circle_dot_stays_inside_bounds() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(5, 5));
        let style = RectStyle {
            color: BinaryColor::On,
            radius: CornerRadius::Circle,
        };
        GraphicsSurface::new(&mut display)
            .draw_filled_rect(bounds, &style)
            .unwrap();
        let area = display.affected_area();
        assert!(area.top_left.x >= 10 && area.top_left.y >= 10);
        assert!(area.size.width <= 5 && area.size.height <= 5);
        // Centre pixel is always filled.
        assert_eq!(display.get_pixel(Point::new(12, 12)), Some(BinaryColor::On));
    }

    #[test]
    fn image_only_draws_set_bits() {
        static DATA: [u8; 2] = [0b1000_0000, 0b0100_0000];
        let image = ImageAsset {
            width: 2,
            height: 2,
            data: &DATA,
        };
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        GraphicsSurface::new(&mut display)
            .draw_image(
                Point::new(3, 3),
                &image,
                &ImageStyle {
                    color: BinaryColor::On,
                },
            )
            .unwrap();
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(4, 4)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(4, 3)), None);
        assert_eq!(display.get_pixel(Point::new(3, 4)), None);
    }

    #[test]
    fn centred_text_straddles_anchor() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        let style = LabelStyle {
            color: BinaryColor::On,
            font: FontSize::Small,
            align: TextAlign::Center,
        };
        let area = TextArea {
            origin: Point::new(0, 0),
            width: 64,
        };
        GraphicsSurface::new(&mut display)
            .draw_text(area, &style, "WPM")
            .unwrap();
        let drawn = display.affected_area();
        assert!(drawn.top_left.x < 32);
        assert!(drawn.top_left.x + drawn.size.width as i32 > 32);
        assert!(drawn.top_left.y >= 0 && drawn.size.height <= 10);
    }

    #[test]
    fn font_classes_map_to_mono_fonts() {
        assert_eq!(font_for(FontSize::Small).character_size, Size::new(6, 10));
        assert_eq!(font_for(FontSize::Large).character_size, Size::new(10, 20));
    }
}
