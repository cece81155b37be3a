//! Mock implementations for testing
//!
//! [`RecordingSurface`] captures every drawing command instead of rasterising
//! it, so tests can assert on geometry and ordering directly.

#![cfg(any(test, feature = "std"))]

use core::convert::Infallible;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::assets::ImageAsset;
use crate::surface::{
    ArcStyle, DrawSurface, ImageStyle, LabelStyle, LineStyle, RectStyle, TextArea,
};

/// Maximum commands a [`RecordingSurface`] keeps; later ones are counted as dropped.
pub const MAX_COMMANDS: usize = 64;

/// Longest text a recorded label keeps.
pub const MAX_TEXT: usize = 16;

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`DrawSurface::draw_arc`]
    Arc {
        /// Arc centre.
        center: Point,
        /// Arc radius.
        radius: u32,
        /// Start angle in degrees.
        start_deg: f32,
        /// End angle in degrees.
        end_deg: f32,
        /// Stroke descriptor.
        style: ArcStyle,
    },
    /// [`DrawSurface::draw_line`]
    Line {
        /// Segment endpoints.
        points: [Point; 2],
        /// Stroke descriptor.
        style: LineStyle,
    },
    /// [`DrawSurface::draw_filled_rect`]
    FilledRect {
        /// Rectangle bounds.
        bounds: Rectangle,
        /// Fill descriptor.
        style: RectStyle,
    },
    /// [`DrawSurface::draw_image`]
    Image {
        /// Top-left corner.
        position: Point,
        /// Image dimensions.
        size: Size,
        /// Blit descriptor.
        style: ImageStyle,
    },
    /// [`DrawSurface::draw_text`]
    Text {
        /// Layout band.
        area: TextArea,
        /// Text descriptor.
        style: LabelStyle,
        /// The text, truncated to [`MAX_TEXT`] bytes.
        text: heapless::String<MAX_TEXT>,
    },
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: heapless::Vec<DrawCommand, MAX_COMMANDS>,
    dropped: usize,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded command, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands that did not fit in the buffer.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.dropped = 0;
    }

    /// Recorded line segments with their stroke.
    pub fn lines(&self) -> impl Iterator<Item = ([Point; 2], LineStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { points, style } => Some((*points, *style)),
            _ => None,
        })
    }

    /// Recorded text, in issue order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, command: DrawCommand) {
        if self.commands.push(command).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn draw_arc(
        &mut self,
        center: Point,
        radius: u32,
        start_deg: f32,
        end_deg: f32,
        style: &ArcStyle,
    ) -> Result<(), Self::Error> {
        self.record(DrawCommand::Arc {
            center,
            radius,
            start_deg,
            end_deg,
            style: *style,
        });
        Ok(())
    }

    fn draw_line(&mut self, points: [Point; 2], style: &LineStyle) -> Result<(), Self::Error> {
        self.record(DrawCommand::Line {
            points,
            style: *style,
        });
        Ok(())
    }

    fn draw_filled_rect(
        &mut self,
        bounds: Rectangle,
        style: &RectStyle,
    ) -> Result<(), Self::Error> {
        self.record(DrawCommand::FilledRect {
            bounds,
            style: *style,
        });
        Ok(())
    }

    fn draw_image(
        &mut self,
        position: Point,
        image: &ImageAsset,
        style: &ImageStyle,
    ) -> Result<(), Self::Error> {
        self.record(DrawCommand::Image {
            position,
            size: Size::new(image.width, image.height),
            style: *style,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        area: TextArea,
        style: &LabelStyle,
        text: &str,
    ) -> Result<(), Self::Error> {
        let mut kept = heapless::String::new();
        for ch in text.chars() {
            if kept.push(ch).is_err() {
                break;
            }
        }
        self.record(DrawCommand::Text {
            area,
            style: *style,
            text: kept,
        });
        Ok(())
    }
}
