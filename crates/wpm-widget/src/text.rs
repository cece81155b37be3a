//! Numeric readout: a small `WPM` caption above the latest sample.

use core::fmt::Write;

use embedded_graphics::prelude::Point;

use crate::config::RenderConfig;
use crate::layout::TextLayout;
use crate::surface::{DrawSurface, FontSize, LabelStyle, TextAlign, TextArea};

/// Caption drawn above the value.
pub const LABEL: &str = "WPM";

/// Room for any `u8` in decimal.
pub const VALUE_CAPACITY: usize = 4;

/// Decimal form of `wpm` without padding.
#[must_use]
pub fn format_wpm(wpm: u8) -> heapless::String<VALUE_CAPACITY> {
    let mut value = heapless::String::new();
    // At most three digits; the buffer cannot overflow.
    let _ = write!(value, "{wpm}");
    value
}

/// Draw the caption and the value for `wpm`, both centred.
pub fn draw_text<S: DrawSurface>(
    surface: &mut S,
    text: &TextLayout,
    wpm: u8,
    config: &RenderConfig,
) -> Result<(), S::Error> {
    let ink = config.palette().foreground;

    surface.draw_text(
        TextArea {
            origin: Point::new(0, text.label_y),
            width: text.width,
        },
        &LabelStyle {
            color: ink,
            font: FontSize::Small,
            align: TextAlign::Center,
        },
        LABEL,
    )?;

    surface.draw_text(
        TextArea {
            origin: Point::new(0, text.value_y),
            width: text.width,
        },
        &LabelStyle {
            color: ink,
            font: FontSize::Large,
            align: TextAlign::Center,
        },
        &format_wpm(wpm),
    )
}
