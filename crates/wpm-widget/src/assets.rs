//! Built-in 1bpp image assets.
//!
//! Images are packed MSB-first, one row after another, each row padded to a
//! whole byte. The chart grid and the bongo cat frames are generated at compile
//! time so the widget runs without an asset store.

use embedded_graphics::prelude::Point;

/// A read-only 1bpp bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageAsset {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Packed rows, `row_bytes() * height` bytes.
    pub data: &'static [u8],
}

impl ImageAsset {
    /// Bytes per packed row.
    #[must_use]
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// `true` if the pixel at `(x, y)` is set. Out-of-bounds reads are `false`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = (y as usize)
            .saturating_mul(self.row_bytes())
            .saturating_add(x as usize / 8);
        #[allow(clippy::arithmetic_side_effects)] // shift < 8
        let mask = 0x80u8 >> (x % 8);
        self.data.get(index).is_some_and(|byte| byte & mask != 0)
    }

    /// Offsets of every set pixel, row by row.
    #[allow(clippy::cast_possible_wrap)] // image dimensions are display-sized
    pub fn set_pixels(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.pixel(x, y))
                .map(move |x| Point::new(x as i32, y as i32))
        })
    }
}

// ── Bitmap construction ─────────────────────────────────────────────────────

#[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)] // compile-time only; index checked
const fn set<const LEN: usize>(mut buf: [u8; LEN], row_bytes: usize, x: usize, y: usize) -> [u8; LEN] {
    let index = y * row_bytes + x / 8;
    if index < LEN {
        buf[index] |= 0x80 >> (x % 8);
    }
    buf
}

#[allow(clippy::arithmetic_side_effects)] // compile-time only
const fn hline<const LEN: usize>(
    mut buf: [u8; LEN],
    row_bytes: usize,
    x0: usize,
    x1: usize,
    y: usize,
    step: usize,
) -> [u8; LEN] {
    let mut x = x0;
    while x <= x1 {
        buf = set(buf, row_bytes, x, y);
        x += step;
    }
    buf
}

#[allow(clippy::arithmetic_side_effects)] // compile-time only
const fn vline<const LEN: usize>(
    mut buf: [u8; LEN],
    row_bytes: usize,
    x: usize,
    y0: usize,
    y1: usize,
    step: usize,
) -> [u8; LEN] {
    let mut y = y0;
    while y <= y1 {
        buf = set(buf, row_bytes, x, y);
        y += step;
    }
    buf
}

#[allow(clippy::arithmetic_side_effects)] // compile-time only
const fn block<const LEN: usize>(
    mut buf: [u8; LEN],
    row_bytes: usize,
    x0: usize,
    y0: usize,
    w: usize,
    h: usize,
) -> [u8; LEN] {
    let mut y = y0;
    while y < y0 + h {
        buf = hline(buf, row_bytes, x0, x0 + w - 1, y, 1);
        y += 1;
    }
    buf
}

// ── Chart grid ──────────────────────────────────────────────────────────────

/// Grid image width; matches the chart plot area.
pub const GRID_WIDTH: u32 = 67;
/// Grid image height; matches the chart plot area.
pub const GRID_HEIGHT: u32 = 33;

const GRID_ROW_BYTES: usize = (GRID_WIDTH as usize).div_ceil(8);
const GRID_LEN: usize = GRID_ROW_BYTES * GRID_HEIGHT as usize;

/// Solid border with dotted guides every quarter.
#[allow(clippy::arithmetic_side_effects)] // compile-time only
const fn grid_bitmap() -> [u8; GRID_LEN] {
    let w = GRID_WIDTH as usize;
    let h = GRID_HEIGHT as usize;
    let rb = GRID_ROW_BYTES;
    let mut buf = [0u8; GRID_LEN];

    buf = hline(buf, rb, 0, w - 1, 0, 1);
    buf = hline(buf, rb, 0, w - 1, h - 1, 1);
    buf = vline(buf, rb, 0, 0, h - 1, 1);
    buf = vline(buf, rb, w - 1, 0, h - 1, 1);

    let mut q = 1;
    while q < 4 {
        buf = hline(buf, rb, 2, w - 3, q * (h - 1) / 4, 2);
        buf = vline(buf, rb, q * (w - 1) / 4, 2, h - 3, 2);
        q += 1;
    }
    buf
}

static GRID_DATA: [u8; GRID_LEN] = grid_bitmap();

/// Chart background grid.
pub static GRID: ImageAsset = ImageAsset {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
    data: &GRID_DATA,
};

// ── Bongo cat ───────────────────────────────────────────────────────────────

const BONGO_W: usize = crate::layout::BONGO_CAT_WIDTH as usize;
const BONGO_H: usize = crate::layout::BONGO_CAT_HEIGHT as usize;
const BONGO_ROW_BYTES: usize = BONGO_W.div_ceil(8);
const BONGO_LEN: usize = BONGO_ROW_BYTES * BONGO_H;

#[allow(clippy::arithmetic_side_effects)] // compile-time only
const fn bongo_bitmap(eyes_closed: bool, left_down: bool, right_down: bool) -> [u8; BONGO_LEN] {
    let rb = BONGO_ROW_BYTES;
    let mut buf = [0u8; BONGO_LEN];

    // Desk.
    buf = hline(buf, rb, 0, BONGO_W - 1, BONGO_H - 1, 1);

    // Head outline.
    buf = hline(buf, rb, 21, 43, 8, 1);
    buf = hline(buf, rb, 21, 43, 28, 1);
    buf = vline(buf, rb, 20, 9, 27, 1);
    buf = vline(buf, rb, 44, 9, 27, 1);

    // Ears.
    let mut k = 0;
    while k < 3 {
        buf = set(buf, rb, 22 + k, 7 - k);
        buf = set(buf, rb, 26 - k, 7 - k);
        buf = set(buf, rb, 38 + k, 7 - k);
        buf = set(buf, rb, 42 - k, 7 - k);
        k += 1;
    }

    // Eyes.
    if eyes_closed {
        buf = hline(buf, rb, 26, 29, 16, 1);
        buf = hline(buf, rb, 35, 38, 16, 1);
    } else {
        buf = block(buf, rb, 27, 15, 2, 2);
        buf = block(buf, rb, 36, 15, 2, 2);
    }

    // Mouth.
    buf = set(buf, rb, 31, 20);
    buf = set(buf, rb, 32, 21);
    buf = set(buf, rb, 33, 20);

    // Paws: raised beside the head, or resting on the desk.
    buf = if left_down {
        block(buf, rb, 12, 27, 5, 4)
    } else {
        block(buf, rb, 12, 17, 5, 4)
    };
    buf = if right_down {
        block(buf, rb, 47, 27, 5, 4)
    } else {
        block(buf, rb, 47, 17, 5, 4)
    };
    buf
}

static BONGO_REST_DATA: [u8; BONGO_LEN] = bongo_bitmap(false, false, false);
static BONGO_BLINK_DATA: [u8; BONGO_LEN] = bongo_bitmap(true, false, false);
static BONGO_LEFT_DATA: [u8; BONGO_LEN] = bongo_bitmap(false, true, false);
static BONGO_RIGHT_DATA: [u8; BONGO_LEN] = bongo_bitmap(false, false, true);

const fn bongo_asset(data: &'static [u8; BONGO_LEN]) -> ImageAsset {
    ImageAsset {
        width: crate::layout::BONGO_CAT_WIDTH,
        height: crate::layout::BONGO_CAT_HEIGHT,
        data,
    }
}

/// Bongo cat, paws up, eyes open.
pub static BONGO_REST: ImageAsset = bongo_asset(&BONGO_REST_DATA);
/// Bongo cat, paws up, eyes closed.
pub static BONGO_BLINK: ImageAsset = bongo_asset(&BONGO_BLINK_DATA);
/// Bongo cat, left paw on the desk.
pub static BONGO_LEFT_TAP: ImageAsset = bongo_asset(&BONGO_LEFT_DATA);
/// Bongo cat, right paw on the desk.
pub static BONGO_RIGHT_TAP: ImageAsset = bongo_asset(&BONGO_RIGHT_DATA);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_solid_border() {
        assert!(GRID.pixel(0, 0));
        assert!(GRID.pixel(GRID_WIDTH - 1, 0));
        assert!(GRID.pixel(0, GRID_HEIGHT - 1));
        assert!(GRID.pixel(GRID_WIDTH - 1, GRID_HEIGHT - 1));
        assert!(GRID.pixel(33, 0));
    }

    #[test]
    fn grid_interior_guides_are_dotted() {
        // Middle horizontal guide at row 16.
        assert!(GRID.pixel(2, 16));
        assert!(!GRID.pixel(3, 16));
        assert!(GRID.pixel(4, 16));
    }

    #[test]
    fn grid_data_length_matches_dimensions() {
        assert_eq!(GRID.row_bytes(), 9);
        assert_eq!(GRID.data.len(), GRID.row_bytes() * GRID_HEIGHT as usize);
    }

    #[test]
    fn out_of_bounds_pixel_is_clear() {
        assert!(!GRID.pixel(GRID_WIDTH, 0));
        assert!(!GRID.pixel(0, GRID_HEIGHT));
    }

    #[test]
    fn set_pixels_matches_pixel_lookup() {
        let count = GRID.set_pixels().count();
        let expected = (0..GRID_HEIGHT)
            .flat_map(|y| (0..GRID_WIDTH).map(move |x| (x, y)))
            .filter(|&(x, y)| GRID.pixel(x, y))
            .count();
        assert_eq!(count, expected);
        assert!(count > 0);
    }

    #[test]
    fn bongo_frames_differ_where_expected() {
        // Left paw position.
        assert!(BONGO_LEFT_TAP.pixel(12, 28));
        assert!(!BONGO_REST.pixel(12, 28));
        assert!(BONGO_REST.pixel(12, 18));
        // Right paw position.
        assert!(BONGO_RIGHT_TAP.pixel(48, 28));
        assert!(!BONGO_LEFT_TAP.pixel(48, 28));
        // Eyes.
        assert!(BONGO_REST.pixel(27, 15));
        assert!(!BONGO_BLINK.pixel(27, 15));
        assert!(BONGO_BLINK.pixel(27, 16));
    }
}
