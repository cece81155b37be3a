//! Bongo cat: a typing animation driven by the same WPM snapshot.
//!
//! The cat's speed follows the latest sample through four tempos. Each tempo
//! has its own frame cycle and interval; the animation state is an explicit
//! value owned by the caller, advanced against a millisecond clock.

use crate::assets::{ImageAsset, BONGO_BLINK, BONGO_LEFT_TAP, BONGO_REST, BONGO_RIGHT_TAP};
use crate::config::Palette;
use crate::layout::Layout;
use crate::snapshot::StatusSnapshot;
use crate::surface::{DrawSurface, ImageStyle};

/// Below this the cat idles.
pub const IDLE_WPM: u8 = 5;
/// Below this the cat taps slowly.
pub const SLOW_WPM: u8 = 30;
/// Below this the cat taps at mid speed; at or above, fast.
pub const MID_WPM: u8 = 60;

/// Animation speed class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tempo {
    /// Under 5 WPM: resting and blinking.
    Idle,
    /// 5 to 29 WPM.
    Slow,
    /// 30 to 59 WPM.
    Mid,
    /// 60 WPM and above.
    Fast,
}

impl Tempo {
    /// Classify a WPM sample.
    #[must_use]
    pub const fn from_wpm(wpm: u8) -> Self {
        if wpm < IDLE_WPM {
            Self::Idle
        } else if wpm < SLOW_WPM {
            Self::Slow
        } else if wpm < MID_WPM {
            Self::Mid
        } else {
            Self::Fast
        }
    }

    /// Time each frame stays on screen.
    #[must_use]
    pub const fn interval_ms(self) -> u64 {
        match self {
            Self::Idle => 800,
            Self::Slow => 400,
            Self::Mid => 200,
            Self::Fast => 100,
        }
    }

    /// Frame a cycle starts on.
    #[must_use]
    pub const fn first_frame(self) -> Frame {
        match self {
            Self::Idle => Frame::Rest,
            Self::Slow | Self::Mid | Self::Fast => Frame::LeftTap,
        }
    }
}

/// One pose of the cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Paws up, eyes open.
    Rest,
    /// Paws up, eyes closed.
    Blink,
    /// Left paw down.
    LeftTap,
    /// Right paw down.
    RightTap,
}

impl Frame {
    /// Successor of `self` in `tempo`'s cycle. Frames foreign to the cycle
    /// restart it.
    #[must_use]
    pub const fn next(self, tempo: Tempo) -> Self {
        match (tempo, self) {
            (Tempo::Idle, Self::Rest) => Self::Blink,
            (Tempo::Idle, _) => Self::Rest,
            (_, Self::LeftTap) => Self::RightTap,
            (_, _) => Self::LeftTap,
        }
    }
}

/// Animation state carried between renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BongoAnimation {
    tempo: Tempo,
    frame: Frame,
    last_update_ms: u64,
}

impl BongoAnimation {
    /// Idle cat, first frame shown at `now_ms`.
    #[must_use]
    pub const fn new(now_ms: u64) -> Self {
        Self {
            tempo: Tempo::Idle,
            frame: Tempo::Idle.first_frame(),
            last_update_ms: now_ms,
        }
    }

    /// Current tempo.
    #[must_use]
    pub const fn tempo(&self) -> Tempo {
        self.tempo
    }

    /// Frame currently on screen.
    #[must_use]
    pub const fn frame(&self) -> Frame {
        self.frame
    }

    /// Clock value of the last frame change.
    #[must_use]
    pub const fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    /// Step the animation to `now_ms` at speed `wpm` and return the frame to
    /// show.
    ///
    /// A tempo change restarts the cycle immediately. Otherwise the frame
    /// advances once its interval has elapsed; a clock that runs backwards
    /// never advances it.
    pub fn advance(&mut self, wpm: u8, now_ms: u64) -> Frame {
        let tempo = Tempo::from_wpm(wpm);

        if tempo != self.tempo {
            #[cfg(feature = "defmt")]
            defmt::debug!("bongo tempo {} -> {}", self.tempo, tempo);

            self.tempo = tempo;
            self.frame = tempo.first_frame();
            self.last_update_ms = now_ms;
            return self.frame;
        }

        if now_ms.saturating_sub(self.last_update_ms) >= tempo.interval_ms() {
            self.frame = self.frame.next(tempo);
            self.last_update_ms = now_ms;
        }
        self.frame
    }
}

impl Default for BongoAnimation {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Image for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BongoFrames {
    /// Paws up, eyes open.
    pub rest: &'static ImageAsset,
    /// Paws up, eyes closed.
    pub blink: &'static ImageAsset,
    /// Left paw down.
    pub left_tap: &'static ImageAsset,
    /// Right paw down.
    pub right_tap: &'static ImageAsset,
}

impl BongoFrames {
    /// Frames generated into the binary.
    pub const BUILT_IN: Self = Self {
        rest: &BONGO_REST,
        blink: &BONGO_BLINK,
        left_tap: &BONGO_LEFT_TAP,
        right_tap: &BONGO_RIGHT_TAP,
    };

    /// Image for `frame`.
    #[must_use]
    pub const fn image(&self, frame: Frame) -> &'static ImageAsset {
        match frame {
            Frame::Rest => self.rest,
            Frame::Blink => self.blink,
            Frame::LeftTap => self.left_tap,
            Frame::RightTap => self.right_tap,
        }
    }
}

impl Default for BongoFrames {
    fn default() -> Self {
        Self::BUILT_IN
    }
}

/// Advance `animation` to `now_ms` and draw the resulting frame.
///
/// The cat is drawn in the normal palette's foreground at
/// [`Layout::DEFAULT`]'s bongo origin. Use [`render_bongo_cat_with_palette`]
/// on an inverted canvas.
///
/// # Errors
///
/// Propagates the surface error. The animation has already advanced.
pub fn render_bongo_cat<S: DrawSurface, const N: usize>(
    surface: &mut S,
    snapshot: &StatusSnapshot<N>,
    animation: &mut BongoAnimation,
    now_ms: u64,
    frames: &BongoFrames,
) -> Result<(), S::Error> {
    render_bongo_cat_with_palette(surface, snapshot, animation, now_ms, frames, Palette::NORMAL)
}

/// [`render_bongo_cat`] with the cat drawn in `palette`'s foreground.
///
/// # Errors
///
/// Propagates the surface error. The animation has already advanced.
pub fn render_bongo_cat_with_palette<S: DrawSurface, const N: usize>(
    surface: &mut S,
    snapshot: &StatusSnapshot<N>,
    animation: &mut BongoAnimation,
    now_ms: u64,
    frames: &BongoFrames,
    palette: Palette,
) -> Result<(), S::Error> {
    let frame = animation.advance(snapshot.latest(), now_ms);
    surface.draw_image(
        Layout::DEFAULT.bongo_origin,
        frames.image(frame),
        &ImageStyle {
            color: palette.foreground,
        },
    )
}
