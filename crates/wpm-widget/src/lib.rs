//! Typing-speed status widget for small fixed-resolution displays.
//!
//! Turns a trailing history of words-per-minute samples into drawing commands:
//! an analog gauge for the latest sample, a line chart of the whole history and
//! a numeric readout. A sibling bongo-cat animation consumes the same snapshot.
//!
//! # Architecture
//!
//! ```text
//! render_wpm_status / render_bongo_cat      (status, bongo)
//!         ↓
//! gauge · chart · text renderers            (pure, stateless)
//!         ↓
//! geometry (polar mapping, range scaling)   (pure math, no surface)
//!         ↓
//! DrawSurface trait                         (surface)
//!         ↓
//! GraphicsSurface<D: DrawTarget>            (graphics, embedded-graphics adapter)
//! ```
//!
//! The renderers only see [`DrawSurface`]. Any embedded-graphics
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget) over
//! [`BinaryColor`](embedded_graphics::pixelcolor::BinaryColor) can be wrapped in
//! a [`GraphicsSurface`].
//!
//! # Example
//!
//! ```
//! use embedded_graphics::draw_target::DrawTarget;
//! use embedded_graphics::pixelcolor::BinaryColor;
//! use wpm_widget::{render_wpm_status, GraphicsSurface, RenderConfig, StatusSnapshot};
//!
//! fn redraw<D>(panel: &mut D, history: [u8; 10], config: &RenderConfig) -> Result<(), D::Error>
//! where
//!     D: DrawTarget<Color = BinaryColor>,
//! {
//!     let snapshot = StatusSnapshot::new(history);
//!     render_wpm_status(&mut GraphicsSurface::new(panel), &snapshot, config)
//! }
//! ```
//!
//! # Features
//!
//! - `std`: links `std`; `ConfigError` implements `std::error::Error` and
//!   `RecordingSurface` is available outside of tests
//! - `serde`: deserialise [`RenderConfig`] with validation
//! - `defmt`: `defmt::Format` derives and debug logging

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // render path must never panic
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod bongo;
pub mod chart;
pub mod config;
pub mod gauge;
pub mod geometry;
pub mod graphics;
pub mod layout;
pub mod mocks;
pub mod snapshot;
pub mod status;
pub mod surface;
pub mod text;

pub use assets::ImageAsset;
pub use bongo::{
    render_bongo_cat, render_bongo_cat_with_palette, BongoAnimation, BongoFrames, Frame, Tempo,
};
pub use config::{ConfigError, Palette, RangeMode, RenderConfig};
pub use graphics::GraphicsSurface;
pub use layout::Layout;
pub use snapshot::{StatusSnapshot, HISTORY_SIZE};
pub use status::{render_wpm_status, render_wpm_status_with_layout};
pub use surface::{
    ArcStyle, CornerRadius, DrawSurface, FontSize, ImageStyle, LabelStyle, LineStyle, RectStyle,
    TextAlign, TextArea,
};
