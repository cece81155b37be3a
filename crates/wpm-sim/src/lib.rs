//! Desktop host for the WPM widget
//!
//! Renders the widget into a headless [`Framebuffer`] and writes PNG
//! screenshots, so layouts can be checked without hardware.
//!
//! # Example
//!
//! ```no_run
//! use wpm_sim::{render_frame, Widget};
//! use wpm_widget::{BongoAnimation, RenderConfig, StatusSnapshot};
//!
//! let snapshot = StatusSnapshot::new([10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
//! let mut animation = BongoAnimation::default();
//! let canvas = render_frame(Widget::Wpm, &snapshot, &RenderConfig::default(), &mut animation, 0);
//! canvas.screenshot("wpm.png", 2)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod framebuffer;
pub mod render;

pub use config::{load_config, parse_config};
pub use framebuffer::Framebuffer;
pub use render::{parse_samples, parse_sequence, render_frame, render_to_file, replay, Widget};
