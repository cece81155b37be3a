//! Frame rendering and sample parsing shared by the CLI commands.

use std::path::Path;

use anyhow::{bail, Context, Result};
use wpm_widget::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use wpm_widget::{
    render_bongo_cat_with_palette, render_wpm_status, BongoAnimation, BongoFrames, GraphicsSurface,
    Palette, RenderConfig, StatusSnapshot, HISTORY_SIZE,
};

use crate::framebuffer::Framebuffer;

/// Which widget a frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Widget {
    /// Gauge, chart and readout.
    #[default]
    Wpm,
    /// Bongo cat animation.
    Bongo,
}

/// Parse a comma-separated WPM list into a snapshot.
///
/// Fewer than [`HISTORY_SIZE`] values are left-padded with zeros so the last
/// value given is the newest sample.
///
/// # Errors
///
/// Fails on non-numeric values, values above 255, or too many values.
pub fn parse_samples(list: &str) -> Result<StatusSnapshot> {
    let values = parse_sequence(list)?;
    if values.len() > HISTORY_SIZE {
        bail!(
            "expected at most {HISTORY_SIZE} samples, got {}",
            values.len()
        );
    }

    let mut samples = [0u8; HISTORY_SIZE];
    let start = HISTORY_SIZE.saturating_sub(values.len());
    for (slot, value) in samples.iter_mut().skip(start).zip(values) {
        *slot = value;
    }
    Ok(StatusSnapshot::new(samples))
}

/// Parse a comma-separated WPM sequence of any length.
///
/// # Errors
///
/// Fails on non-numeric values or values above 255.
pub fn parse_sequence(list: &str) -> Result<Vec<u8>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .with_context(|| format!("invalid WPM sample {s:?}"))
        })
        .collect()
}

/// Blank canvas in `palette`'s background.
pub fn blank_canvas(palette: Palette) -> Framebuffer {
    Framebuffer::filled(SCREEN_WIDTH, SCREEN_HEIGHT, palette.background)
}

/// Draw `widget` for `snapshot` into a fresh canvas in the config's palette.
pub fn render_frame(
    widget: Widget,
    snapshot: &StatusSnapshot,
    config: &RenderConfig,
    animation: &mut BongoAnimation,
    now_ms: u64,
) -> Framebuffer {
    let palette = config.palette();
    match widget {
        Widget::Wpm => {
            let mut canvas = blank_canvas(palette);
            render_wpm_status(&mut GraphicsSurface::new(&mut canvas), snapshot, config)
                .unwrap_or_else(|never| match never {});
            canvas
        }
        Widget::Bongo => {
            let mut canvas = blank_canvas(palette);
            render_bongo_cat_with_palette(
                &mut GraphicsSurface::new(&mut canvas),
                snapshot,
                animation,
                now_ms,
                &BongoFrames::BUILT_IN,
                palette,
            )
            .unwrap_or_else(|never| match never {});
            canvas
        }
    }
}

/// Render one frame and write it to `out`.
///
/// # Errors
///
/// Fails if the screenshot cannot be written.
pub fn render_to_file(
    widget: Widget,
    snapshot: &StatusSnapshot,
    config: &RenderConfig,
    out: &Path,
    scale: u32,
) -> Result<()> {
    let mut animation = BongoAnimation::new(0);
    let canvas = render_frame(widget, snapshot, config, &mut animation, 0);
    canvas.screenshot(out, scale)?;

    tracing::info!(
        path = %out.display(),
        wpm = snapshot.latest(),
        lit = canvas.lit_pixels(),
        "frame written"
    );
    Ok(())
}

/// Feed `sequence` into the history one sample per tick, writing a PNG per
/// tick into `out_dir`. Returns the paths written.
///
/// # Errors
///
/// Fails if the directory cannot be created or a screenshot cannot be written.
pub fn replay(
    widget: Widget,
    sequence: &[u8],
    config: &RenderConfig,
    out_dir: &Path,
    tick_ms: u64,
    scale: u32,
) -> Result<Vec<std::path::PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut snapshot = StatusSnapshot::default();
    let mut animation = BongoAnimation::new(0);
    let mut now_ms = 0u64;
    let mut written = Vec::with_capacity(sequence.len());

    for (tick, &wpm) in sequence.iter().enumerate() {
        now_ms = now_ms.saturating_add(tick_ms);
        snapshot = snapshot.shifted(wpm);

        let canvas = render_frame(widget, &snapshot, config, &mut animation, now_ms);
        let path = out_dir.join(format!("frame_{tick:04}.png"));
        canvas.screenshot(&path, scale)?;

        tracing::info!(
            tick,
            now_ms,
            wpm,
            frame = ?animation.frame(),
            path = %path.display(),
            "frame written"
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_are_left_padded() {
        let snap = parse_samples("30, 40,50").unwrap();
        assert_eq!(snap.samples(), &[0, 0, 0, 0, 0, 0, 0, 30, 40, 50]);
        assert_eq!(snap.latest(), 50);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(parse_samples("").unwrap(), StatusSnapshot::default());
    }

    #[test]
    fn rejects_bad_samples() {
        assert!(parse_samples("10,abc").is_err());
        assert!(parse_samples("256").is_err());
        assert!(parse_samples("1,2,3,4,5,6,7,8,9,10,11").is_err());
    }

    #[test]
    fn wpm_frame_uses_config_palette() {
        let cfg = RenderConfig::default().with_inverted(true);
        let mut anim = BongoAnimation::default();
        let canvas = render_frame(Widget::Wpm, &StatusSnapshot::default(), &cfg, &mut anim, 0);
        // Inverted: mostly lit background, ink is Off.
        assert!(canvas.lit_pixels() > canvas.count(embedded_graphics::pixelcolor::BinaryColor::Off));
    }

    #[test]
    fn bongo_frame_uses_config_palette() {
        let cfg = RenderConfig::default().with_inverted(true);
        let mut anim = BongoAnimation::default();
        let canvas = render_frame(Widget::Bongo, &StatusSnapshot::default(), &cfg, &mut anim, 0);
        let ink = wpm_widget::assets::BONGO_REST.set_pixels().count();
        assert_eq!(canvas.count(embedded_graphics::pixelcolor::BinaryColor::Off), ink);
    }
}
