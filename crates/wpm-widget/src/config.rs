//! Render configuration, validated once at startup.
//!
//! Hosts build a [`RenderConfig`] at boot (or load it from a config file with
//! the `serde` feature) and pass it by reference into every render call. It is
//! never mutated afterwards.

use core::num::NonZeroU8;

use embedded_graphics::pixelcolor::BinaryColor;
use thiserror_no_std::Error;

/// Default upper bound of the fixed scale and the gauge's full-scale value.
pub const DEFAULT_FIXED_RANGE_MAX: u8 = 100;

const DEFAULT_FULL_SCALE: NonZeroU8 = match NonZeroU8::new(DEFAULT_FIXED_RANGE_MAX) {
    Some(max) => max,
    None => NonZeroU8::MIN,
};

/// Configuration rejected by [`RenderConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `fixed_range_max` must be positive; the gauge divides by it.
    #[error("fixed_range_max must be greater than zero")]
    ZeroRangeMax,
}

/// Chart scaling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeMode {
    /// Scale to the min/max of the visible window, recomputed every render.
    #[default]
    Dynamic,
    /// Scale to `[0, fixed_range_max]`.
    Fixed,
}

/// Foreground/background colour pair for a 1bpp panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    /// Colour of everything the widget draws.
    pub foreground: BinaryColor,
    /// Colour of the untouched canvas.
    pub background: BinaryColor,
}

impl Palette {
    /// Dark ink on a light panel.
    pub const NORMAL: Self = Self {
        foreground: BinaryColor::On,
        background: BinaryColor::Off,
    };

    /// Light ink on a dark panel.
    pub const INVERTED: Self = Self {
        foreground: BinaryColor::Off,
        background: BinaryColor::On,
    };
}

/// Immutable widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "RawRenderConfig")
)]
pub struct RenderConfig {
    range: RangeMode,
    fixed_range_max: NonZeroU8,
    inverted: bool,
}

impl RenderConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroRangeMax`] if `fixed_range_max` is zero.
    pub fn new(fixed_range: bool, fixed_range_max: u8) -> Result<Self, ConfigError> {
        let Some(max) = NonZeroU8::new(fixed_range_max) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejecting render config: fixed_range_max is zero");
            return Err(ConfigError::ZeroRangeMax);
        };

        let range = if fixed_range {
            RangeMode::Fixed
        } else {
            RangeMode::Dynamic
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "render config: range={} max={=u8}",
            range,
            max.get()
        );

        Ok(Self {
            range,
            fixed_range_max: max,
            inverted: false,
        })
    }

    /// Return a copy drawing light-on-dark.
    #[must_use]
    pub const fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Chart scaling policy.
    #[must_use]
    pub const fn range(&self) -> RangeMode {
        self.range
    }

    /// `true` when the chart uses the fixed `[0, max]` scale.
    #[must_use]
    pub const fn is_fixed_range(&self) -> bool {
        matches!(self.range, RangeMode::Fixed)
    }

    /// Gauge full-scale value and fixed chart upper bound. Always positive.
    #[must_use]
    pub const fn fixed_range_max(&self) -> u8 {
        self.fixed_range_max.get()
    }

    /// [`fixed_range_max`](Self::fixed_range_max) as a non-zero divisor.
    #[must_use]
    pub const fn full_scale(&self) -> NonZeroU8 {
        self.fixed_range_max
    }

    /// `true` when drawing light-on-dark.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Colours derived from the inversion flag.
    #[must_use]
    pub const fn palette(&self) -> Palette {
        if self.inverted {
            Palette::INVERTED
        } else {
            Palette::NORMAL
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            range: RangeMode::Dynamic,
            fixed_range_max: DEFAULT_FULL_SCALE,
            inverted: false,
        }
    }
}

/// Unvalidated wire form of [`RenderConfig`]; every field is optional.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRenderConfig {
    #[serde(default)]
    fixed_range: bool,
    #[serde(default = "default_fixed_range_max")]
    fixed_range_max: u8,
    #[serde(default)]
    inverted: bool,
}

#[cfg(feature = "serde")]
fn default_fixed_range_max() -> u8 {
    DEFAULT_FIXED_RANGE_MAX
}

#[cfg(feature = "serde")]
impl TryFrom<RawRenderConfig> for RenderConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRenderConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.fixed_range, raw.fixed_range_max)?.with_inverted(raw.inverted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dynamic_with_max_100() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.range(), RangeMode::Dynamic);
        assert!(!cfg.is_fixed_range());
        assert_eq!(cfg.fixed_range_max(), 100);
        assert!(!cfg.is_inverted());
    }

    #[test]
    fn new_matches_default() {
        assert_eq!(RenderConfig::new(false, 100), Ok(RenderConfig::default()));
    }

    #[test]
    fn zero_max_is_rejected() {
        assert_eq!(RenderConfig::new(true, 0), Err(ConfigError::ZeroRangeMax));
    }

    #[test]
    fn fixed_range_flag_selects_mode() {
        let cfg = RenderConfig::new(true, 80).unwrap();
        assert_eq!(cfg.range(), RangeMode::Fixed);
        assert_eq!(cfg.fixed_range_max(), 80);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_with_validation() {
        let cfg: RenderConfig = serde_json::from_str(r#"{"fixed_range": true}"#).unwrap();
        assert!(cfg.is_fixed_range());
        assert_eq!(cfg.fixed_range_max(), DEFAULT_FIXED_RANGE_MAX);

        assert!(serde_json::from_str::<RenderConfig>(r#"{"fixed_range_max": 0}"#).is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn config_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConfigError::ZeroRangeMax);
        assert_eq!(err.to_string(), "fixed_range_max must be greater than zero");
        assert!(err.source().is_none());
    }

    #[test]
    fn palette_follows_inversion() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.palette(), Palette::NORMAL);
        assert_eq!(cfg.with_inverted(true).palette(), Palette::INVERTED);
    }
}
