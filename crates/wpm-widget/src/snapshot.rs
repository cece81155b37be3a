//! Immutable WPM history snapshot consumed by every renderer.
//!
//! The history is a const-generic `[u8; N]`. Index `N - 1` is always the most
//! recent sample and index `0` the oldest. `N` is fixed at build time and must
//! be at least 2 so the chart has at least one interval to draw.

/// Number of samples in the trailing history window.
pub const HISTORY_SIZE: usize = 10;

/// Point-in-time bundle of the trailing WPM history.
///
/// Renderers only borrow a snapshot; producing and refreshing it is the job of
/// the host's sampling task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot<const N: usize = HISTORY_SIZE> {
    samples: [u8; N],
}

impl<const N: usize> StatusSnapshot<N> {
    const VALID_LEN: () = assert!(N >= 2, "history window needs at least two samples");

    /// Wrap a history array, oldest sample first.
    #[must_use]
    pub const fn new(samples: [u8; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_LEN;
        Self { samples }
    }

    /// Snapshot whose every sample equals `wpm`.
    #[must_use]
    pub const fn flat(wpm: u8) -> Self {
        Self::new([wpm; N])
    }

    /// All samples, oldest first.
    #[must_use]
    pub const fn samples(&self) -> &[u8; N] {
        &self.samples
    }

    /// The most recent sample.
    #[must_use]
    pub fn latest(&self) -> u8 {
        // N >= 2 is enforced at construction, so the slice is never empty.
        self.samples.last().copied().unwrap_or_default()
    }

    /// Smallest and largest sample in the window.
    #[must_use]
    pub fn min_max(&self) -> (u8, u8) {
        self.samples
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)))
    }

    /// Adjacent `(older, newer)` pairs with their index, exactly `N - 1` of them.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (usize, u8, u8)> + '_ {
        self.samples
            .windows(2)
            .enumerate()
            .filter_map(|(i, w)| match *w {
                [a, b] => Some((i, a, b)),
                _ => None,
            })
    }

    /// New snapshot with the oldest sample dropped and `wpm` appended as newest.
    #[must_use]
    pub fn shifted(&self, wpm: u8) -> Self {
        let mut samples = self.samples;
        samples.rotate_left(1);
        if let Some(newest) = samples.last_mut() {
            *newest = wpm;
        }
        Self { samples }
    }
}

impl<const N: usize> Default for StatusSnapshot<N> {
    fn default() -> Self {
        Self::flat(0)
    }
}

impl<const N: usize> From<[u8; N]> for StatusSnapshot<N> {
    fn from(samples: [u8; N]) -> Self {
        Self::new(samples)
    }
}
