//! # Feature Carousel
//!
//! Two timers drive the landing carousel: one advances to the next line, the other
//! fills a progress bar in the meantime. This type holds the state both timers
//! mutate; the browser side only wires intervals to [`Carousel::advance`] and
//! [`Carousel::tick`].

/// Time each carousel line stays visible.
pub const ADVANCE_INTERVAL_MS: u32 = 2500;
/// Progress bar update period.
pub const PROGRESS_INTERVAL_MS: u32 = 50;

const PROGRESS_STEP: u8 = 2;
const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    progress: u8,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, progress: 0, len }
    }

    /// Back to the first line with an empty bar, e.g. after the language changed.
    pub fn restart(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Show the next line (wrapping) and restart the progress bar.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.progress = 0;
    }

    /// Grow the progress bar by one step, saturating at 100.
    pub fn tick(&mut self) {
        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(PROGRESS_MAX);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Progress in percent, `0..=100`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// The line currently on display.
    pub fn current<'a>(&self, items: &[&'a str]) -> Option<&'a str> {
        items.get(self.index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_advance_wraps() {
        let mut carousel = Carousel::new(4);
        for expected in [1, 2, 3, 0, 1] {
            carousel.advance();
            assert_eq!(carousel.index(), expected);
        }
    }

    #[test]
    fn test_progress_caps_and_resets() {
        let mut carousel = Carousel::new(4);
        for _ in 0..30 {
            carousel.tick();
        }
        assert_eq!(carousel.progress(), 60);

        for _ in 0..100 {
            carousel.tick();
        }
        assert_eq!(carousel.progress(), 100);

        carousel.advance();
        assert_eq!(carousel.progress(), 0);
    }

    #[test]
    fn test_full_cycle_fills_bar() {
        // 2500 ms / 50 ms = 50 ticks of 2 % each
        let mut carousel = Carousel::new(4);
        for _ in 0..(ADVANCE_INTERVAL_MS / PROGRESS_INTERVAL_MS) {
            carousel.tick();
        }
        assert_eq!(carousel.progress(), 100);
    }

    #[test]
    fn test_current_follows_language() {
        let mut carousel = Carousel::new(4);
        carousel.advance();
        assert_eq!(
            carousel.current(&Language::En.landing().carousel),
            Some("🚀 Login with Google or as Guest")
        );
        assert_eq!(
            carousel.current(&Language::Id.landing().carousel),
            Some("🚀 Login dengan Google atau Sebagai Tamu")
        );
    }

    #[test]
    fn test_restart_mid_cycle() {
        let mut carousel = Carousel::new(4);
        carousel.advance();
        carousel.advance();
        carousel.tick();
        carousel.restart(4);
        assert_eq!(carousel, Carousel::new(4));
        assert_eq!(
            carousel.current(&Language::Jp.landing().carousel),
            Language::Jp.landing().carousel.first().copied()
        );
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current(&[]), None);
    }
}
