//! Scroll-driven presentation state.

use serde::Serialize;

/// Default fraction of a region that must be on screen before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll offset, in pixels, past which the header turns solid.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// A one-shot visibility latch for scroll-reveal regions.
///
/// The region becomes visible the first time its intersection ratio
/// reaches the threshold and stays visible from then on.
///
/// # Example
///
/// ```
/// use idms_site::interaction::RevealLatch;
///
/// let mut latch = RevealLatch::new(0.3);
/// assert!(!latch.observe(0.1));
/// assert!(latch.observe(0.5));
/// assert!(latch.observe(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    /// A hidden latch; the threshold is clamped to `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };

        Self {
            threshold,
            visible: false,
        }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the region has been revealed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds an intersection ratio and returns the resulting visibility.
    ///
    /// A region counts as intersecting when some of it is on screen and the
    /// ratio reaches the threshold.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if !self.visible && intersection_ratio > 0.0 && intersection_ratio >= self.threshold {
            self.visible = true;
        }
        self.visible
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

/// Whether the page has scrolled far enough for a solid header.
///
/// Scroll position only exists in the browser. The header is rendered
/// unscrolled with `data-scroll-threshold`, and `site.js` applies this
/// rule on every scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HeaderScroll {
    offset: f64,
}

impl HeaderScroll {
    /// Header state at a vertical scroll offset.
    pub fn at(offset: f64) -> Self {
        Self { offset }
    }

    /// Records a scroll event.
    pub fn update(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Whether the header should render with background and shadow.
    pub fn is_scrolled(&self) -> bool {
        self.offset > HEADER_SCROLL_THRESHOLD_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        assert!(!RevealLatch::default().is_visible());
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = RevealLatch::default();
        latch.observe(0.2);
        for ratio in [0.0, 0.05, 0.0] {
            assert!(latch.observe(ratio));
        }
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut latch = RevealLatch::new(0.3);
        assert!(!latch.observe(0.29));
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_zero_threshold_needs_some_intersection() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(0.0));
        assert!(latch.observe(0.01));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealLatch::new(4.0).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealLatch::new(f64::NAN).threshold(), DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn test_header_turns_solid_after_50px() {
        let mut header = HeaderScroll::default();
        assert!(!header.is_scrolled());
        header.update(50.0);
        assert!(!header.is_scrolled());
        header.update(51.0);
        assert!(header.is_scrolled());
        header.update(0.0);
        assert!(!header.is_scrolled());
    }
}
