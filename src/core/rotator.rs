//! Index rotation for slideshows
//!
//! Every carousel on the landing page is an [`IndexRotator`] over a fixed,
//! ordered list of slides. The rotator only tracks the index; the UI layer
//! owns the timer that calls [`IndexRotator::advance`] and re-renders the
//! current slide whenever the index changes.
//!
//! Responsive carousels pick their list through [`ResponsiveSlides`] and call
//! [`IndexRotator::resize`] when the breakpoint flips.

use std::time::Duration;

use crate::core::error::StateError;

/// Default auto-advance cadence for every carousel (5 seconds)
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 5000;

/// Index into an ordered list of `len` items, always in `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRotator {
    index: usize,
    len: usize,
    interval: Duration,
}

impl IndexRotator {
    /// Create a rotator over `len` items with the default 5s cadence
    pub fn new(len: usize) -> Result<Self, StateError> {
        Self::with_interval(len, Duration::from_millis(DEFAULT_SLIDE_INTERVAL_MS as u64))
    }

    /// Create a rotator with a custom auto-advance cadence
    pub fn with_interval(len: usize, interval: Duration) -> Result<Self, StateError> {
        if len == 0 {
            return Err(StateError::EmptyRotation);
        }
        Ok(Self {
            index: 0,
            len,
            interval,
        })
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items being rotated
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a rotator is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Auto-advance cadence
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cadence in whole milliseconds, as browser timers expect
    pub fn interval_ms(&self) -> u32 {
        u32::try_from(self.interval.as_millis()).unwrap_or(u32::MAX)
    }

    /// Timer tick: move forward one slide, wrapping at the end
    pub fn advance(&mut self) {
        self.next();
    }

    /// Manual "next" button
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Manual "previous" button
    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Indicator click. Out-of-range targets are ignored.
    ///
    /// Returns whether the index was accepted.
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Switch to a list of a different length, keeping the index valid.
    ///
    /// The index is clamped to the last item of the new list. A zero length
    /// is rejected and leaves the rotator unchanged.
    pub fn resize(&mut self, len: usize) -> Result<(), StateError> {
        if len == 0 {
            return Err(StateError::EmptyRotation);
        }
        self.len = len;
        self.index = self.index.min(len - 1);
        Ok(())
    }

    /// 1-based position label such as `"3 / 9"`
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

/// Something that can carry the "active" presentation mark.
///
/// Implemented for DOM elements by the class-toggle rotator.
pub trait ActiveMark {
    fn set_active(&mut self, active: bool);
}

/// Clear the mark on every item, then set it on `items[index]`.
///
/// Does nothing beyond clearing when `index` is out of range.
pub fn mark_active<T: ActiveMark>(items: &mut [T], index: usize) {
    for item in items.iter_mut() {
        item.set_active(false);
    }
    if let Some(item) = items.get_mut(index) {
        item.set_active(true);
    }
}

/// Viewports narrower than this (px) use the narrow slide list
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

pub fn is_narrow_viewport(width: f64) -> bool {
    width < NARROW_VIEWPORT_PX
}

/// Two predefined slide lists selected by a narrow-viewport flag.
#[derive(Debug, Clone, Copy)]
pub struct ResponsiveSlides<T: 'static> {
    pub wide: &'static [T],
    pub narrow: &'static [T],
}

impl<T> ResponsiveSlides<T> {
    pub const fn new(wide: &'static [T], narrow: &'static [T]) -> Self {
        Self { wide, narrow }
    }

    /// The list for the current viewport class
    pub fn select(&self, is_narrow: bool) -> &'static [T] {
        if is_narrow { self.narrow } else { self.wide }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_viewport_breakpoint() {
        assert!(is_narrow_viewport(375.0));
        assert!(is_narrow_viewport(767.9));
        assert!(!is_narrow_viewport(768.0));
        assert!(!is_narrow_viewport(1440.0));
    }

    #[test]
    fn test_new_rejects_empty_list() {
        assert_eq!(IndexRotator::new(0), Err(StateError::EmptyRotation));
    }

    #[test]
    fn test_starts_at_zero_with_default_interval() {
        let rotator = IndexRotator::new(4).unwrap();

        assert_eq!(rotator.index(), 0);
        assert_eq!(rotator.len(), 4);
        assert_eq!(rotator.interval_ms(), 5000);
    }

    #[test]
    fn test_advance_wraps_modulo_len() {
        let mut rotator = IndexRotator::new(3).unwrap();

        rotator.advance();
        rotator.advance();
        assert_eq!(rotator.index(), 2);
        rotator.advance();
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_n_ticks_return_to_start_from_every_index() {
        for len in 1..=9 {
            for start in 0..len {
                let mut rotator = IndexRotator::new(len).unwrap();
                rotator.jump(start);
                for _ in 0..len {
                    rotator.advance();
                    assert!(rotator.index() < len);
                }
                assert_eq!(rotator.index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_next_and_previous_are_inverse() {
        for len in 1..=9 {
            for start in 0..len {
                let mut rotator = IndexRotator::new(len).unwrap();
                rotator.jump(start);

                rotator.next();
                rotator.previous();
                assert_eq!(rotator.index(), start);

                rotator.previous();
                rotator.next();
                assert_eq!(rotator.index(), start);
            }
        }
    }

    #[test]
    fn test_five_item_carousel_scenario() {
        let mut rotator = IndexRotator::new(5).unwrap();

        for _ in 0..5 {
            rotator.advance();
        }
        assert_eq!(rotator.index(), 0);

        rotator.previous();
        assert_eq!(rotator.index(), 4);
    }

    #[test]
    fn test_single_item_rotation_is_stable() {
        let mut rotator = IndexRotator::new(1).unwrap();

        rotator.next();
        rotator.previous();
        rotator.advance();
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_jump_sets_index_directly() {
        let mut rotator = IndexRotator::new(9).unwrap();

        assert!(rotator.jump(7));
        assert_eq!(rotator.index(), 7);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut rotator = IndexRotator::new(5).unwrap();
        rotator.jump(2);

        assert!(!rotator.jump(5));
        assert_eq!(rotator.index(), 2);
    }

    #[test]
    fn test_resize_clamps_index() {
        let mut rotator = IndexRotator::new(9).unwrap();
        rotator.jump(8);

        rotator.resize(5).unwrap();
        assert_eq!(rotator.len(), 5);
        assert_eq!(rotator.index(), 4);

        rotator.resize(9).unwrap();
        assert_eq!(rotator.index(), 4);
    }

    #[test]
    fn test_resize_to_zero_is_rejected() {
        let mut rotator = IndexRotator::new(3).unwrap();
        rotator.jump(1);

        assert_eq!(rotator.resize(0), Err(StateError::EmptyRotation));
        assert_eq!(rotator.len(), 3);
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn test_position_label_is_one_based() {
        let mut rotator = IndexRotator::new(9).unwrap();
        rotator.jump(2);

        assert_eq!(rotator.position_label(), "3 / 9");
    }

    #[derive(Default)]
    struct Slide {
        active: bool,
    }

    impl ActiveMark for Slide {
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    #[test]
    fn test_mark_active_leaves_exactly_one_marked() {
        let mut slides: Vec<Slide> = (0..4).map(|_| Slide::default()).collect();
        slides[0].active = true;
        slides[3].active = true;

        mark_active(&mut slides, 2);

        let marked: Vec<usize> = slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marked, vec![2]);
    }

    #[test]
    fn test_mark_active_out_of_range_clears_all() {
        let mut slides: Vec<Slide> = (0..2).map(|_| Slide::default()).collect();
        slides[1].active = true;

        mark_active(&mut slides, 5);

        assert!(slides.iter().all(|s| !s.active));
    }

    #[test]
    fn test_responsive_slides_select() {
        static WIDE: [&str; 2] = ["a", "b"];
        static NARROW: [&str; 3] = ["a", "b", "c"];
        let slides = ResponsiveSlides::new(&WIDE, &NARROW);

        assert_eq!(slides.select(false).len(), 2);
        assert_eq!(slides.select(true).len(), 3);
    }
}
