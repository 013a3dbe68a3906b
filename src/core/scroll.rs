//! Scroll-driven view state
//!
//! - Header styling flips once the page has scrolled past [`SCROLL_THRESHOLD`]
//! - Entrance animations are one-shot: [`RevealLedger`] remembers what has
//!   already been revealed and never forgets it
//! - [`Debounce`] is the bookkeeping half of a debouncer: it hands out
//!   tickets and only honours the most recent one

use std::collections::HashSet;
use std::hash::Hash;

/// Scroll offset (px) past which the header switches to its solid style
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Quiet period before the header recomputes its style (10ms)
pub const HEADER_DEBOUNCE_MS: u32 = 10;

/// Fraction of an element that must be visible to reveal it
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Class marking elements that animate in when scrolled into view
pub const REVEAL_SELECTOR_CLASS: &str = "animate-on-scroll";

/// Class added once an element has been revealed
pub const REVEALED_CLASS: &str = "animate-in";

/// Whether the header should use its scrolled style
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// One-way set of revealed elements
#[derive(Debug, Clone)]
pub struct RevealLedger<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> RevealLedger<K> {
    pub fn new() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }

    /// Mark `key` as revealed.
    ///
    /// Returns `true` only the first time a key is marked.
    pub fn mark(&mut self, key: K) -> bool {
        self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

impl<K: Eq + Hash> Default for RevealLedger<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies one scheduled run of a debounced handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Ticket bookkeeping for a debounced handler.
///
/// Scheduling supersedes whatever was pending; only the latest ticket may
/// fire, and it may fire at most once.
#[derive(Debug, Default, Clone)]
pub struct Debounce {
    issued: u64,
    pending: Option<Ticket>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a new run, superseding any pending one
    pub fn schedule(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(ticket);
        ticket
    }

    /// Consume `ticket` if it is still the pending one
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending run, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert!(is_scrolled(2400.0));
    }

    #[test]
    fn test_reveal_is_one_way_and_idempotent() {
        let mut ledger = RevealLedger::new();

        assert!(ledger.mark(3));
        assert!(!ledger.mark(3));
        assert!(ledger.is_revealed(&3));
        assert!(!ledger.is_revealed(&4));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_latest_ticket_wins() {
        let mut debounce = Debounce::new();

        let first = debounce.schedule();
        let second = debounce.schedule();

        assert!(!debounce.fire(first));
        assert!(debounce.fire(second));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut debounce = Debounce::new();
        let ticket = debounce.schedule();

        assert!(debounce.fire(ticket));
        assert!(!debounce.fire(ticket));
    }

    #[test]
    fn test_cancel_discards_pending_run() {
        let mut debounce = Debounce::new();
        let ticket = debounce.schedule();

        debounce.cancel();

        assert!(!debounce.is_pending());
        assert!(!debounce.fire(ticket));
    }
}
