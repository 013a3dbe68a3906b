//! Single-open accordion state.
//!
//! The open panel is one nullable index, so opening a panel closes any
//! other without extra bookkeeping.

use crate::core::error::StateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    panels: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All panels start closed
    pub fn new(panels: usize) -> Result<Self, StateError> {
        if panels == 0 {
            return Err(StateError::NoPanels);
        }
        Ok(Self { panels, open: None })
    }

    /// Open `index`, or close it if it is already open.
    /// Indices past the last panel are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.panels {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn panels(&self) -> usize {
        self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let accordion = Accordion::new(4).unwrap();

        assert_eq!(accordion.open_panel(), None);
        assert!((0..4).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn test_rejects_zero_panels() {
        assert_eq!(Accordion::new(0), Err(StateError::NoPanels));
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut accordion = Accordion::new(4).unwrap();

        accordion.toggle(2);
        assert!(accordion.is_open(2));
        accordion.toggle(2);
        assert_eq!(accordion.open_panel(), None);
    }

    #[test]
    fn test_opening_another_panel_is_exclusive() {
        for i in 0..4 {
            for j in (0..4).filter(|j| *j != i) {
                let mut accordion = Accordion::new(4).unwrap();
                accordion.toggle(i);
                accordion.toggle(j);

                let open: Vec<usize> = (0..4).filter(|k| accordion.is_open(*k)).collect();
                assert_eq!(open, vec![j]);
            }
        }
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new(4).unwrap();
        accordion.toggle(1);

        accordion.toggle(4);
        assert_eq!(accordion.open_panel(), Some(1));
    }
}
