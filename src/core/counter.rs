//! Hero statistics counters
//!
//! Four labelled counters climb from zero to fixed targets, one step per
//! tick. Once every counter has reached its target the set reports
//! [`TickOutcome::Complete`] and ignores further ticks, which is the signal
//! for the owner to cancel its interval for good.

use derive_more::Display;

/// Tick cadence for the counters (225ms)
pub const COUNTER_TICK_MS: u32 = 225;

/// Counter labels in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CounterLabel {
    #[display("Courses")]
    Courses,
    #[display("Students")]
    Students,
    #[display("Projects")]
    Projects,
    #[display("Partnerships")]
    Partnerships,
}

impl CounterLabel {
    pub const ALL: [CounterLabel; 4] = [
        CounterLabel::Courses,
        CounterLabel::Students,
        CounterLabel::Projects,
        CounterLabel::Partnerships,
    ];

    /// Stable key used for list rendering
    pub fn key(&self) -> &'static str {
        match self {
            CounterLabel::Courses => "courses",
            CounterLabel::Students => "students",
            CounterLabel::Projects => "projects",
            CounterLabel::Partnerships => "partnerships",
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one counter moved
    Advanced,
    /// Every counter is at its target; nothing moved
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counter {
    label: CounterLabel,
    value: u32,
    target: u32,
}

/// A fixed set of counters advancing toward their targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSet {
    counters: Vec<Counter>,
}

impl CounterSet {
    /// Build a set from `(label, target)` pairs, all starting at zero
    pub fn new(targets: impl IntoIterator<Item = (CounterLabel, u32)>) -> Self {
        Self {
            counters: targets
                .into_iter()
                .map(|(label, target)| Counter {
                    label,
                    value: 0,
                    target,
                })
                .collect(),
        }
    }

    /// The site's statistics: 6 courses, 10 students, 5 projects, 5 partnerships
    pub fn site_defaults() -> Self {
        Self::new([
            (CounterLabel::Courses, 6),
            (CounterLabel::Students, 10),
            (CounterLabel::Projects, 5),
            (CounterLabel::Partnerships, 5),
        ])
    }

    /// Advance every unfinished counter by one
    pub fn tick(&mut self) -> TickOutcome {
        let mut moved = false;
        for counter in self.counters.iter_mut().filter(|c| c.value < c.target) {
            counter.value += 1;
            moved = true;
        }
        if moved {
            TickOutcome::Advanced
        } else {
            TickOutcome::Complete
        }
    }

    /// Whether every counter has reached its target
    pub fn is_complete(&self) -> bool {
        self.counters.iter().all(|c| c.value >= c.target)
    }

    /// Current value of a label, if present in the set
    pub fn value(&self, label: CounterLabel) -> Option<u32> {
        self.counters
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.value)
    }

    /// Zero-padded two-digit display string, e.g. `"06"`
    pub fn display(&self, label: CounterLabel) -> String {
        format_counter(self.value(label).unwrap_or_default())
    }

    /// Labels in the order they were configured
    pub fn labels(&self) -> impl Iterator<Item = CounterLabel> + '_ {
        self.counters.iter().map(|c| c.label)
    }
}

/// Format a counter value as a fixed-width two-digit string
pub fn format_counter(value: u32) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(set: &CounterSet) -> Vec<u32> {
        CounterLabel::ALL
            .iter()
            .map(|l| set.value(*l).unwrap())
            .collect()
    }

    #[test]
    fn test_site_defaults_start_at_zero() {
        let set = CounterSet::site_defaults();

        assert_eq!(snapshot(&set), vec![0, 0, 0, 0]);
        assert!(!set.is_complete());
        assert_eq!(set.display(CounterLabel::Students), "00");
    }

    #[test]
    fn test_values_are_monotonic_and_bounded() {
        let mut set = CounterSet::site_defaults();
        let targets = [6, 10, 5, 5];
        let mut previous = snapshot(&set);

        for _ in 0..30 {
            set.tick();
            let current = snapshot(&set);
            for i in 0..4 {
                assert!(current[i] >= previous[i]);
                assert!(current[i] <= targets[i]);
            }
            previous = current;
        }
    }

    #[test]
    fn test_labels_stop_independently() {
        let mut set = CounterSet::site_defaults();

        for _ in 0..5 {
            assert_eq!(set.tick(), TickOutcome::Advanced);
        }
        assert_eq!(set.value(CounterLabel::Projects), Some(5));
        assert_eq!(set.value(CounterLabel::Courses), Some(5));

        set.tick();
        assert_eq!(set.value(CounterLabel::Projects), Some(5));
        assert_eq!(set.value(CounterLabel::Courses), Some(6));
        assert_eq!(set.value(CounterLabel::Students), Some(6));
    }

    #[test]
    fn test_completion_scenario_with_padding() {
        let mut set = CounterSet::site_defaults();

        let mut ticks = 0;
        while set.tick() == TickOutcome::Advanced {
            ticks += 1;
        }
        assert_eq!(ticks, 10);
        assert!(set.is_complete());

        let displayed: Vec<String> = CounterLabel::ALL.iter().map(|l| set.display(*l)).collect();
        assert_eq!(displayed, vec!["06", "10", "05", "05"]);

        let frozen = set.clone();
        for _ in 0..10 {
            assert_eq!(set.tick(), TickOutcome::Complete);
        }
        assert_eq!(set, frozen);
    }

    #[test]
    fn test_zero_target_is_complete_immediately() {
        let mut set = CounterSet::new([(CounterLabel::Courses, 0)]);

        assert!(set.is_complete());
        assert_eq!(set.tick(), TickOutcome::Complete);
    }

    #[test]
    fn test_label_display_and_keys() {
        assert_eq!(CounterLabel::Partnerships.to_string(), "Partnerships");
        assert_eq!(CounterLabel::Courses.key(), "courses");
    }

    #[test]
    fn test_format_counter() {
        assert_eq!(format_counter(0), "00");
        assert_eq!(format_counter(7), "07");
        assert_eq!(format_counter(10), "10");
    }
}
