use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use super::{
    format::{format_duration, format_duration_compact},
    Category,
};

/// Amount of time a single tick is worth.
pub const TICK: Duration = Duration::from_secs(1);

/// Immutable copy of the tracker state handed out to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackerSnapshot {
    totals: [Duration; 3],
    active: Category,
}

impl TrackerSnapshot {
    pub fn active(&self) -> Category {
        self.active
    }

    pub fn total_for(&self, category: Category) -> Duration {
        self.totals[category.index()]
    }

    /// Total of the category currently receiving ticks. This is what the main clock shows.
    pub fn active_total(&self) -> Duration {
        self.total_for(self.active)
    }

    /// Totals in [Category::ALL] order.
    pub fn intervals(&self) -> [(Category, Duration); 3] {
        Category::ALL.map(|category| (category, self.total_for(category)))
    }

    pub fn sum(&self) -> Duration {
        self.totals.iter().sum()
    }
}

/// Authoritative per-category totals. Only [TimeAccumulator::tick] adds time and
/// [TimeAccumulator::switch_to] only moves the active marker, so time is never credited twice or
/// lost on a switch.
///
/// Every mutation is published to subscribers as a [TrackerSnapshot].
pub struct TimeAccumulator {
    state: TrackerSnapshot,
    observers: watch::Sender<TrackerSnapshot>,
}

impl Default for TimeAccumulator {
    fn default() -> Self {
        Self::new(Category::default())
    }
}

impl TimeAccumulator {
    pub fn new(active: Category) -> Self {
        let state = TrackerSnapshot {
            totals: Default::default(),
            active,
        };
        let (observers, _) = watch::channel(state);
        Self { state, observers }
    }

    /// Adds one second to the active category.
    pub fn tick(&mut self) {
        let active = self.state.active;
        self.state.totals[active.index()] += TICK;
        debug!(
            "Tick for {active}, now {}",
            format_duration(self.state.active_total())
        );
        self.publish();
    }

    /// Makes `category` receive future ticks. Totals stay untouched.
    pub fn switch_to(&mut self, category: Category) {
        if self.state.active == category {
            debug!("{category} is already active");
            return;
        }
        info!("Switching from {} to {category}", self.state.active);
        self.state.active = category;
        self.publish();
    }

    /// Zeroes every total. The active category is kept.
    pub fn reset(&mut self) {
        info!("Resetting totals, {} discarded", format_duration(self.state.sum()));
        self.state.totals = Default::default();
        self.publish();
    }

    pub fn total_for(&self, category: Category) -> Duration {
        self.state.total_for(category)
    }

    pub fn active(&self) -> Category {
        self.state.active
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        self.state
    }

    /// Receiver that observes every published snapshot, starting with the current one.
    pub fn subscribe(&self) -> watch::Receiver<TrackerSnapshot> {
        self.observers.subscribe()
    }

    pub fn formatted_string(duration: Duration) -> String {
        format_duration(duration)
    }

    pub fn compact_formatted_string(duration: Duration) -> String {
        format_duration_compact(duration)
    }

    fn publish(&self) {
        // Replacing instead of sending keeps the value current even without subscribers.
        self.observers.send_replace(self.state);
    }
}

#[cfg(test)]
mod accumulator_tests {
    use std::time::Duration;

    use crate::{
        tracker::{accumulator::TimeAccumulator, Category},
        utils::logging::TEST_LOGGING,
    };

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn starts_at_zero_on_meditation() {
        let accumulator = TimeAccumulator::default();
        assert_eq!(accumulator.active(), Category::Meditation);
        for category in Category::ALL {
            assert_eq!(accumulator.total_for(category), Duration::ZERO);
        }
    }

    #[test]
    fn switching_keeps_previous_totals() {
        *TEST_LOGGING;
        let mut accumulator = TimeAccumulator::default();

        for _ in 0..65 {
            accumulator.tick();
        }
        assert_eq!(accumulator.total_for(Category::Meditation), secs(65));
        assert_eq!(
            TimeAccumulator::formatted_string(accumulator.total_for(Category::Meditation)),
            "01:05"
        );

        accumulator.switch_to(Category::Office);
        for _ in 0..10 {
            accumulator.tick();
        }

        assert_eq!(accumulator.total_for(Category::Meditation), secs(65));
        assert_eq!(accumulator.total_for(Category::Office), secs(10));
        assert_eq!(accumulator.total_for(Category::Idle), Duration::ZERO);
    }

    #[test]
    fn switching_never_changes_totals() {
        let mut accumulator = TimeAccumulator::new(Category::Idle);
        accumulator.tick();
        accumulator.tick();
        let before = accumulator.snapshot();

        for category in [
            Category::Office,
            Category::Office,
            Category::Meditation,
            Category::Idle,
            Category::Idle,
        ] {
            accumulator.switch_to(category);
            assert_eq!(accumulator.active(), category);
            assert_eq!(accumulator.snapshot().intervals(), before.intervals());
        }
    }

    #[test]
    fn sum_of_totals_equals_tick_count() {
        let mut accumulator = TimeAccumulator::default();
        let mut ticks = 0u64;
        // Deterministic mix of switches and ticks.
        let mut seed = 7u64;
        for _ in 0..1000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            match (seed >> 33) % 4 {
                0 => accumulator.switch_to(Category::ALL[((seed >> 40) % 3) as usize]),
                _ => {
                    accumulator.tick();
                    ticks += 1;
                }
            }
            assert_eq!(accumulator.snapshot().sum(), secs(ticks));
        }
    }

    #[test]
    fn tick_only_touches_active_category() {
        let mut accumulator = TimeAccumulator::new(Category::Office);
        accumulator.tick();
        let snapshot = accumulator.snapshot();
        assert_eq!(
            snapshot.intervals(),
            [
                (Category::Meditation, Duration::ZERO),
                (Category::Office, secs(1)),
                (Category::Idle, Duration::ZERO),
            ]
        );
        assert_eq!(snapshot.active_total(), secs(1));
    }

    #[test]
    fn reset_zeroes_totals_and_keeps_active() {
        let mut accumulator = TimeAccumulator::default();
        accumulator.tick();
        accumulator.switch_to(Category::Idle);
        accumulator.tick();

        accumulator.reset();

        assert_eq!(accumulator.active(), Category::Idle);
        assert_eq!(accumulator.snapshot().sum(), Duration::ZERO);
    }

    #[test]
    fn observers_see_every_mutation() {
        let mut accumulator = TimeAccumulator::default();
        let mut observer = accumulator.subscribe();
        assert!(!observer.has_changed().unwrap());

        accumulator.tick();
        assert!(observer.has_changed().unwrap());
        assert_eq!(
            observer.borrow_and_update().total_for(Category::Meditation),
            secs(1)
        );

        accumulator.switch_to(Category::Meditation);
        assert!(!observer.has_changed().unwrap());

        accumulator.switch_to(Category::Office);
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().active(), Category::Office);
    }

    #[test]
    fn formatters_are_exposed_on_the_accumulator() {
        assert_eq!(TimeAccumulator::formatted_string(secs(3600)), "1:00:00");
        assert_eq!(TimeAccumulator::compact_formatted_string(secs(3600)), "1:00");
    }
}
