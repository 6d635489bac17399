//! The time accumulation engine.
//!
//! [accumulator::TimeAccumulator] owns the per-category totals and the active category,
//! [scheduler::TickScheduler] produces the one second cadence that feeds it. Nothing outside of
//! this module writes the totals directly.

pub mod accumulator;
pub mod format;
pub mod scheduler;

use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;

/// Activity bucket being timed. The set is closed, so every category a caller can hold is a valid
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    #[default]
    Meditation,
    Office,
    Idle,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Meditation, Category::Office, Category::Idle];

    pub fn name(self) -> &'static str {
        match self {
            Category::Meditation => "Meditation",
            Category::Office => "Office",
            Category::Idle => "Idle",
        }
    }

    /// One letter badge shown next to the clock.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Category::Meditation => "G",
            Category::Office => "O",
            Category::Idle => "D",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Meditation => 0,
            Category::Office => 1,
            Category::Idle => 2,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Accepts either the abbreviation or the full name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| s.eq_ignore_ascii_case(c.abbreviation()) || s.eq_ignore_ascii_case(c.name()))
            .ok_or_else(|| anyhow!("Unknown category {s:?}, expected one of G, O, D"))
    }
}
