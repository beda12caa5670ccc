//! Person states and per-state counts

use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Health state of one simulated person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonState {
    Untouched,
    Infected,
    /// Assumed to be immune afterwards
    Recovered,
    Deceased,
}

impl PersonState {
    /// Every state, in table column order
    pub const ALL: [PersonState; 4] = [
        PersonState::Untouched,
        PersonState::Infected,
        PersonState::Recovered,
        PersonState::Deceased,
    ];

    pub fn all() -> [PersonState; 4] {
        Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonState::Untouched => "untouched",
            PersonState::Infected => "infected",
            PersonState::Recovered => "recovered",
            PersonState::Deceased => "deceased",
        }
    }
}

impl fmt::Display for PersonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of persons in each state; every state is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub untouched: u64,
    pub infected: u64,
    pub recovered: u64,
    pub deceased: u64,
}

impl StateCounts {
    pub fn get(&self, state: PersonState) -> u64 {
        match state {
            PersonState::Untouched => self.untouched,
            PersonState::Infected => self.infected,
            PersonState::Recovered => self.recovered,
            PersonState::Deceased => self.deceased,
        }
    }

    fn slot_mut(&mut self, state: PersonState) -> &mut u64 {
        match state {
            PersonState::Untouched => &mut self.untouched,
            PersonState::Infected => &mut self.infected,
            PersonState::Recovered => &mut self.recovered,
            PersonState::Deceased => &mut self.deceased,
        }
    }

    pub fn add(&mut self, state: PersonState, count: u64) {
        *self.slot_mut(state) += count;
    }

    pub fn total(&self) -> u64 {
        PersonState::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// `(state, count)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (PersonState, u64)> + '_ {
        PersonState::ALL.iter().map(move |s| (*s, self.get(*s)))
    }
}

impl AddAssign for StateCounts {
    fn add_assign(&mut self, rhs: Self) {
        for (state, count) in rhs.iter() {
            self.add(state, count);
        }
    }
}

impl Sum for StateCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, c| {
            acc += c;
            acc
        })
    }
}

impl<'a> Sum<&'a StateCounts> for StateCounts {
    fn sum<I: Iterator<Item = &'a StateCounts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
