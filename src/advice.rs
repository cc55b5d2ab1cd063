use std::fmt;

use itertools::Itertools;

use crate::dice::{self, DICE_TOTALS};
use crate::solver::Solver;
use crate::state::State;
use crate::subsets::{possible_predecessor_subsets, predecessor_configuration, sum_of_subset};

/// Tiles to close for one roll, as face values in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move(pub Vec<u8>);

impl Move {
    pub fn tiles(&self) -> &[u8] {
        &self.0
    }

    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("[{}]", self.0.iter().join(", ")))
    }
}

/// Renders an optional move, `None` when nothing can be closed.
pub struct Advice<'a>(pub &'a Option<Move>);

impl fmt::Display for Advice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(m) => fmt::Display::fmt(m, f),
            None => f.pad("None"),
        }
    }
}

impl Solver {
    /// The closing choice for `roll` that leaves the best win probability.
    /// Ties keep the first subset in enumeration order. Looking up each
    /// candidate memoizes it as a side effect.
    pub fn optimal_move(&self, state: State, roll: u8) -> Option<Move> {
        if !dice::is_total(roll) {
            return None;
        }
        let mut best: Option<(f64, Vec<u8>)> = None;
        for subset in possible_predecessor_subsets(state) {
            if sum_of_subset(&subset) != roll {
                continue;
            }
            let p = self.win_probability(predecessor_configuration(state, &subset));
            if best.as_ref().map_or(true, |(q, _)| p > *q) {
                best = Some((p, subset));
            }
        }
        best.map(|(_, subset)| Move(subset.into_iter().map(|i| i + 1).collect()))
    }

    /// optimal moves for every roll, 2 through 12
    pub fn advice(&self, state: State) -> Vec<Option<Move>> {
        DICE_TOTALS.map(|roll| self.optimal_move(state, roll)).collect()
    }
}
