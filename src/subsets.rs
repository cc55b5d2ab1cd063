use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::dice;
use crate::state::{State, TILES};

/// zero-based tile indices (face value is index + 1), lowest first
pub type Subset = Vec<u8>;

/// Every subset of the tiles open in `state` whose face values add up to a
/// possible dice total. Subsets come out in ascending bitmask order over the
/// open tiles, lowest tile as the lowest bit. A state with nothing open has
/// no subsets at all.
pub fn possible_predecessor_subsets(state: State) -> Vec<Subset> {
    let open = (0..TILES).filter(|&i| state.bits() >> i & 1 == 1).collect_vec();
    if open.is_empty() {
        return vec![];
    }
    (0_u32..1 << open.len())
        .map(|mask| {
            open.iter()
                .enumerate()
                .filter(|&(bit, _)| mask >> bit & 1 == 1)
                .map(|(_, &i)| i)
                .collect_vec()
        })
        .filter(|subset| dice::is_total(sum_of_subset(subset)))
        .collect()
}

pub fn sum_of_subset(subset: &[u8]) -> u8 {
    subset.iter().map(|&i| i + 1).sum()
}

/// `state` with every tile in `subset` closed
pub fn predecessor_configuration(state: State, subset: &[u8]) -> State {
    subset.iter().fold(state, |s, &i| s.close(i + 1))
}

/// Every configuration a game starting with all tiles open can pass through.
pub fn reachable_states() -> Vec<State> {
    let mut seen = FxHashSet::default();
    let mut frontier = vec![State::ALL_OPEN];
    seen.insert(State::ALL_OPEN);
    while let Some(state) = frontier.pop() {
        for subset in possible_predecessor_subsets(state) {
            let next = predecessor_configuration(state, &subset);
            if seen.insert(next) {
                frontier.push(next);
            }
        }
    }
    seen.into_iter().sorted().collect()
}
