use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dice;
use crate::error::{Error, Result};
use crate::state::{State, STATE_COUNT, TILES};
use crate::subsets::reachable_states;

/// Win probabilities under optimal play, memoized per configuration.
///
/// Each entry is written at most once and never changes afterwards, so a
/// `Solver` can be shared across threads. The all-closed entry starts at 1.0.
pub struct Solver {
    memo: Box<[OnceCell<f64>]>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    table: Vec<Option<f64>>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        let memo: Box<[OnceCell<f64>]> = (0..STATE_COUNT).map(|_| OnceCell::new()).collect();
        let _ = memo[State::ALL_CLOSED.index()].set(1.0);
        Solver { memo }
    }

    /// Chance of eventually closing every tile from `state`, averaged over
    /// the next roll. Computes and memoizes on first request.
    pub fn win_probability(&self, state: State) -> f64 {
        *self.memo[state.index()].get_or_init(|| {
            dice::distribution()
                .map(|(roll, chance)| chance * self.win_probability_with_remaining(state, roll))
                .sum()
        })
    }

    /// Best win probability when `remaining` pips of the current roll still
    /// have to be covered by closing open tiles of `state`. Zero when no open
    /// tile fits.
    pub fn win_probability_with_remaining(&self, state: State, remaining: u8) -> f64 {
        if remaining == 0 {
            return self.win_probability(state);
        }
        state
            .open_tiles()
            .take_while(|&n| n <= remaining)
            .map(|n| self.win_probability_with_remaining(state.close(n), remaining - n))
            .fold(0.0, f64::max)
    }

    pub fn is_memoized(&self, state: State) -> bool {
        self.memo[state.index()].get().is_some()
    }

    pub fn memoized_probability(&self, state: State) -> Option<f64> {
        self.memo[state.index()].get().copied()
    }

    /// memoized configurations in ascending integer order
    pub fn memoized(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        State::all().filter_map(move |s| self.memoized_probability(s).map(|p| (s, p)))
    }

    pub fn len(&self) -> usize {
        self.memo.iter().filter(|c| c.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// lazy recursive pass from the all-open configuration
    pub fn solve(&self) -> f64 {
        log::info!("{:<32}{:<32}", "solving", "sequential");
        let p = self.win_probability(State::ALL_OPEN);
        log::info!("{:<32}{:<32}", "memoized states", self.len());
        p
    }

    /// Same table as `solve`, filled level by level with rayon. Levels go from
    /// fewest open tiles to most, so every state only reads finished entries.
    pub fn solve_parallel(&self) -> f64 {
        log::info!("{:<32}{:<32}", "solving", "parallel");
        let reachable = reachable_states();
        let mut levels = vec![Vec::new(); TILES as usize + 1];
        for state in reachable.iter().copied() {
            levels[state.count_open() as usize].push(state);
        }
        let progress = ProgressBar::new(reachable.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"),
        );
        for (open, level) in levels.iter().enumerate() {
            log::debug!("{:<32}{:<16}{:<16}", "solving level", open, level.len());
            progress.set_message(format!("{} open", open));
            level.par_iter().for_each(|&state| {
                self.win_probability(state);
                progress.inc(1);
            });
        }
        progress.finish_with_message("done");
        log::info!("{:<32}{:<32}", "memoized states", self.len());
        self.win_probability(State::ALL_OPEN)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        log::info!("{:<32}{:<32}", "saving      snapshot", path.display());
        let table: Vec<Option<f64>> = self.memo.iter().map(|c| c.get().copied()).collect();
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, &Snapshot { table })?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        log::info!("{:<32}{:<32}", "loading     snapshot", path.display());
        let snapshot: Snapshot = bincode::deserialize_from(BufReader::new(File::open(path)?))?;
        Self::from_table(snapshot.table)
    }

    pub(crate) fn from_table(table: Vec<Option<f64>>) -> Result<Self> {
        if table.len() != STATE_COUNT {
            return Err(Error::CorruptSnapshot(format!(
                "expected {} entries, found {}",
                STATE_COUNT,
                table.len()
            )));
        }
        if table[State::ALL_CLOSED.index()] != Some(1.0) {
            return Err(Error::CorruptSnapshot("all-closed entry is not 1.0".to_string()));
        }
        if let Some(bad) = table.iter().flatten().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(Error::CorruptSnapshot(format!("probability {} out of range", bad)));
        }
        let memo: Box<[OnceCell<f64>]> = table
            .into_iter()
            .map(|entry| {
                let cell = OnceCell::new();
                if let Some(p) = entry {
                    let _ = cell.set(p);
                }
                cell
            })
            .collect();
        Ok(Solver { memo })
    }
}
