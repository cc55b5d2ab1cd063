use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::advice::Advice;
use crate::dice::DICE_TOTALS;
use crate::error::Result;
use crate::solver::Solver;
use crate::state::State;

const COLUMN: usize = 15;

pub fn header() -> String {
    let mut columns = vec!["State".to_string(), "Win Chance".to_string()];
    columns.extend(DICE_TOTALS.map(|roll| format!("Roll {}", roll)));
    columns.iter().map(|c| format!("{:<w$}", c, w = COLUMN)).join(" ")
}

pub fn row(solver: &Solver, state: State) -> String {
    let mut line = format!(
        "{:<w$} {:<w$.5}",
        state,
        solver.win_probability(state),
        w = COLUMN
    );
    for advice in solver.advice(state) {
        line.push_str(&format!(" {:<w$}", Advice(&advice), w = COLUMN));
    }
    line
}

/// One row per memoized configuration, in ascending integer order. Returns
/// the number of rows written.
pub fn write_report<W: Write>(solver: &Solver, mut out: W) -> Result<usize> {
    writeln!(out, "{}", header())?;
    let states = solver.memoized().map(|(s, _)| s).collect_vec();
    for &state in &states {
        writeln!(out, "{}", row(solver, state))?;
    }
    out.flush()?;
    Ok(states.len())
}

pub fn write_report_file(solver: &Solver, path: &Path) -> Result<usize> {
    log::info!("{:<32}{:<32}", "writing     report", path.display());
    let rows = write_report(solver, BufWriter::new(File::create(path)?))?;
    log::info!("{:<32}{:<32}", "report rows", rows);
    Ok(rows)
}
