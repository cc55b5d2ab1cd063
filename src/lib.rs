//! Optimal play for twelve-tile shut the box: roll two dice, close open tiles
//! whose values add up to the total, win once every tile is closed.
//!
//! [`Solver`] memoizes the win probability of every configuration reachable
//! from the all-open start and answers the best move for any roll.

pub mod advice;
pub mod config;
pub mod dice;
pub mod error;
pub mod report;
pub mod solver;
pub mod state;
pub mod subsets;


pub use advice::Move;
pub use error::{Error, Result};
pub use solver::Solver;
pub use state::State;

/// Terminal logger at `level`, plus a debug log file when `dir` is given.
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file));
    }
    simplelog::CombinedLogger::init(loggers).map_err(|e| Error::Logger(e.to_string()))
}
