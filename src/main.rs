use clap::Parser;

use twelvehatch::config::Config;
use twelvehatch::report::write_report_file;
use twelvehatch::{Result, Solver};

fn main() -> Result<()> {
    let config = Config::parse();
    twelvehatch::log(config.log_level, config.log_dir.as_deref())?;
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global()?;

    let solver = match &config.snapshot {
        Some(path) if path.exists() => Solver::load(path)?,
        _ => {
            let solver = Solver::new();
            if config.sequential {
                solver.solve();
            } else {
                solver.solve_parallel();
            }
            if let Some(path) = &config.snapshot {
                solver.save(path)?;
            }
            solver
        }
    };

    // a failed report leaves the table intact, so still print the headline number
    if let Err(e) = write_report_file(&solver, &config.output) {
        log::error!("{:<32}{}", "report failed", e);
    }
    println!(
        "Win chance for the starting state: {}",
        solver.win_probability(twelvehatch::State::ALL_OPEN)
    );
    Ok(())
}
