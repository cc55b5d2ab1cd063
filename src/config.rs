use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Optimal strategy and win chance for twelve-tile shut the box", long_about = None)]
pub struct Config {
    /// report file, one row per reachable configuration
    #[arg(long, default_value = "12HatchOptimal.txt")]
    pub output: PathBuf,
    /// memo table snapshot; loaded when it exists, written after solving otherwise
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    /// worker threads for the parallel pass
    #[arg(long, default_value_t = num_cpus::get())]
    pub threads: usize,
    /// solve with the lazy recursive pass only
    #[arg(long)]
    pub sequential: bool,
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    pub log_level: log::LevelFilter,
    /// directory for a debug-level log file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
