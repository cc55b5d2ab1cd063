use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tile number {0} (tiles are numbered 1 through 12)")]
    InvalidTile(u8),
    #[error("invalid configuration {0:#x} (only the low 12 bits may be set)")]
    InvalidState(u16),
    #[error("invalid dice total {0} (two dice total 2 through 12)")]
    InvalidRoll(u8),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("logger: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;
