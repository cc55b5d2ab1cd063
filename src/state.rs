use std::fmt;

use crate::error::{Error, Result};

pub const TILES: u8 = 12;
pub const STATE_COUNT: usize = 1 << TILES;

/// Which tiles are still open. Bit (n-1) set means tile n is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(u16);

impl State {
    pub const ALL_CLOSED: State = State(0);
    pub const ALL_OPEN: State = State((1 << TILES) - 1);

    pub fn new(bits: u16) -> Result<Self> {
        if bits > Self::ALL_OPEN.0 {
            return Err(Error::InvalidState(bits));
        }
        Ok(State(bits))
    }

    /// every configuration, in ascending integer order
    pub fn all() -> impl Iterator<Item = State> {
        (0..=Self::ALL_OPEN.0).map(State)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_won(self) -> bool {
        self.0 == 0
    }

    pub fn count_open(self) -> u32 {
        self.0.count_ones()
    }

    /// returns this configuration with tile n closed
    pub fn flip(self, n: u8) -> Result<Self> {
        Ok(self.close(check_tile(n)?))
    }

    pub fn is_open(self, n: u8) -> Result<bool> {
        Ok(self.open(check_tile(n)?))
    }

    /// face values of the open tiles, lowest first
    pub fn open_tiles(self) -> impl Iterator<Item = u8> {
        (1..=TILES).filter(move |&n| self.open(n))
    }

    // n is already known to be in 1..=12
    pub(crate) fn close(self, n: u8) -> Self {
        State(self.0 & !(1 << (n - 1)))
    }

    pub(crate) fn open(self, n: u8) -> bool {
        self.0 >> (n - 1) & 1 == 1
    }

    /// twelve characters, tile 1 first, '1' open and '0' closed
    pub fn display_string(self) -> String {
        (1..=TILES).map(|n| if self.open(n) { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.display_string())
    }
}

impl TryFrom<u16> for State {
    type Error = Error;
    fn try_from(bits: u16) -> Result<Self> {
        State::new(bits)
    }
}

impl From<State> for u16 {
    fn from(state: State) -> u16 {
        state.0
    }
}

fn check_tile(n: u8) -> Result<u8> {
    if (1..=TILES).contains(&n) {
        Ok(n)
    } else {
        Err(Error::InvalidTile(n))
    }
}
