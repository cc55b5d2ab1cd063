use std::ops::RangeInclusive;

use itertools::iproduct;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};

pub const SIDES: u8 = 6;
pub const MIN_TOTAL: u8 = 2;
pub const MAX_TOTAL: u8 = 2 * SIDES;
pub const DICE_TOTALS: RangeInclusive<u8> = MIN_TOTAL..=MAX_TOTAL;

// chance of each total of two fair dice, indexed by the total itself (slots 0 and 1 stay empty)
static TOTAL_CHANCES: Lazy<[f64; MAX_TOTAL as usize + 1]> = Lazy::new(|| {
    let mut counts = [0_u32; MAX_TOTAL as usize + 1];
    for (a, b) in iproduct!(1..=SIDES, 1..=SIDES) {
        counts[(a + b) as usize] += 1;
    }
    let outcomes = (SIDES as u32).pow(2) as f64;
    counts.map(|c| c as f64 / outcomes)
});

pub fn is_total(roll: u8) -> bool {
    DICE_TOTALS.contains(&roll)
}

/// probability that two dice total `roll`
pub fn probability(roll: u8) -> Result<f64> {
    if is_total(roll) {
        Ok(TOTAL_CHANCES[roll as usize])
    } else {
        Err(Error::InvalidRoll(roll))
    }
}

/// (total, probability) for every total two dice can show
pub fn distribution() -> impl Iterator<Item = (u8, f64)> {
    DICE_TOTALS.map(|roll| (roll, TOTAL_CHANCES[roll as usize]))
}
