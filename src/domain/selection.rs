//! Random quote selection

use crate::domain::{CategoryFilter, Quote};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one quote uniformly at random from the active subset.
///
/// Returns `None` when no quote matches the filter.
pub fn pick_random<'a, R: Rng + ?Sized>(
    quotes: &'a [Quote],
    filter: &CategoryFilter,
    rng: &mut R,
) -> Option<&'a Quote> {
    filter.apply(quotes).choose(rng).copied()
}
