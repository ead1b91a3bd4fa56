use rand::Rng;

use crate::*;

/// Builds a fresh board from an injected random source.
///
/// Implemented by the game configurations, so the same seed always yields the same layout.
pub trait BoardGenerator {
    type Board;

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Board>;
}
