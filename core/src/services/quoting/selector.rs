//! Injectable random-position strategy for car selection.
//!
//! Selection must be deterministic under test, so the randomness source is
//! a trait injected into the service rather than a direct call to a global
//! generator.

use rand::Rng;

/// Strategy for picking an index into a non-empty sequence.
pub trait IndexSelector: Send + Sync {
    /// Returns an index in `[0, len)`.
    ///
    /// Callers must guarantee `len > 0`; implementations may panic on an
    /// empty range.
    fn random_position(&self, len: usize) -> usize;
}

/// Uniformly random selector backed by the thread-local generator.
///
/// Stateless, so a single instance is safe to share across concurrent
/// callers.
#[derive(Debug, Default)]
pub struct RandomIndexSelector;

impl IndexSelector for RandomIndexSelector {
    fn random_position(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic selector that always returns the same position.
///
/// Intended for tests that need to force a specific pick. The configured
/// index must be valid for every sequence it is used against.
#[derive(Debug)]
pub struct FixedIndexSelector(pub usize);

impl IndexSelector for FixedIndexSelector {
    fn random_position(&self, _len: usize) -> usize {
        self.0
    }
}
