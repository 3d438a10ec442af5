//! Fitness comparison under an optimization direction.
//!
//! One question, answered consistently everywhere: is score `a` strictly
//! better than score `b`? Personal bests, the global best and the universal
//! best all go through the same [`Comparator`], so ties resolve the same way
//! at every level (ties are never an improvement).

use crate::problem::Direction;

/// Ranks two fitness scores under a fixed [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparator {
    direction: Direction,
}

impl Comparator {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `true` when `a` is strictly preferable to `b`.
    #[inline]
    pub fn better(&self, a: f64, b: f64) -> bool {
        match self.direction {
            Direction::Minimize => a < b,
            Direction::Maximize => a > b,
        }
    }
}

/*───────────────────────── tests ─────────────────────────*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimize_prefers_lower() {
        let cmp = Comparator::new(Direction::Minimize);
        assert!(cmp.better(10.0, 20.0));
        assert!(!cmp.better(20.0, 10.0));
    }

    #[test]
    fn maximize_prefers_higher() {
        let cmp = Comparator::new(Direction::Maximize);
        assert!(cmp.better(20.0, 10.0));
        assert!(!cmp.better(10.0, 20.0));
    }

    #[test]
    fn ties_are_not_improvements() {
        for direction in [Direction::Minimize, Direction::Maximize] {
            assert!(!Comparator::new(direction).better(7.5, 7.5));
        }
    }
}
