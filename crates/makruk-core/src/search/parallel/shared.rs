//! Shared state for parallel search
//!
//! The only mutable item shared between root workers: the best score
//! any worker has proven so far.

use std::sync::atomic::{AtomicI32, Ordering};

use crate::search::SCORE_INFINITE;
use crate::types::Color;

/// Lock-free best-score word with an owner direction.
#[derive(Debug)]
pub struct SharedBound {
    score: AtomicI32,
    maximizing: bool,
}

impl SharedBound {
    /// Start at the worst score for the owner.
    pub fn new(maximizing: bool) -> Self {
        let init = if maximizing { -SCORE_INFINITE } else { SCORE_INFINITE };
        SharedBound { score: AtomicI32::new(init), maximizing }
    }

    /// Bound owned by the side to move at the root; White maximizes.
    pub fn for_side(side: Color) -> Self {
        Self::new(side == Color::White)
    }

    #[inline]
    pub fn get(&self) -> i32 {
        self.score.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_maximizing(&self) -> bool {
        self.maximizing
    }

    /// Publish `score` if it is strictly better for the owner.
    /// Returns whether the stored value changed.
    pub fn improve(&self, score: i32) -> bool {
        if self.maximizing {
            self.score.fetch_max(score, Ordering::AcqRel) < score
        } else {
            self.score.fetch_min(score, Ordering::AcqRel) > score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_improve_is_strict() {
        let bound = SharedBound::new(true);
        assert_eq!(bound.get(), -SCORE_INFINITE);
        assert!(bound.improve(10));
        assert!(!bound.improve(10));
        assert!(!bound.improve(5));
        assert_eq!(bound.get(), 10);

        let bound = SharedBound::for_side(Color::Black);
        assert!(!bound.is_maximizing());
        assert!(bound.improve(-3));
        assert!(!bound.improve(7));
        assert_eq!(bound.get(), -3);
    }

    #[test]
    fn test_concurrent_writers_keep_best() {
        let bound = Arc::new(SharedBound::new(true));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let bound = Arc::clone(&bound);
                thread::spawn(move || {
                    for i in 0..1000 {
                        bound.improve(t * 1000 + i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(bound.get(), 7999);
    }
}
