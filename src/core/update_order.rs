use crate::core::rng::CounterRng;
use std::ops::Index;
use tracing::trace;

/// Third key of every reshuffle stream.
const SHUFFLE_STREAM: u32 = 0xfa87_0af6;

/// Direction in which a sweep visits particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    /// Visit 0, 1, ..., N-1.
    Ascending,
    /// Visit N-1, ..., 1, 0.
    Descending,
}

/// Order in which particles are visited during one Monte Carlo sweep.
///
/// Each sweep visits the particles either in ascending or in descending index order,
/// chosen with equal probability, so forward and time-reversed sweeps are equally likely.
#[derive(Debug, Clone)]
pub struct UpdateOrder {
    seed: u32,
    order: Vec<u32>,
    direction: SweepDirection,
}

impl UpdateOrder {
    /// New order over `n` particles, initially the identity permutation.
    pub fn new(seed: u32, n: u32) -> Self {
        Self {
            seed,
            order: (0..n).collect(),
            direction: SweepDirection::Ascending,
        }
    }

    /// Change the particle count; the order resets to the identity permutation.
    pub fn resize(&mut self, n: u32) {
        self.order = (0..n).collect();
        self.direction = SweepDirection::Ascending;
    }

    /// Recompute the order for sweep `sweep`.
    pub fn reshuffle(&mut self, sweep: u32) {
        self.reshuffle_with(sweep, 0);
    }

    /// Recompute the order for sweep `sweep` with an extra stream selector, so several
    /// independent orders can be drawn for the same sweep.
    ///
    /// The result depends only on `(seed, sweep, select)`.
    pub fn reshuffle_with(&mut self, sweep: u32, select: u32) {
        let mut rng = CounterRng::new(sweep, self.seed.wrapping_add(select), SHUFFLE_STREAM);
        let n = self.order.len() as u32;
        self.direction = if rng.uniform01() < 0.5 {
            SweepDirection::Ascending
        } else {
            SweepDirection::Descending
        };
        self.order = match self.direction {
            SweepDirection::Ascending => (0..n).collect(),
            SweepDirection::Descending => (0..n).rev().collect(),
        };
        trace!(sweep, select, direction = ?self.direction, "update order reshuffled");
    }

    /// Particle index visited at step `step` of the current sweep.
    #[inline]
    pub fn index_at(&self, step: usize) -> u32 {
        self.order[step]
    }

    /// Number of particles in a sweep.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when there are no particles to visit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Seed fixed at construction.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Direction chosen by the last reshuffle.
    #[inline]
    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Particle indices in visiting order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.order
    }

    /// Iterate particle indices in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }
}

impl Index<usize> for UpdateOrder {
    type Output = u32;

    fn index(&self, step: usize) -> &u32 {
        &self.order[step]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(order: &UpdateOrder) -> bool {
        let mut seen = vec![false; order.len()];
        for i in order.iter() {
            let i = i as usize;
            if i >= seen.len() || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        seen.into_iter().all(|s| s)
    }

    #[test]
    fn starts_as_identity() {
        let o = UpdateOrder::new(10, 5);
        assert_eq!(o.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(o.direction(), SweepDirection::Ascending);
    }

    #[test]
    fn reshuffle_is_a_permutation() {
        let mut o = UpdateOrder::new(3, 17);
        for sweep in 0..200 {
            o.reshuffle(sweep);
            assert!(is_permutation(&o));
            match o.direction() {
                SweepDirection::Ascending => assert_eq!(o[0], 0),
                SweepDirection::Descending => assert_eq!(o[0], 16),
            }
        }
    }

    #[test]
    fn select_changes_stream() {
        let mut a = UpdateOrder::new(3, 4);
        let mut b = UpdateOrder::new(3, 4);
        let mut differ = false;
        for sweep in 0..64 {
            a.reshuffle_with(sweep, 0);
            b.reshuffle_with(sweep, 1);
            differ |= a.direction() != b.direction();
        }
        assert!(differ);
    }

    #[test]
    fn resize_resets_to_identity() {
        let mut o = UpdateOrder::new(1, 3);
        o.resize(6);
        assert_eq!(o.len(), 6);
        assert_eq!(o.index_at(5), 5);
    }

    #[test]
    fn empty_order_reshuffles() {
        let mut o = UpdateOrder::new(1, 0);
        o.reshuffle(7);
        assert!(o.is_empty());
    }
}
