//! Pair potentials plugged into the wall evaluator.
//!
//! A [`PairEvaluator`] is built for one separation and evaluated once, which keeps the
//! per-wall work monomorphized and free of dynamic dispatch.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Force and energy of one pair evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairForce {
    /// Magnitude of the force divided by the separation, -(dV/dr)/r.
    pub force_divr: f64,
    /// Pair energy.
    pub energy: f64,
}

/// A short-ranged pair potential evaluated at a single squared separation.
pub trait PairEvaluator: Sized {
    /// Per-type-pair parameters.
    type Params: Clone + std::fmt::Debug + Send + Sync;

    /// Short lowercase name, used to name derived potentials.
    const NAME: &'static str;

    /// Prepare an evaluation at squared distance `rsq` with squared cutoff `rcutsq`.
    fn new(rsq: f64, rcutsq: f64, params: &Self::Params) -> Self;

    /// Evaluate force and energy.
    ///
    /// Returns `None` when the pair does not interact (beyond the cutoff or switched off
    /// by its parameters). With `energy_shift` the energy is shifted to zero at the cutoff.
    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce>;
}

/// Lennard-Jones parameters in the expanded form `V = lj1/r^12 - lj2/r^6`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LjParams {
    pub lj1: f64,
    pub lj2: f64,
}

impl LjParams {
    /// `lj1 = 4 eps sigma^12`, `lj2 = 4 eps sigma^6`.
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self> {
        if !epsilon.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidParam(
                "lj epsilon must be finite and sigma finite and > 0".into(),
            ));
        }
        let s6 = sigma.powi(6);
        Ok(Self {
            lj1: 4.0 * epsilon * s6 * s6,
            lj2: 4.0 * epsilon * s6,
        })
    }
}

/// 12-6 Lennard-Jones.
#[derive(Debug, Clone, Copy)]
pub struct LennardJones {
    rsq: f64,
    rcutsq: f64,
    lj1: f64,
    lj2: f64,
}

impl PairEvaluator for LennardJones {
    type Params = LjParams;
    const NAME: &'static str = "lj";

    #[inline]
    fn new(rsq: f64, rcutsq: f64, params: &LjParams) -> Self {
        Self {
            rsq,
            rcutsq,
            lj1: params.lj1,
            lj2: params.lj2,
        }
    }

    #[inline]
    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        if self.rsq >= self.rcutsq || self.lj1 == 0.0 {
            return None;
        }
        let r2inv = 1.0 / self.rsq;
        let r6inv = r2inv * r2inv * r2inv;
        let force_divr = r2inv * r6inv * (12.0 * self.lj1 * r6inv - 6.0 * self.lj2);
        let mut energy = r6inv * (self.lj1 * r6inv - self.lj2);
        if energy_shift {
            let rcut2inv = 1.0 / self.rcutsq;
            let rcut6inv = rcut2inv * rcut2inv * rcut2inv;
            energy -= rcut6inv * (self.lj1 * rcut6inv - self.lj2);
        }
        Some(PairForce { force_divr, energy })
    }
}

/// Gaussian parameters: `V = epsilon * exp(-r^2 / (2 sigma^2))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussParams {
    pub epsilon: f64,
    pub sigma: f64,
}

/// Gaussian soft core.
#[derive(Debug, Clone, Copy)]
pub struct Gaussian {
    rsq: f64,
    rcutsq: f64,
    epsilon: f64,
    sigma: f64,
}

impl PairEvaluator for Gaussian {
    type Params = GaussParams;
    const NAME: &'static str = "gauss";

    #[inline]
    fn new(rsq: f64, rcutsq: f64, params: &GaussParams) -> Self {
        Self {
            rsq,
            rcutsq,
            epsilon: params.epsilon,
            sigma: params.sigma,
        }
    }

    #[inline]
    fn eval_force_and_energy(&self, energy_shift: bool) -> Option<PairForce> {
        if self.rsq >= self.rcutsq || self.sigma == 0.0 {
            return None;
        }
        let sigma_sq = self.sigma * self.sigma;
        let r_over_sigma_sq = self.rsq / sigma_sq;
        let exp_val = (-0.5 * r_over_sigma_sq).exp();
        let force_divr = self.epsilon / sigma_sq * exp_val;
        let mut energy = self.epsilon * exp_val;
        if energy_shift {
            energy -= self.epsilon * (-0.5 * self.rcutsq / sigma_sq).exp();
        }
        Some(PairForce { force_divr, energy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lj_minimum_has_zero_force() -> Result<()> {
        let p = LjParams::new(1.0, 1.0)?;
        let rmin_sq = 2f64.powf(1.0 / 3.0);
        let out = LennardJones::new(rmin_sq, 9.0, &p)
            .eval_force_and_energy(false)
            .expect("inside cutoff");
        assert_relative_eq!(out.force_divr, 0.0, epsilon = 1e-10);
        assert_relative_eq!(out.energy, -1.0, epsilon = 1e-10);
        Ok(())
    }

    #[test]
    fn lj_shift_zeroes_energy_at_cutoff() -> Result<()> {
        let p = LjParams::new(1.5, 1.0)?;
        let rcutsq = 2.5 * 2.5;
        let just_inside = rcutsq * (1.0 - 1e-12);
        let out = LennardJones::new(just_inside, rcutsq, &p)
            .eval_force_and_energy(true)
            .expect("inside cutoff");
        assert!(out.energy.abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn lj_beyond_cutoff_not_evaluated() -> Result<()> {
        let p = LjParams::new(1.0, 1.0)?;
        assert!(LennardJones::new(9.0, 9.0, &p)
            .eval_force_and_energy(true)
            .is_none());
        let off = LjParams { lj1: 0.0, lj2: 0.0 };
        assert!(LennardJones::new(1.0, 9.0, &off)
            .eval_force_and_energy(true)
            .is_none());
        Ok(())
    }

    #[test]
    fn lj_rejects_bad_sigma() {
        assert!(LjParams::new(1.0, 0.0).is_err());
    }

    #[test]
    fn gauss_values() {
        let p = GaussParams {
            epsilon: 2.0,
            sigma: 0.5,
        };
        let out = Gaussian::new(0.25, 4.0, &p)
            .eval_force_and_energy(false)
            .expect("inside cutoff");
        let e = (-0.5f64).exp();
        assert_relative_eq!(out.energy, 2.0 * e, epsilon = 1e-12);
        assert_relative_eq!(out.force_divr, 8.0 * e, epsilon = 1e-12);
    }
}
