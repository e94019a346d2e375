//! External-field evaluation of every wall in a [`WallField`] against one particle.

use crate::core::boxdim::BoxDim;
use crate::core::math::Vec3;
use crate::core::pair::PairEvaluator;
use crate::core::walls::WallField;
use rayon::prelude::*;
use std::marker::PhantomData;
use tracing::debug;

/// Wall interaction parameters: the inner pair potential plus cutoff and onset radii.
#[derive(Debug, Clone, PartialEq)]
pub struct WallParams<P> {
    /// Parameters of the inner pair potential.
    pub params: P,
    /// Squared cutoff radius.
    pub rcutsq: f64,
    /// Squared onset radius; separations at or below it do not interact.
    pub ronsq: f64,
}

/// Bundle pair parameters with squared cutoff and onset radii.
pub fn make_wall_params<E: PairEvaluator>(
    params: E::Params,
    rcutsq: f64,
    ronsq: f64,
) -> WallParams<E::Params> {
    WallParams {
        params,
        rcutsq,
        ronsq,
    }
}

/// Net wall contribution on one particle.
///
/// `virial` holds the independent components of the symmetric tensor in the order
/// xx, xy, xz, yy, yz, zz.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WallForce {
    /// Net force on the particle.
    pub force: Vec3,
    /// Net shifted wall energy.
    pub energy: f64,
    /// Virial tensor components.
    pub virial: [f64; 6],
}

/// Evaluates the wall field for a single particle using pair potential `E`.
///
/// Construction is cheap and borrows the shared catalog and parameters; one evaluator is
/// built per particle, so evaluations on different threads never share mutable state.
#[derive(Debug)]
pub struct EvaluatorWalls<'a, E: PairEvaluator> {
    pos: Vec3,
    tag: u32,
    box_dim: &'a BoxDim,
    params: &'a WallParams<E::Params>,
    field: &'a WallField,
    _eval: PhantomData<E>,
}

impl<'a, E: PairEvaluator> EvaluatorWalls<'a, E> {
    /// Evaluator for the particle at `pos` with index `tag`.
    pub fn new(
        pos: Vec3,
        tag: u32,
        box_dim: &'a BoxDim,
        params: &'a WallParams<E::Params>,
        field: &'a WallField,
    ) -> Self {
        Self {
            pos,
            tag,
            box_dim,
            params,
            field,
            _eval: PhantomData,
        }
    }

    /// Name of the wall potential built on `E`, e.g. `walls_lj`.
    pub fn name() -> String {
        format!("walls_{}", E::NAME)
    }

    /// Index of the particle being evaluated.
    #[inline]
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Sum force, energy and virial over all active walls.
    pub fn eval_force_energy_and_virial(&self) -> WallForce {
        let mut out = WallForce::default();
        for wall in self.field.spheres() {
            // the pair separation runs from the surface image to the particle
            self.accumulate(-wall.offset(self.pos), &mut out);
        }
        for wall in self.field.cylinders() {
            self.accumulate(wall.offset(self.pos, self.box_dim), &mut out);
        }
        for wall in self.field.planes() {
            self.accumulate(wall.offset(self.pos, self.box_dim), &mut out);
        }
        out
    }

    #[inline]
    fn accumulate(&self, dx: Vec3, out: &mut WallForce) {
        if dx.is_zero() {
            return;
        }
        let rsq = dx.norm_sq();
        if rsq <= self.params.ronsq {
            return;
        }
        let eval = E::new(rsq, self.params.rcutsq, &self.params.params);
        let Some(pair) = eval.eval_force_and_energy(true) else {
            return;
        };
        let f = pair.force_divr;
        out.force += dx * f;
        out.energy += pair.energy;
        out.virial[0] += f * dx.x * dx.x;
        out.virial[1] += f * dx.x * dx.y;
        out.virial[2] += f * dx.x * dx.z;
        out.virial[3] += f * dx.y * dx.y;
        out.virial[4] += f * dx.y * dx.z;
        out.virial[5] += f * dx.z * dx.z;
    }
}

/// A wall external potential: the catalog and parameters a driver owns.
#[derive(Debug, Clone)]
pub struct WallPotential<E: PairEvaluator> {
    field: WallField,
    params: WallParams<E::Params>,
}

impl<E: PairEvaluator> WallPotential<E> {
    /// Potential over `field` with shared interaction `params`.
    pub fn new(field: WallField, params: WallParams<E::Params>) -> Self {
        Self { field, params }
    }

    /// The wall catalog.
    pub fn field(&self) -> &WallField {
        &self.field
    }

    /// The interaction parameters.
    pub fn params(&self) -> &WallParams<E::Params> {
        &self.params
    }

    /// Evaluate the particle at `pos` with index `tag`.
    pub fn evaluate(&self, pos: Vec3, tag: u32, box_dim: &BoxDim) -> WallForce {
        EvaluatorWalls::<E>::new(pos, tag, box_dim, &self.params, &self.field)
            .eval_force_energy_and_virial()
    }

    /// Evaluate every particle in parallel; element `i` belongs to `positions[i]`.
    pub fn compute(&self, positions: &[Vec3], box_dim: &BoxDim) -> Vec<WallForce> {
        let out: Vec<WallForce> = positions
            .par_iter()
            .enumerate()
            .map(|(i, &pos)| self.evaluate(pos, i as u32, box_dim))
            .collect();
        let name = EvaluatorWalls::<E>::name();
        debug!(
            potential = %name,
            particles = positions.len(),
            energy = total_energy(&out),
            "wall forces computed"
        );
        out
    }
}

/// Sum of per-particle wall energies.
pub fn total_energy(forces: &[WallForce]) -> f64 {
    forces.iter().map(|f| f.energy).sum()
}
