//! Building blocks for hard-particle Monte Carlo.
//!
//! - [`core::moves`]: random translations and rotations, plus uniform move-type selection
//! - [`core::update_order`]: per-sweep particle visitation order (forward or reverse)
//! - [`core::evaluator`]: force, energy and virial of a particle against a catalog of
//!   sphere, cylinder and plane walls, generic over the pair potential
//!
//! Randomness comes from [`core::CounterRng`], keyed by small integer tuples, so every
//! proposal is reproducible and independent of thread scheduling.
//!
//! ```
//! use hardmc::core::{
//!     make_wall_params, propose_trial, BoxDim, CounterRng, Dimensions, LennardJones,
//!     LjParams, MoveSizes, Particle, SphereWall, UpdateOrder, Vec3, WallField, WallPotential,
//! };
//!
//! # fn main() -> hardmc::error::Result<()> {
//! let seed = 42;
//! let dim = Dimensions::Three;
//! let sizes = MoveSizes::new(0.1, 0.2, dim)?;
//! let mut particles: Vec<Particle> = (0..8)
//!     .map(|i| Particle::at(i, Vec3::new(i as f64, 0.0, 0.0), dim))
//!     .collect::<hardmc::error::Result<_>>()?;
//!
//! let mut order = UpdateOrder::new(seed, particles.len() as u32);
//! for sweep in 0..10 {
//!     order.reshuffle(sweep);
//!     for step in 0..order.len() {
//!         let p = &mut particles[order.index_at(step) as usize];
//!         let mut rng = CounterRng::new(p.id, sweep, seed);
//!         propose_trial(p, &sizes, &mut rng);
//!     }
//! }
//!
//! let mut field = WallField::new();
//! field.add_sphere(SphereWall::new(5.0, Vec3::zero(), true)?)?;
//! let params = make_wall_params::<LennardJones>(LjParams::new(1.0, 1.0)?, 2.5 * 2.5, 0.0);
//! let potential = WallPotential::<LennardJones>::new(field, params);
//! let positions: Vec<Vec3> = particles.iter().map(|p| p.position).collect();
//! let forces = potential.compute(&positions, &BoxDim::cube(50.0)?);
//! assert_eq!(forces.len(), particles.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
