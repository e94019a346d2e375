//! Core data structures and algorithms: trial moves, sweep order and wall potentials.

pub mod boxdim;
pub mod evaluator;
pub mod math;
pub mod moves;
pub mod pair;
pub mod particle;
pub mod rng;
pub mod update_order;
pub mod walls;

pub use boxdim::BoxDim;
pub use evaluator::{
    make_wall_params, total_energy, EvaluatorWalls, WallForce, WallParams, WallPotential,
};
pub use math::{Quat, Vec3};
pub use moves::{
    move_rotate, move_translate, propose_trial, rand_select, Dimensions, MoveKind, MoveSizes,
};
pub use pair::{GaussParams, Gaussian, LennardJones, LjParams, PairEvaluator, PairForce};
pub use particle::Particle;
pub use rng::CounterRng;
pub use update_order::{SweepDirection, UpdateOrder};
pub use walls::{
    CylinderWall, PlaneWall, SphereWall, WallField, MAX_CYLINDER_WALLS, MAX_PLANE_WALLS,
    MAX_SPHERE_WALLS,
};
