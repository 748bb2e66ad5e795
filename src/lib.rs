//! Stable Fluids solver on a square grid with solid obstacles.
//!
//! [`FluidSim`] owns density and velocity fields and advances them with
//! diffusion, semi-Lagrangian advection and pressure projection. Rendering
//! and input handling live outside this crate and talk to the solver only
//! through its query/mutation methods.

pub mod config;
pub mod scene;
pub mod solver;
pub mod state;

pub use solver::{FieldType, FluidSim, ParamsError, SolverParams};
