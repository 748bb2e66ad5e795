use serde::Deserialize;
use thiserror::Error;

/// Rejected construction parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

/// Solver parameters, fixed for the lifetime of a `FluidSim`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Cells per side.
    pub size: usize,
    /// Density diffusion rate.
    pub diffusion: f32,
    /// Kinematic viscosity.
    pub viscosity: f32,
    pub dt: f32,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            size: 128,
            diffusion: 0.0001,
            viscosity: 0.0001,
            dt: 0.1,
        }
    }
}

impl SolverParams {
    pub fn new(size: usize, diffusion: f32, viscosity: f32, dt: f32) -> Self {
        Self { size, diffusion, viscosity, dt }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.size == 0 {
            return Err(ParamsError::ZeroSize);
        }
        for (name, value) in [
            ("diffusion", self.diffusion),
            ("viscosity", self.viscosity),
            ("dt", self.dt),
        ] {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name, value });
            }
            if value < 0.0 {
                return Err(ParamsError::Negative { name, value });
            }
        }
        Ok(())
    }
}
