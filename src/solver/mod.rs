mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use boundary::FieldType;
pub use self::core::{DIFFUSE_ITER, PROJECT_ITER};
pub use params::{ParamsError, SolverParams};

use crate::state::{idx, ObstacleMask, SimState};
use self::core::{advect, diffuse, project};

/// Stable Fluids solver on a square grid with a static obstacle mask.
///
/// Coordinates passed to any method are clamped into `[0, size-1]`, so
/// out-of-range input addresses the nearest edge cell instead of failing.
pub struct FluidSim {
    params: SolverParams,
    state: SimState,
}

impl FluidSim {
    pub fn new(params: SolverParams) -> Result<Self, ParamsError> {
        params.validate()?;
        log::debug!(
            "fluid solver {n}x{n}: diffusion={} viscosity={} dt={}",
            params.diffusion,
            params.viscosity,
            params.dt,
            n = params.size,
        );
        let state = SimState::new(params.size);
        Ok(Self { params, state })
    }

    pub fn with_size(size: usize, diffusion: f32, viscosity: f32, dt: f32) -> Result<Self, ParamsError> {
        Self::new(SolverParams::new(size, diffusion, viscosity, dt))
    }

    /// Advance the simulation by one `dt`.
    pub fn step(&mut self) {
        let n = self.state.n;
        let dt = self.params.dt;
        let visc = self.params.viscosity;
        let diff = self.params.diffusion;
        let SimState { density, vx, vy, obstacles, .. } = &mut self.state;
        let mask: &ObstacleMask = obstacles;

        // Diffuse velocity
        {
            let (cur, scratch) = vx.split_mut();
            diffuse(FieldType::Vx, scratch, cur, visc, dt, mask, n);
        }
        vx.swap();
        {
            let (cur, scratch) = vy.split_mut();
            diffuse(FieldType::Vy, scratch, cur, visc, dt, mask, n);
        }
        vy.swap();

        // Project diffused velocity; scratches serve as pressure / divergence
        {
            let (u, p) = vx.split_mut();
            let (v, div) = vy.split_mut();
            project(u, v, p, div, mask, n);
        }

        // Advect velocity through itself
        {
            let (u, u_next) = vx.split_mut();
            let (v, v_next) = vy.split_mut();
            advect(FieldType::Vx, u_next, u, u, v, dt, mask, n);
            advect(FieldType::Vy, v_next, v, u, v, dt, mask, n);
        }
        vx.swap();
        vy.swap();

        // Advection reintroduces divergence
        {
            let (u, p) = vx.split_mut();
            let (v, div) = vy.split_mut();
            project(u, v, p, div, mask, n);
        }

        // Diffuse + advect density
        {
            let (cur, scratch) = density.split_mut();
            diffuse(FieldType::Scalar, scratch, cur, diff, dt, mask, n);
        }
        density.swap();
        {
            let (cur, scratch) = density.split_mut();
            advect(FieldType::Scalar, scratch, cur, vx.current(), vy.current(), dt, mask, n);
        }
        density.swap();
    }

    /// Add density at a cell. Ignored on obstacle cells.
    pub fn add_density(&mut self, x: i32, y: i32, amount: f32) {
        if self.is_obstacle(x, y) {
            return;
        }
        let i = idx(x, y, self.state.n);
        self.state.density.current_mut()[i] += amount;
    }

    /// Add velocity at a cell. Ignored on obstacle cells.
    pub fn add_velocity(&mut self, x: i32, y: i32, dx: f32, dy: f32) {
        if self.is_obstacle(x, y) {
            return;
        }
        let i = idx(x, y, self.state.n);
        self.state.vx.current_mut()[i] += dx;
        self.state.vy.current_mut()[i] += dy;
    }

    pub fn density(&self, x: i32, y: i32) -> f32 {
        self.state.density.current()[idx(x, y, self.state.n)]
    }

    pub fn velocity(&self, x: i32, y: i32) -> (f32, f32) {
        let i = idx(x, y, self.state.n);
        (self.state.vx.current()[i], self.state.vy.current()[i])
    }

    pub fn set_obstacle(&mut self, x: i32, y: i32, solid: bool) {
        self.state.obstacles.set(x, y, solid);
    }

    pub fn clear_obstacles(&mut self) {
        self.state.obstacles.clear();
    }

    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.state.obstacles.get(x, y)
    }

    pub fn size(&self) -> usize {
        self.params.size
    }

    pub fn diffusion(&self) -> f32 {
        self.params.diffusion
    }

    pub fn viscosity(&self) -> f32 {
        self.params.viscosity
    }

    pub fn dt(&self) -> f32 {
        self.params.dt
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Current density, row-major (`x + y*size`).
    pub fn density_field(&self) -> &[f32] {
        self.state.density.current()
    }

    /// Current `(vx, vy)`, row-major.
    pub fn velocity_fields(&self) -> (&[f32], &[f32]) {
        (self.state.vx.current(), self.state.vy.current())
    }

    pub fn obstacles(&self) -> &ObstacleMask {
        &self.state.obstacles
    }
}
