use crate::state::{idx_inner, ObstacleMask};
use super::boundary::{FieldType, set_bnd};

/// Relaxation passes for implicit diffusion.
pub const DIFFUSE_ITER: usize = 20;
/// Relaxation passes for the pressure Poisson solve.
pub const PROJECT_ITER: usize = 20;

/// Gauss-Seidel iterative linear solver.
/// Solves: x[i,j] = (x0[i,j] + a * (neighbors)) / c
/// Obstacle cells are skipped and stay at whatever `set_bnd` left them (zero).
pub fn lin_solve(field_type: FieldType, x: &mut [f32], x0: &[f32], a: f32, c: f32, iter: usize, mask: &ObstacleMask, n: usize) {
    let c_inv = 1.0 / c;
    for _ in 0..iter {
        for j in 1..n.saturating_sub(1) {
            for i in 1..(n - 1) {
                let ii = idx_inner(i, j, n);
                if mask.at(ii) {
                    continue;
                }
                let neighbors = x[idx_inner(i - 1, j, n)]
                    + x[idx_inner(i + 1, j, n)]
                    + x[idx_inner(i, j - 1, n)]
                    + x[idx_inner(i, j + 1, n)];
                x[ii] = (x0[ii] + a * neighbors) * c_inv;
            }
        }
        set_bnd(field_type, x, mask, n);
    }
}

/// Diffusion step: spreads the field over time.
/// a = dt * diff * (N-2)^2, c = 1 + 4a
pub fn diffuse(field_type: FieldType, x: &mut [f32], x0: &[f32], diff: f32, dt: f32, mask: &ObstacleMask, n: usize) {
    let inner = n.saturating_sub(2) as f32;
    let a = dt * diff * inner * inner;
    let c = 1.0 + 4.0 * a;
    // Start the relaxation from the source so stale scratch data never leaks in.
    x.copy_from_slice(x0);
    // Cells marked solid since the last step may still hold values.
    for (v, &solid) in x.iter_mut().zip(mask.cells()) {
        if solid {
            *v = 0.0;
        }
    }
    lin_solve(field_type, x, x0, a, c, DIFFUSE_ITER, mask, n);
}

/// Semi-Lagrangian advection: traces each cell backwards through the velocity
/// field and bilinearly resamples `d0`. A stencil touching a solid cell yields 0.
pub fn advect(field_type: FieldType, d: &mut [f32], d0: &[f32], vx: &[f32], vy: &[f32], dt: f32, mask: &ObstacleMask, n: usize) {
    let dt0 = dt * n as f32;
    let hi = n as f32 - 1.5;

    for j in 1..n.saturating_sub(1) {
        for i in 1..(n - 1) {
            let ii = idx_inner(i, j, n);
            if mask.at(ii) {
                d[ii] = 0.0;
                continue;
            }

            // Trace backwards, keeping the 2x2 stencil inside the interior.
            let x = (i as f32 - dt0 * vx[ii]).clamp(0.5, hi);
            let y = (j as f32 - dt0 * vy[ii]).clamp(0.5, hi);

            let i0 = x as usize;
            let i1 = i0 + 1;
            let j0 = y as usize;
            let j1 = j0 + 1;

            let s1 = x - i0 as f32;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f32;
            let t0 = 1.0 - t1;

            let c00 = idx_inner(i0, j0, n);
            let c01 = idx_inner(i0, j1, n);
            let c10 = idx_inner(i1, j0, n);
            let c11 = idx_inner(i1, j1, n);

            d[ii] = if mask.at(c00) || mask.at(c01) || mask.at(c10) || mask.at(c11) {
                0.0
            } else {
                s0 * (t0 * d0[c00] + t1 * d0[c01]) + s1 * (t0 * d0[c10] + t1 * d0[c11])
            };
        }
    }
    set_bnd(field_type, d, mask, n);
}

/// Pressure projection: enforces incompressibility (divergence-free velocity field).
/// `p` and `div` are working storage; their previous contents are ignored.
pub fn project(vx: &mut [f32], vy: &mut [f32], p: &mut [f32], div: &mut [f32], mask: &ObstacleMask, n: usize) {
    let n_f = n as f32;

    // Calculate divergence
    for j in 1..n.saturating_sub(1) {
        for i in 1..(n - 1) {
            let ii = idx_inner(i, j, n);
            p[ii] = 0.0;
            if mask.at(ii) {
                div[ii] = 0.0;
                continue;
            }
            div[ii] = -0.5
                * (vx[idx_inner(i + 1, j, n)] - vx[idx_inner(i - 1, j, n)]
                    + vy[idx_inner(i, j + 1, n)] - vy[idx_inner(i, j - 1, n)])
                / n_f;
        }
    }
    set_bnd(FieldType::Scalar, div, mask, n);
    set_bnd(FieldType::Scalar, p, mask, n);

    // Solve for pressure
    lin_solve(FieldType::Scalar, p, div, 1.0, 4.0, PROJECT_ITER, mask, n);

    // Subtract pressure gradient from velocity
    for j in 1..n.saturating_sub(1) {
        for i in 1..(n - 1) {
            let ii = idx_inner(i, j, n);
            if mask.at(ii) {
                continue;
            }
            vx[ii] -= 0.5 * n_f * (p[idx_inner(i + 1, j, n)] - p[idx_inner(i - 1, j, n)]);
            vy[ii] -= 0.5 * n_f * (p[idx_inner(i, j + 1, n)] - p[idx_inner(i, j - 1, n)]);
        }
    }
    set_bnd(FieldType::Vx, vx, mask, n);
    set_bnd(FieldType::Vy, vy, mask, n);
}
