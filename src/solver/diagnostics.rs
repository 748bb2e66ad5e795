use crate::state::{idx_inner, ObstacleMask};

/// Central-difference divergence `0.5 * (du/dx + dv/dy)` in cell units.
/// Only interior fluid cells are measured; everything else is 0.
pub fn divergence(vx: &[f32], vy: &[f32], mask: &ObstacleMask, n: usize) -> Vec<f32> {
    let mut div = vec![0.0; n * n];
    for j in 1..n.saturating_sub(1) {
        for i in 1..(n - 1) {
            let ii = idx_inner(i, j, n);
            if mask.at(ii) {
                continue;
            }
            div[ii] = 0.5
                * (vx[idx_inner(i + 1, j, n)] - vx[idx_inner(i - 1, j, n)]
                    + vy[idx_inner(i, j + 1, n)] - vy[idx_inner(i, j - 1, n)]);
        }
    }
    div
}

/// Mean |divergence| over interior fluid cells.
pub fn mean_abs_divergence(vx: &[f32], vy: &[f32], mask: &ObstacleMask, n: usize) -> f64 {
    let div = divergence(vx, vy, mask, n);
    let mut sum = 0.0;
    let mut count = 0usize;
    for j in 1..n.saturating_sub(1) {
        for i in 1..(n - 1) {
            let ii = idx_inner(i, j, n);
            if mask.at(ii) {
                continue;
            }
            sum += div[ii].abs() as f64;
            count += 1;
        }
    }
    if count > 0 { sum / count as f64 } else { 0.0 }
}

/// Sum of density over the whole grid.
pub fn total_density(density: &[f32]) -> f64 {
    density.iter().map(|&d| d as f64).sum()
}

/// Compute volume-averaged kinetic energy: KE = 0.5 * <vx² + vy²> over interior fluid cells.
pub fn kinetic_energy(vx: &[f32], vy: &[f32], mask: &ObstacleMask, n: usize) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for j in 1..n.saturating_sub(1) {
        for i in 1..(n - 1) {
            let ii = idx_inner(i, j, n);
            if mask.at(ii) {
                continue;
            }
            let (u, v) = (vx[ii] as f64, vy[ii] as f64);
            sum += u * u + v * v;
            count += 1;
        }
    }
    if count > 0 { 0.5 * sum / count as f64 } else { 0.0 }
}
