use crate::state::{idx, idx_inner, ObstacleMask};

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Density or pressure: mirror at every wall.
    Scalar,
    /// Negated at the left/right walls.
    Vx,
    /// Negated at the top/bottom walls.
    Vy,
}

/// Reflective box boundary followed by obstacle zeroing.
///   - `FieldType::Scalar`: Neumann (copy neighbor) at all walls
///   - `FieldType::Vx`: negate at left/right, copy at top/bottom
///   - `FieldType::Vy`: negate at top/bottom, copy at left/right
///
/// Corners average their two edge neighbors. Obstacles override everything.
pub fn set_bnd(field_type: FieldType, x: &mut [f32], mask: &ObstacleMask, n: usize) {
    let flip_x = if field_type == FieldType::Vx { -1.0 } else { 1.0 };
    let flip_y = if field_type == FieldType::Vy { -1.0 } else { 1.0 };

    for i in 1..n.saturating_sub(1) {
        x[idx_inner(i, 0, n)] = flip_y * x[idx_inner(i, 1, n)];
        x[idx_inner(i, n - 1, n)] = flip_y * x[idx_inner(i, n - 2, n)];
        x[idx_inner(0, i, n)] = flip_x * x[idx_inner(1, i, n)];
        x[idx_inner(n - 1, i, n)] = flip_x * x[idx_inner(n - 2, i, n)];
    }

    // Clamped lookups keep tiny grids (n < 3) in bounds.
    let last = n as i32 - 1;
    x[idx(0, 0, n)] = 0.5 * (x[idx(1, 0, n)] + x[idx(0, 1, n)]);
    x[idx(0, last, n)] = 0.5 * (x[idx(1, last, n)] + x[idx(0, last - 1, n)]);
    x[idx(last, 0, n)] = 0.5 * (x[idx(last - 1, 0, n)] + x[idx(last, 1, n)]);
    x[idx(last, last, n)] = 0.5 * (x[idx(last - 1, last, n)] + x[idx(last, last - 1, n)]);

    for (v, &solid) in x.iter_mut().zip(mask.cells()) {
        if solid {
            *v = 0.0;
        }
    }
}
