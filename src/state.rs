/// Which storage of a `DoubleBuffer` currently holds the live field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Front {
    A,
    B,
}

/// A field with a scratch twin. Stages write into the scratch storage and
/// then `swap` so the freshly written data becomes current.
pub struct DoubleBuffer {
    a: Vec<f32>,
    b: Vec<f32>,
    front: Front,
}

impl DoubleBuffer {
    pub fn zeroed(len: usize) -> Self {
        Self {
            a: vec![0.0; len],
            b: vec![0.0; len],
            front: Front::A,
        }
    }

    pub fn front(&self) -> Front {
        self.front
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn current(&self) -> &[f32] {
        match self.front {
            Front::A => &self.a,
            Front::B => &self.b,
        }
    }

    pub fn current_mut(&mut self) -> &mut [f32] {
        match self.front {
            Front::A => &mut self.a,
            Front::B => &mut self.b,
        }
    }

    pub fn scratch(&self) -> &[f32] {
        match self.front {
            Front::A => &self.b,
            Front::B => &self.a,
        }
    }

    /// Borrow both storages at once as `(current, scratch)`.
    pub fn split_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        match self.front {
            Front::A => (&mut self.a, &mut self.b),
            Front::B => (&mut self.b, &mut self.a),
        }
    }

    pub fn swap(&mut self) {
        self.front = match self.front {
            Front::A => Front::B,
            Front::B => Front::A,
        };
    }
}

/// Per-cell solid flags. A solid cell is a fixed zero for every field.
#[derive(Clone, Debug)]
pub struct ObstacleMask {
    n: usize,
    cells: Vec<bool>,
}

impl ObstacleMask {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    pub fn set(&mut self, x: i32, y: i32, solid: bool) {
        self.cells[idx(x, y, self.n)] = solid;
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[idx(x, y, self.n)]
    }

    /// Lookup by linear offset, for the stencil loops.
    #[inline(always)]
    pub fn at(&self, i: usize) -> bool {
        self.cells[i]
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Convert 2D coordinates to a 1D offset.
/// Both axes are clamped into `[0, n-1]`, so every `i32` pair maps to a cell.
pub fn idx(x: i32, y: i32, n: usize) -> usize {
    let hi = n as i32 - 1;
    let x = x.clamp(0, hi) as usize;
    let y = y.clamp(0, hi) as usize;
    x + y * n
}

/// Fast index for cells already known to be in bounds.
#[inline(always)]
pub const fn idx_inner(x: usize, y: usize, n: usize) -> usize {
    y * n + x
}

/// All owned simulation buffers for an `n`×`n` grid.
pub struct SimState {
    pub n: usize,
    pub density: DoubleBuffer,
    pub vx: DoubleBuffer,
    pub vy: DoubleBuffer,
    pub obstacles: ObstacleMask,
}

impl SimState {
    pub fn new(n: usize) -> Self {
        let size = n * n;
        Self {
            n,
            density: DoubleBuffer::zeroed(size),
            vx: DoubleBuffer::zeroed(size),
            vy: DoubleBuffer::zeroed(size),
            obstacles: ObstacleMask::new(n),
        }
    }
}
