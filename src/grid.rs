//! Square grid with periodic boundary conditions.
//!
//! An L×L grid is one layer of the torus T² = (ℤ/Lℤ)². All wraparound arithmetic
//! for qubit layers and syndrome grids goes through this type.
//!
//! Rolling by `k` moves the value at index `i` to index `i + k`, i.e.
//! `rolled[i] = grid[(i - k) mod L]`.

/// Reduce a signed index onto the ring ℤ/nℤ.
pub fn wrap(index: isize, n: usize) -> usize {
    index.rem_euclid(n as isize) as usize
}

/// Row-major L×L grid on the torus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// An L×L grid filled with `T::default()`.
    pub fn new(n: usize) -> Self {
        Self::filled(n, T::default())
    }
}

impl<T: Copy> Grid<T> {
    pub fn filled(n: usize, value: T) -> Self {
        assert!(n > 0, "Grid size must be positive");
        Self {
            n,
            cells: vec![value; n * n],
        }
    }

    /// Build a grid cell by cell from `f(row, col)`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        assert!(n > 0, "Grid size must be positive");
        let mut cells = Vec::with_capacity(n * n);
        for r in 0..n {
            for c in 0..n {
                cells.push(f(r, c));
            }
        }
        Self { n, cells }
    }

    /// Reshape a row-major vector of exactly n² cells.
    pub fn from_vec(n: usize, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), n * n, "Grid needs exactly n² cells");
        Self { n, cells }
    }

    /// Side length L.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.index(row, col)]
    }

    /// Read with toroidal wraparound on signed coordinates.
    pub fn get_wrapped(&self, row: isize, col: isize) -> T {
        self.get(wrap(row, self.n), wrap(col, self.n))
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Grid<U> {
        Grid {
            n: self.n,
            cells: self.cells.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Cell-wise combination of two grids of the same size.
    pub fn zip_with<U: Copy, V: Copy>(&self, other: &Grid<U>, f: impl Fn(T, U) -> V) -> Grid<V> {
        assert_eq!(self.n, other.n, "Grid sizes differ");
        Grid {
            n: self.n,
            cells: self
                .cells
                .iter()
                .zip(other.cells.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Cyclic shift along both axes: `out[r][c] = self[r - dr][c - dc]`.
    pub fn roll(&self, dr: isize, dc: isize) -> Self {
        Self::from_fn(self.n, |r, c| self.get_wrapped(r as isize - dr, c as isize - dc))
    }

    /// Cyclic shift along the row axis.
    pub fn roll_rows(&self, shift: isize) -> Self {
        self.roll(shift, 0)
    }

    /// Cyclic shift along the column axis.
    pub fn roll_cols(&self, shift: isize) -> Self {
        self.roll(0, shift)
    }

    /// Quarter turn counter-clockwise: `out[r][c] = self[c][L-1-r]`.
    pub fn rot90(&self) -> Self {
        let last = self.n - 1;
        Self::from_fn(self.n, |r, c| self.get(c, last - r))
    }

    /// Row-major copy as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells.chunks(self.n).map(|row| row.to_vec()).collect()
    }

    /// Coordinates of cells matching `pred`, in row-major order.
    pub fn positions(&self, pred: impl Fn(T) -> bool) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| pred(v))
            .map(|(idx, _)| (idx / self.n, idx % self.n))
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.n && col < self.n, "({row}, {col}) outside {0}x{0} grid", self.n);
        row * self.n + col
    }
}

impl Grid<bool> {
    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    pub fn any(&self) -> bool {
        self.cells.iter().any(|&v| v)
    }

    /// Cell-wise odd parity. For 0/1 cells this is "sum equals exactly one".
    pub fn xor(&self, other: &Grid<bool>) -> Grid<bool> {
        self.zip_with(other, |a, b| a ^ b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Grid<usize> {
        Grid::from_fn(n, |r, c| r * n + c)
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(-11, 5), 4);
        assert_eq!(wrap(3, 5), 3);
    }

    #[test]
    fn test_roll_rows_moves_last_row_to_top() {
        let g = numbered(3);
        let rolled = g.roll_rows(1);
        assert_eq!(rolled.to_rows(), vec![vec![6, 7, 8], vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn test_roll_cols_negative_moves_first_column_right() {
        let g = numbered(3);
        let rolled = g.roll_cols(-1);
        assert_eq!(rolled.to_rows(), vec![vec![1, 2, 0], vec![4, 5, 3], vec![7, 8, 6]]);
    }

    #[test]
    fn test_roll_full_period_is_identity() {
        let g = numbered(4);
        assert_eq!(g.roll(4, -8), g);
        assert_eq!(g.roll(1, 2).roll(-1, -2), g);
    }

    #[test]
    fn test_rot90_counter_clockwise() {
        // Right column becomes the top row.
        let g = numbered(3);
        assert_eq!(g.rot90().to_rows(), vec![vec![2, 5, 8], vec![1, 4, 7], vec![0, 3, 6]]);
    }

    #[test]
    fn test_rot90_four_times_is_identity() {
        let g = numbered(5);
        assert_eq!(g.rot90().rot90().rot90().rot90(), g);
    }

    #[test]
    fn test_positions_row_major() {
        let mut g = Grid::<bool>::new(3);
        g.set(2, 0, true);
        g.set(0, 1, true);
        assert_eq!(g.positions(|v| v), vec![(0, 1), (2, 0)]);
        assert_eq!(g.count(), 2);
    }
}
