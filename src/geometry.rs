use itertools::Itertools;

/// Index arithmetic for a square grid of `size x size` cells partitioned
/// into `size` blocks of `dim x dim` cells each.
///
/// All methods are pure functions of the index and the fixed dimensions.
/// Out-of-range arguments are programming errors and panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Side length of a block (3 for standard sudoku).
    pub dim: usize,
    /// Side length of the grid, `dim * dim`.
    pub size: usize,
    /// Total cell count, `size * size`.
    pub length: usize,
}

impl Geometry {
    pub fn new(dim: usize) -> Self {
        assert!(dim >= 1, "Block dimension must be at least 1");
        let size = dim * dim;
        Self {
            dim,
            size,
            length: size * size,
        }
    }

    /// Linear indices of row `row`, left to right.
    pub fn row(&self, row: usize) -> Vec<usize> {
        assert!(row < self.size, "Row {row} out of range");
        (row * self.size..(row + 1) * self.size).collect_vec()
    }

    /// Linear indices of column `col`, top to bottom.
    pub fn col(&self, col: usize) -> Vec<usize> {
        assert!(col < self.size, "Column {col} out of range");
        (col..self.length).step_by(self.size).collect_vec()
    }

    /// Linear indices of block `block`, row-major within the block.
    pub fn block(&self, block: usize) -> Vec<usize> {
        assert!(block < self.size, "Block {block} out of range");
        let row0 = (block / self.dim) * self.dim;
        let col0 = (block % self.dim) * self.dim;
        (row0..row0 + self.dim)
            .cartesian_product(col0..col0 + self.dim)
            .map(|(row, col)| row * self.size + col)
            .collect_vec()
    }

    /// Index of the row containing cell `idx`.
    pub fn row_of(&self, idx: usize) -> usize {
        assert!(idx < self.length, "Cell index {idx} out of range");
        idx / self.size
    }

    /// Index of the column containing cell `idx`.
    pub fn col_of(&self, idx: usize) -> usize {
        assert!(idx < self.length, "Cell index {idx} out of range");
        idx % self.size
    }

    /// Index of the block containing cell `idx`.
    pub fn block_of(&self, idx: usize) -> usize {
        assert!(idx < self.length, "Cell index {idx} out of range");
        (idx / (self.size * self.dim)) * self.dim + (idx % self.size) / self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn new_computes_sizes() {
        let geometry = Geometry::new(3);
        assert_eq!(geometry.size, 9);
        assert_eq!(geometry.length, 81);
    }

    #[test]
    fn row_is_contiguous() {
        let geometry = Geometry::new(3);
        assert_eq!(geometry.row(2), (18..27).collect_vec());
    }

    #[test]
    fn col_has_constant_stride() {
        let geometry = Geometry::new(3);
        assert_eq!(geometry.col(4), vec![4, 13, 22, 31, 40, 49, 58, 67, 76]);
    }

    #[test]
    fn block_covers_sub_square() {
        let geometry = Geometry::new(3);
        assert_eq!(geometry.block(4), vec![30, 31, 32, 39, 40, 41, 48, 49, 50]);
    }

    #[test]
    fn block_of_first_row_groups_by_three() {
        let geometry = Geometry::new(3);
        let blocks = (0..9).map(|idx| geometry.block_of(idx)).collect_vec();
        assert_eq!(blocks, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn containing_groups_include_the_cell() {
        let geometry = Geometry::new(3);
        for idx in 0..geometry.length {
            assert!(geometry.row(geometry.row_of(idx)).contains(&idx));
            assert!(geometry.col(geometry.col_of(idx)).contains(&idx));
            assert!(geometry.block(geometry.block_of(idx)).contains(&idx));
        }
    }

    #[test]
    fn groups_of_one_kind_partition_the_grid() {
        let geometry = Geometry::new(2);
        let groups: [fn(&Geometry, usize) -> Vec<usize>; 3] =
            [Geometry::row, Geometry::col, Geometry::block];
        for group in groups {
            let mut covered = (0..geometry.size)
                .flat_map(|n| group(&geometry, n))
                .collect_vec();
            covered.sort_unstable();
            assert_eq!(covered, (0..geometry.length).collect_vec());
        }
    }

    #[test]
    fn groups_have_size_cells() {
        let geometry = Geometry::new(2);
        for n in 0..geometry.size {
            assert_eq!(geometry.row(n).len(), geometry.size);
            assert_eq!(geometry.col(n).len(), geometry.size);
            assert_eq!(geometry.block(n).len(), geometry.size);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn row_rejects_out_of_range() {
        Geometry::new(2).row(4);
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn new_rejects_zero_dim() {
        Geometry::new(0);
    }
}
