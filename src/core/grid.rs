//! Spring lattice grid
//!
//! Fixed NxN array of mass points. Only a centered sub-window is ever
//! displayed; the surrounding margin lets waves run off-screen before they
//! reach the hard boundary.

use crate::math::Real;

/// One lattice point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Displacement from rest.
    pub height: Real,
    pub velocity: Real,
    /// Acceleration measured during the most recent step. Display-only,
    /// never fed back into the integrator.
    pub acceleration: Real,
    /// Height the ground spring pulls toward.
    pub rest_height: Real,
}

impl Cell {
    #[inline(always)]
    pub fn zeroed() -> Self {
        Self {
            height: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            rest_height: 0.0,
        }
    }
}

/// Row-major `size x size` grid of cells.
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Cell::zeroed(); size * size],
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // index = x + y * size
    #[inline(always)]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.size
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let index = self.index(x, y);
        &mut self.cells[index]
    }

    /// Height at signed coordinates. Anything outside the grid reads as 0.0,
    /// a fixed non-reflecting boundary.
    #[inline(always)]
    pub fn height_at(&self, x: i32, y: i32) -> Real {
        if x < 0 || y < 0 || x as usize >= self.size || y as usize >= self.size {
            0.0
        } else {
            self.cells[x as usize + y as usize * self.size].height
        }
    }

    /// Sum of the four orthogonal neighbor heights relative to the cell's
    /// own height. Missing neighbors contribute height 0.
    #[inline(always)]
    pub fn neighbor_height_delta(&self, x: usize, y: usize) -> Real {
        let (x, y) = (x as i32, y as i32);
        let height = self.height_at(x, y);
        (self.height_at(x - 1, y) - height)
            + (self.height_at(x + 1, y) - height)
            + (self.height_at(x, y - 1) - height)
            + (self.height_at(x, y + 1) - height)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Row-major iterator over a square sub-window starting at `offset`.
    pub fn window(&self, offset: usize, window: usize) -> impl Iterator<Item = &Cell> {
        (0..window).flat_map(move |y| (0..window).map(move |x| self.get(x + offset, y + offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_heights_read_zero() {
        let mut grid = Grid::new(4);
        for cell in grid.cells_mut() {
            cell.height = 7.0;
        }

        assert_eq!(grid.height_at(-1, 0), 0.0);
        assert_eq!(grid.height_at(0, -1), 0.0);
        assert_eq!(grid.height_at(4, 2), 0.0);
        assert_eq!(grid.height_at(2, 4), 0.0);
        assert_eq!(grid.height_at(i32::MIN, i32::MAX), 0.0);
        assert_eq!(grid.height_at(1, 1), 7.0);
    }

    #[test]
    fn indexing_is_row_major() {
        let mut grid = Grid::new(3);
        grid.get_mut(2, 1).height = 5.0;
        assert_eq!(grid.cells()[2 + 3].height, 5.0);
    }

    #[test]
    fn window_covers_the_sub_square() {
        let mut grid = Grid::new(6);
        for y in 2..4 {
            for x in 2..4 {
                grid.get_mut(x, y).height = 1.0;
            }
        }

        let heights: Vec<Real> = grid.window(2, 2).map(|cell| cell.height).collect();
        assert_eq!(heights, vec![1.0; 4]);
    }

    #[test]
    fn neighbor_delta_counts_missing_neighbors_as_zero() {
        let mut grid = Grid::new(3);
        grid.get_mut(0, 0).height = 2.0;

        // Corner cell: two in-grid neighbors at 0, two out-of-grid at 0.
        assert_eq!(grid.neighbor_height_delta(0, 0), -8.0);
    }
}
