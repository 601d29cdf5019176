use super::Cell;
use crate::error::{LifeError, Result};
use rand::Rng;

/// Grid is a fixed-size toroidal cell matrix.
/// Every coordinate access wraps, so the left edge touches the right edge
/// and the top edge touches the bottom edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        // Coordinates are folded with signed arithmetic, so each side must fit isize
        if width == 0 || isize::try_from(width).is_err() {
            return Err(LifeError::dimension("grid width", width));
        }
        if height == 0 || isize::try_from(height).is_err() {
            return Err(LifeError::dimension("grid height", height));
        }
        let len = width
            .checked_mul(height)
            .ok_or_else(|| LifeError::dimension("grid size", format!("{width}x{height}")))?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Fold any coordinate onto the torus and convert it to a 1D index
    fn wrapped_index(&self, x: isize, y: isize) -> usize {
        let wx = x.rem_euclid(self.width as isize) as usize;
        let wy = y.rem_euclid(self.height as isize) as usize;
        wy * self.width + wx
    }

    /// Get cell at position, wrapping out-of-range coordinates
    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.cells[self.wrapped_index(x, y)]
    }

    /// Set cell at position, wrapping out-of-range coordinates
    pub fn set(&mut self, x: isize, y: isize, cell: Cell) {
        let idx = self.wrapped_index(x, y);
        self.cells[idx] = cell;
    }

    /// Count live cells among the 8 toroidally adjacent positions.
    /// The result is always in `0..=8`.
    pub fn live_neighbors(&self, x: isize, y: isize) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.get(x + dx, y + dy).is_alive())
            .count() as u8
    }

    /// Set each cell alive with probability `density`
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, density: f64) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_bool(rng.random_bool(density)));
    }

    /// Number of alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Positions of every alive cell, row by row
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 5).unwrap();
        assert_eq!(grid.dimensions(), (7, 5));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { field: "grid width", .. })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(LifeError::InvalidDimension { field: "grid height", .. })
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX / 2 + 2, 3),
            Err(LifeError::InvalidDimension { field: "grid width", .. })
        ));
        assert!(matches!(
            Grid::new(1 << (usize::BITS / 2), 1 << (usize::BITS / 2)),
            Err(LifeError::InvalidDimension { field: "grid size", .. })
        ));
    }

    #[test]
    fn test_negative_coordinates_wrap() {
        let mut grid = Grid::new(10, 8).unwrap();
        grid.set(9, 0, Cell::Alive);
        assert_eq!(grid.get(-1, 0), Cell::Alive);
        assert_eq!(grid.get(-11, 8), Cell::Alive);

        grid.set(-1, -1, Cell::Alive);
        assert_eq!(grid.get(9, 7), Cell::Alive);
    }

    #[test]
    fn test_large_coordinates_wrap() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(13, 7, Cell::Alive);
        assert_eq!(grid.get(1, 1), Cell::Alive);
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn test_neighbors_wrap_across_corners() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set(0, 0, Cell::Alive);

        assert_eq!(grid.live_neighbors(5, 5), 1);
        assert_eq!(grid.live_neighbors(5, 0), 1);
        assert_eq!(grid.live_neighbors(0, 5), 1);
        assert_eq!(grid.live_neighbors(0, 0), 0);
        assert_eq!(grid.live_neighbors(3, 3), 0);
    }

    #[test]
    fn test_neighbors_full_ring() {
        let mut grid = Grid::new(5, 5).unwrap();
        for y in 1..=3 {
            for x in 1..=3 {
                grid.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(grid.live_neighbors(2, 2), 8);
        assert_eq!(grid.live_neighbors(1, 1), 3);
    }

    #[test]
    fn test_iter_cells_positions() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, Cell::Alive);
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[5], (2, 1, Cell::Alive));
        assert_eq!(grid.alive_cells(), vec![(2, 1)]);
    }

    #[test]
    fn test_fill_random_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(8, 8).unwrap();

        grid.fill_random(&mut rng, 1.0);
        assert_eq!(grid.count_alive(), 64);

        grid.fill_random(&mut rng, 0.0);
        assert_eq!(grid.count_alive(), 0);
    }
}
