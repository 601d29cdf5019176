use super::{Cell, Grid};

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl ConwayRule {
    /// Next state of a single cell given its live neighbor count.
    /// Birth, death and the unchanged case are each spelled out.
    pub const fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Alive, n) if n < 2 || n > 3 => Cell::Dead,
            (state, _) => state,
        }
    }
}

/// RuleEngine advances a grid by one generation.
/// It holds no state between calls; output depends only on the input grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleEngine {
    rule: ConwayRule,
}

impl RuleEngine {
    pub const fn new() -> Self {
        Self { rule: ConwayRule }
    }

    /// Pure functional evolution - returns a new grid
    pub fn next(&self, current: &Grid) -> Grid {
        let mut next = current.clone();
        self.step_into(current, &mut next);
        next
    }

    /// Write the generation after `current` into `next`, overwriting every cell.
    /// Both grids must share dimensions.
    pub fn step_into(&self, current: &Grid, next: &mut Grid) {
        debug_assert_eq!(current.dimensions(), next.dimensions());
        let (width, height) = current.dimensions();

        for y in 0..height as isize {
            for x in 0..width as isize {
                let state = current.get(x, y);
                let neighbors = current.live_neighbors(x, y);
                next.set(x, y, self.rule.evolve(state, neighbors));
            }
        }
    }
}
