/// Cell represents the state of a single position on the torus.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Map a pattern bit onto a cell state
    pub const fn from_bool(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_bool(alive)
    }
}
