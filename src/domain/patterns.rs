use super::{Cell, Grid};
use crate::error::{LifeError, Result};
use tracing::debug;

/// A small rectangular boolean matrix stamped onto the grid at seeding time.
/// Rows are stored top to bottom, columns left to right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    width: usize,
    height: usize,
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    /// Build a pattern from explicit rows.
    /// Empty input, empty rows and ragged rows are rejected.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<bool>>) -> Result<Self> {
        let name = name.into();
        let width = match rows.first() {
            None => return Err(LifeError::pattern(&name, "pattern has no rows")),
            Some(first) if first.is_empty() => {
                return Err(LifeError::pattern(&name, "row 0 is empty"));
            }
            Some(first) => first.len(),
        };

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(LifeError::pattern(
                &name,
                format!("row {idx} has {} cells, expected {width}", row.len()),
            ));
        }

        Ok(Self {
            name,
            width,
            height: rows.len(),
            rows,
        })
    }

    /// Parse a plaintext picture of a pattern, one line per row.
    /// `O`, `*` and `1` are alive; `.`, `0` and spaces are dead.
    /// Surrounding whitespace on each line and blank lines at either end are ignored.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|line| !line.trim().is_empty());
        let last = lines.iter().rposition(|line| !line.trim().is_empty());

        let rows = match (first, last) {
            (Some(first), Some(last)) => lines[first..=last]
                .iter()
                .enumerate()
                .map(|(row, line)| {
                    line.trim()
                        .chars()
                        .enumerate()
                        .map(|(col, ch)| match ch {
                            'O' | '*' | '1' => Ok(true),
                            '.' | '0' | ' ' => Ok(false),
                            other => Err(LifeError::pattern(
                                &name,
                                format!("unexpected '{other}' at row {row}, column {col}"),
                            )),
                        })
                        .collect::<Result<Vec<bool>>>()
                })
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Self::from_rows(name, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounding box as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of alive cells in the pattern
    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|&&alive| alive).count()
    }

    /// Write the whole bounding box onto the grid at the given offset.
    /// False cells are written as dead, so stamping overwrites rather than merges.
    /// Offsets past an edge wrap around the torus.
    pub fn stamp(&self, grid: &mut Grid, x_offset: isize, y_offset: isize) {
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                grid.set(
                    col as isize + x_offset,
                    row as isize + y_offset,
                    Cell::from(alive),
                );
            }
        }
        debug!(
            pattern = %self.name,
            x_offset,
            y_offset,
            population = self.population(),
            "stamped pattern"
        );
    }
}

/// A pattern together with where it lands on the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternPlacement {
    pub pattern: Pattern,
    pub x_offset: isize,
    pub y_offset: isize,
}

impl PatternPlacement {
    pub fn new(pattern: Pattern, x_offset: isize, y_offset: isize) -> Self {
        Self {
            pattern,
            x_offset,
            y_offset,
        }
    }

    pub fn apply(&self, grid: &mut Grid) {
        self.pattern.stamp(grid, self.x_offset, self.y_offset);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    fn preset(name: &str, picture: &str) -> Pattern {
        match Pattern::parse(name, picture) {
            Ok(pattern) => pattern,
            Err(err) => unreachable!("built-in pattern is well formed: {err}"),
        }
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        preset(
            "Glider",
            "
            .O.
            ..O
            OOO",
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        preset("Blinker", "OOO")
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        preset(
            "Block",
            "
            OO
            OO",
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        preset(
            "Toad",
            "
            .OOO
            OOO.",
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        preset(
            "Beacon",
            "
            OO..
            O...
            ...O
            ..OO",
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        preset(
            "LWSS",
            "
            .O..O
            O....
            O...O
            OOOO.",
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        preset(
            "R-pentomino",
            "
            .OO
            OO.
            .O.",
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            block(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            Pattern::from_rows("none", vec![]),
            Err(LifeError::MalformedPattern { .. })
        ));
        assert!(matches!(
            Pattern::from_rows("blank", vec![vec![]]),
            Err(LifeError::MalformedPattern { .. })
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Pattern::from_rows("ragged", vec![vec![true, false], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            LifeError::MalformedPattern {
                name: "ragged".into(),
                reason: "row 1 has 1 cells, expected 2".into(),
            }
        );
    }

    #[test]
    fn test_parse_glider() {
        let glider = presets::glider();
        assert_eq!(glider.dimensions(), (3, 3));
        assert_eq!(glider.population(), 5);
        assert_eq!(
            glider.rows,
            vec![
                vec![false, true, false],
                vec![false, false, true],
                vec![true, true, true],
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_chars() {
        assert!(Pattern::parse("bad", "O.x").is_err());
        assert!(Pattern::parse("blank", "\n   \n").is_err());
    }

    #[test]
    fn test_all_presets_parse() {
        let patterns = presets::all_patterns();
        assert_eq!(patterns.len(), 7);
        assert!(patterns.iter().all(|p| p.population() > 0));
    }

    #[test]
    fn test_stamp_at_offset() {
        let mut grid = Grid::new(10, 10).unwrap();
        presets::glider().stamp(&mut grid, 4, 2);

        let mut alive = grid.alive_cells();
        alive.sort();
        assert_eq!(alive, vec![(4, 4), (5, 2), (5, 4), (6, 3), (6, 4)]);
    }

    #[test]
    fn test_stamp_wraps_past_right_edge() {
        let (width, height) = (8usize, 6usize);
        let mut grid = Grid::new(width, height).unwrap();
        let pattern = presets::toad();
        let (x_off, y_off) = (6isize, 5isize);
        pattern.stamp(&mut grid, x_off, y_off);

        for (row, cells) in pattern.rows.iter().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                let tx = (col as isize + x_off).rem_euclid(width as isize);
                let ty = (row as isize + y_off).rem_euclid(height as isize);
                assert_eq!(grid.get(tx, ty), Cell::from(alive), "cell ({tx}, {ty})");
            }
        }
        // Columns 8 and 9 land on 0 and 1, row 6 lands on row 0
        assert_eq!(grid.get(0, 5), Cell::Alive);
        assert_eq!(grid.get(1, 0), Cell::Dead);
        assert_eq!(grid.count_alive(), 6);
    }

    #[test]
    fn test_stamp_overwrites_with_dead() {
        let mut grid = Grid::new(5, 5).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                grid.set(x, y, Cell::Alive);
            }
        }
        presets::glider().stamp(&mut grid, 1, 1);
        assert_eq!(grid.get(1, 1), Cell::Dead);
        assert_eq!(grid.get(2, 1), Cell::Alive);
        assert_eq!(grid.count_alive(), 25 - 4);
    }

    #[test]
    fn test_pattern_larger_than_grid_is_valid() {
        let mut grid = Grid::new(2, 2).unwrap();
        let lwss = presets::lwss();
        lwss.stamp(&mut grid, 0, 0);
        assert!(grid.count_alive() <= 4);
    }
}
