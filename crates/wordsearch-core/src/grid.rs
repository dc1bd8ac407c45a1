use crate::{Error, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Letter(char),
}

impl Cell {
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(c) => Some(c),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A square letter grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(Error::MalformedGrid {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create a `size`×`size` grid with every cell empty
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a grid from equal-length rows; `.` or a space marks an empty cell.
    ///
    /// Returns None if the rows do not form a square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let before = cells.len();
            cells.extend(row.as_ref().chars().map(|c| match c {
                '.' | ' ' => Cell::Empty,
                c => Cell::Letter(c),
            }));
            if cells.len() - before != size {
                return None;
            }
        }
        Some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Cell at `pos`, None when out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// Letter at `pos`, None when out of bounds or empty
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.get(pos).and_then(Cell::letter)
    }

    pub(crate) fn set(&mut self, pos: Position, letter: char) {
        let idx = pos.row * self.size + pos.col;
        self.cells[idx] = Cell::Letter(letter);
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// True once every cell holds a letter
    pub fn is_filled(&self) -> bool {
        self.empty_count() == 0
    }

    /// Rows as strings, empty cells rendered as `.`
    pub fn rows(&self) -> Vec<String> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.letter().unwrap_or('.')).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let spaced: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.empty_count(), 16);
        assert!(!grid.is_filled());
        assert_eq!(grid.get(Position::new(3, 3)), Some(Cell::Empty));
        assert_eq!(grid.get(Position::new(4, 0)), None);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&["AB", "C."]).unwrap();
        assert_eq!(grid.letter(Position::new(0, 1)), Some('B'));
        assert_eq!(grid.letter(Position::new(1, 1)), None);
        assert_eq!(grid.rows(), vec!["AB".to_string(), "C.".to_string()]);

        assert!(Grid::from_rows(&["ABC", "DE"]).is_none());
        assert!(Grid::from_rows(&["AB"]).is_none());
    }

    #[test]
    fn test_set_and_fill() {
        let mut grid = Grid::new(2);
        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set(pos, 'Z');
        }
        assert!(grid.is_filled());
        assert_eq!(grid.to_string(), "Z Z\nZ Z\n");
    }

    #[test]
    fn test_deserialize_checks_cell_count() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);

        let short = r#"{"size":3,"cells":[{"Letter":"A"},"Empty"]}"#;
        let err = serde_json::from_str::<Grid>(short).unwrap_err();
        assert!(err.to_string().contains("grid of size 3 cannot hold 2 cells"), "{}", err);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::new(2);
        let all: Vec<_> = grid.positions().collect();
        assert_eq!(
            all,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
    }
}
