use crate::{Error, Grid, Position, Result};
use serde::{Deserialize, Serialize};

/// Which way a matched selection spelled its word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Forward,
    Reverse,
}

/// Outcome of validating a player's selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Selection {
    /// The selection spells an active word
    Match { word: String, orientation: Orientation },
    /// A straight line that spells nothing in the active set
    NoMatch,
    /// Too short, or not a straight line
    Invalid,
}

impl Selection {
    pub fn is_match(&self) -> bool {
        matches!(self, Selection::Match { .. })
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Selection::Match { word, .. } => Some(word),
            _ => None,
        }
    }
}

/// Check that a path's points lie on one horizontal, vertical or 45° line.
///
/// Only collinearity is tested, not that the points are adjacent. Paths with
/// fewer than two points, or whose ends coincide, are rejected.
pub fn is_straight_line(path: &[Position]) -> bool {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) if path.len() >= 2 => (*first, *last),
        _ => return false,
    };

    let dx = last.col as isize - first.col as isize;
    let dy = last.row as isize - first.row as isize;
    if dx == 0 && dy == 0 {
        return false;
    }
    // Diagonals must run at exactly 45°
    if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
        return false;
    }

    path[1..path.len() - 1].iter().all(|point| {
        if dy == 0 {
            point.row == first.row
        } else if dx == 0 {
            point.col == first.col
        } else {
            let rise = point.row as f64 - first.row as f64;
            let expected_col = first.col as f64 + (dx as f64 * rise) / dy as f64;
            (point.col as f64 - expected_col).abs() <= 0.1
        }
    })
}

/// Read the letters under a path in order.
///
/// Fails if any point lies outside the grid. Empty cells contribute nothing.
pub fn path_letters(grid: &Grid, path: &[Position]) -> Result<String> {
    path.iter()
        .map(|&pos| {
            grid.get(pos)
                .map(|cell| cell.letter())
                .ok_or_else(|| Error::OutOfBounds {
                    position: pos,
                    size: grid.size(),
                })
        })
        .filter_map(|letter| letter.transpose())
        .collect()
}

/// Classify a selection path against the words still in play.
///
/// A forward reading is preferred over a reverse one when both match.
pub fn classify<S: AsRef<str>>(grid: &Grid, path: &[Position], active_words: &[S]) -> Result<Selection> {
    if !is_straight_line(path) {
        return Ok(Selection::Invalid);
    }

    let forward = path_letters(grid, path)?;
    let reverse: String = forward.chars().rev().collect();
    let is_active = |candidate: &str| active_words.iter().any(|w| w.as_ref() == candidate);

    if is_active(&forward) {
        Ok(Selection::Match {
            word: forward,
            orientation: Orientation::Forward,
        })
    } else if is_active(&reverse) {
        Ok(Selection::Match {
            word: reverse,
            orientation: Orientation::Reverse,
        })
    } else {
        Ok(Selection::NoMatch)
    }
}

/// Every cell from `start` to `end` inclusive, stepping one cell at a time.
///
/// None unless the two cells are distinct and share a row, a column or a
/// 45° diagonal.
pub fn line_between(start: Position, end: Position) -> Option<Vec<Position>> {
    let dx = end.col as isize - start.col as isize;
    let dy = end.row as isize - start.row as isize;
    if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
        return None;
    }

    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return None;
    }

    let (step_x, step_y) = (dx.signum(), dy.signum());
    let path = (0..=steps)
        .map(|i| {
            Position::new(
                (start.row as isize + i * step_y) as usize,
                (start.col as isize + i * step_x) as usize,
            )
        })
        .collect();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn grid() -> Grid {
        Grid::from_rows(&["PAIX", "QAXI", "XXIA", "IAPP"]).unwrap()
    }

    #[test]
    fn test_single_point_is_invalid() {
        let outcome = classify(&grid(), &[p(0, 0)], &["PAI"]).unwrap();
        assert_eq!(outcome, Selection::Invalid);
        assert_eq!(classify(&grid(), &[], &["PAI"]).unwrap(), Selection::Invalid);
    }

    #[test]
    fn test_forward_match() {
        let outcome = classify(&grid(), &[p(0, 0), p(0, 1), p(0, 2)], &["PAI"]).unwrap();
        assert_eq!(
            outcome,
            Selection::Match {
                word: "PAI".to_string(),
                orientation: Orientation::Forward
            }
        );
    }

    #[test]
    fn test_reverse_match() {
        // Bottom row reads IAP left to right
        let outcome = classify(&grid(), &[p(3, 0), p(3, 1), p(3, 2)], &["PAI"]).unwrap();
        assert_eq!(
            outcome,
            Selection::Match {
                word: "PAI".to_string(),
                orientation: Orientation::Reverse
            }
        );
    }

    #[test]
    fn test_diagonal_match() {
        let path = line_between(p(0, 0), p(2, 2)).unwrap();
        let outcome = classify(&grid(), &path, &["PAI"]).unwrap();
        assert_eq!(outcome.word(), Some("PAI"));
    }

    #[test]
    fn test_knight_move_is_invalid() {
        assert!(!is_straight_line(&[p(0, 0), p(1, 2)]));
        let outcome = classify(&grid(), &[p(0, 0), p(1, 2)], &["PA", "PX"]).unwrap();
        assert_eq!(outcome, Selection::Invalid);
    }

    #[test]
    fn test_steep_collinear_path_is_invalid() {
        // Every point sits on the slope-2 line, which is not a grid direction
        let path = [p(0, 0), p(1, 2), p(2, 4)];
        assert!(!is_straight_line(&path));
        let g = Grid::from_rows(&["PXXXX", "XXAXX", "XXXXI", "XXXXX", "XXXXX"]).unwrap();
        assert_eq!(classify(&g, &path, &["PAI"]).unwrap(), Selection::Invalid);
        let reversed = [p(2, 4), p(1, 2), p(0, 0)];
        assert_eq!(classify(&g, &reversed, &["PAI"]).unwrap(), Selection::Invalid);
    }

    #[test]
    fn test_bent_path_is_invalid() {
        let path = [p(0, 0), p(1, 1), p(0, 2)];
        assert!(!is_straight_line(&path));
        assert_eq!(classify(&grid(), &path, &["PAI"]).unwrap(), Selection::Invalid);
    }

    #[test]
    fn test_degenerate_path_is_invalid() {
        assert!(!is_straight_line(&[p(1, 1), p(0, 0), p(1, 1)]));
    }

    #[test]
    fn test_no_match() {
        let outcome = classify(&grid(), &[p(1, 0), p(1, 1)], &["PAI"]).unwrap();
        assert_eq!(outcome, Selection::NoMatch);
    }

    #[test]
    fn test_found_words_excluded_by_caller() {
        let empty: [&str; 0] = [];
        let outcome = classify(&grid(), &[p(0, 0), p(0, 1), p(0, 2)], &empty).unwrap();
        assert_eq!(outcome, Selection::NoMatch);
    }

    #[test]
    fn test_palindrome_prefers_forward() {
        let g = Grid::from_rows(&["ANA", "XXX", "XXX"]).unwrap();
        let outcome = classify(&g, &[p(0, 0), p(0, 1), p(0, 2)], &["ANA"]).unwrap();
        assert_eq!(
            outcome,
            Selection::Match {
                word: "ANA".to_string(),
                orientation: Orientation::Forward
            }
        );
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let err = classify(&grid(), &[p(0, 2), p(0, 3), p(0, 4)], &["PAI"]).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                position: p(0, 4),
                size: 4
            }
        );
    }

    #[test]
    fn test_reverse_path_agrees() {
        let g = grid();
        let paths = vec![
            vec![p(0, 0), p(0, 1), p(0, 2)],
            vec![p(3, 0), p(3, 1), p(3, 2)],
            vec![p(0, 0), p(1, 1), p(2, 2)],
            vec![p(1, 0), p(1, 1)],
            vec![p(0, 0), p(1, 2)],
            vec![p(0, 3), p(1, 2), p(2, 1), p(3, 0)],
            vec![p(0, 0), p(2, 1), p(3, 3)],
        ];
        for path in paths {
            let reversed: Vec<_> = path.iter().rev().copied().collect();
            let a = classify(&g, &path, &["PAI"]).unwrap();
            let b = classify(&g, &reversed, &["PAI"]).unwrap();
            match (&a, &b) {
                (
                    Selection::Match { word: wa, orientation: oa },
                    Selection::Match { word: wb, orientation: ob },
                ) => {
                    assert_eq!(wa, wb);
                    assert_ne!(oa, ob);
                }
                _ => assert_eq!(a, b, "path {:?}", path),
            }
        }
    }

    #[test]
    fn test_line_between() {
        assert_eq!(
            line_between(p(0, 0), p(0, 3)),
            Some(vec![p(0, 0), p(0, 1), p(0, 2), p(0, 3)])
        );
        assert_eq!(
            line_between(p(3, 3), p(1, 1)),
            Some(vec![p(3, 3), p(2, 2), p(1, 1)])
        );
        assert_eq!(line_between(p(2, 0), p(0, 2)), Some(vec![p(2, 0), p(1, 1), p(0, 2)]));
        assert_eq!(line_between(p(0, 0), p(1, 2)), None);
        assert_eq!(line_between(p(1, 1), p(1, 1)), None);
    }

    #[test]
    fn test_path_letters() {
        assert_eq!(path_letters(&grid(), &[p(0, 0), p(1, 0)]).unwrap(), "PQ");
        let sparse = Grid::from_rows(&["A.", ".B"]).unwrap();
        assert_eq!(path_letters(&sparse, &[p(0, 0), p(0, 1)]).unwrap(), "A");
    }
}
