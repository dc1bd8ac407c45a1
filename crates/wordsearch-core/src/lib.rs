//! Word search engine
//!
//! Generates square letter grids with a list of words hidden along straight
//! lines, and validates player selections against the hidden words.
//!
//! ```
//! use wordsearch_core::{classify, Difficulty, Generator, Selection};
//!
//! let mut generator = Generator::with_seed(7);
//! let board = generator.generate(&["PAI"], Difficulty::Easy);
//! let placement = &board.placements[0];
//!
//! let outcome = classify(&board.grid, &placement.positions, &["PAI"]).unwrap();
//! assert!(matches!(outcome, Selection::Match { .. }));
//! ```

mod error;
mod game;
mod generator;
mod geometry;
mod grid;
mod normalize;
mod rng;
mod validator;

pub use error::{Error, Result};
pub use game::{Game, Snapshot, DEFAULT_WORDS};
pub use generator::{
    apply_placement, can_place_at, place_exhaustively, place_randomly, random_fill, Board,
    Generator, GeneratorConfig, Placement,
};
pub use geometry::{Difficulty, DifficultyProfile, Direction, Position, DIRECTIONS};
pub use grid::{Cell, Grid};
pub use normalize::{normalize, normalize_words};
pub use rng::{RandomSource, SimpleRng};
pub use validator::{classify, is_straight_line, line_between, path_letters, Orientation, Selection};
