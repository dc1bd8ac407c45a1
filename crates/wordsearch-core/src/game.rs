//! Game session state
//!
//! Tracks which words have been found on the current board and keeps the
//! small key-value snapshot hosts persist between visits.

use crate::{
    classify, line_between, normalize_words, Board, Difficulty, Generator, Grid, Placement,
    Position, RandomSource, Result, Selection, SimpleRng,
};
use serde::{Deserialize, Serialize};

/// Word list used when nothing has been saved yet
pub const DEFAULT_WORDS: [&str; 10] = [
    "PAI", "AMOR", "FAMILIA", "CARINHO", "ABRACO", "EXEMPLO", "FORCA", "CUIDADO", "RISOS",
    "RESPEITO",
];

fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Persisted session state: difficulty, word list and found words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_words")]
    pub words: Vec<String>,
    #[serde(default)]
    pub found_words: Vec<String>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            words: default_words(),
            found_words: Vec::new(),
        }
    }
}

/// A word search in progress
pub struct Game<R: RandomSource = SimpleRng> {
    generator: Generator<R>,
    difficulty: Difficulty,
    words: Vec<String>,
    found_words: Vec<String>,
    board: Board,
    hints_used: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_snapshot(Snapshot::default())
    }
}

impl Game {
    /// Start a game with the given words, normalized
    pub fn new<S: AsRef<str>>(difficulty: Difficulty, words: &[S]) -> Self {
        Self::with_generator(
            Generator::new(),
            Snapshot {
                difficulty,
                words: normalize_words(words),
                found_words: Vec::new(),
            },
        )
    }

    /// Resume a saved session on a freshly generated board
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::with_generator(Generator::new(), snapshot)
    }
}

impl<R: RandomSource> Game<R> {
    /// Resume a session using a specific generator.
    ///
    /// Words are normalized; found words not in the word list are dropped.
    pub fn with_generator(mut generator: Generator<R>, snapshot: Snapshot) -> Self {
        let words = normalize_words(&snapshot.words);
        let found_words: Vec<String> = normalize_words(&snapshot.found_words)
            .into_iter()
            .filter(|w| words.contains(w))
            .collect();
        let board = generator.generate(&words, snapshot.difficulty);

        Self {
            generator,
            difficulty: snapshot.difficulty,
            words,
            found_words,
            board,
            hints_used: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        &self.board.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.board.placements
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Words still to be found
    pub fn remaining_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| !self.found_words.contains(w))
            .map(String::as_str)
            .collect()
    }

    /// Words in the list that did not fit on the current board
    pub fn unplaced_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| !self.board.is_placed(w))
            .map(String::as_str)
            .collect()
    }

    /// True once every word in the list has been found
    pub fn is_won(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(|w| self.found_words.contains(w))
    }

    /// Regenerate the board with the same words and clear progress
    pub fn new_game(&mut self) {
        self.board = self.generator.generate(&self.words, self.difficulty);
        self.found_words.clear();
        self.hints_used = 0;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.new_game();
    }

    /// Replace the word list. Entries that normalize to nothing are dropped.
    pub fn set_words<S: AsRef<str>>(&mut self, words: &[S]) {
        self.words = normalize_words(words);
        self.new_game();
    }

    /// Validate a selection path, recording the word if it was found
    pub fn submit(&mut self, path: &[Position]) -> Result<Selection> {
        let outcome = classify(&self.board.grid, path, &self.remaining_words())?;
        if let Selection::Match { word, .. } = &outcome {
            log::debug!("found '{}' ({}/{})", word, self.found_words.len() + 1, self.words.len());
            self.found_words.push(word.clone());
        }
        Ok(outcome)
    }

    /// Validate the straight line between two picked cells
    pub fn select(&mut self, start: Position, end: Position) -> Result<Selection> {
        match line_between(start, end) {
            Some(path) => self.submit(&path),
            None => Ok(Selection::Invalid),
        }
    }

    /// Start cell of a random word that is still hidden.
    ///
    /// None when every placed word has been found.
    pub fn hint(&mut self) -> Option<Position> {
        let candidates: Vec<&Placement> = self
            .board
            .placements
            .iter()
            .filter(|p| !self.found_words.contains(&p.word))
            .collect();
        let start = self.generator.rng_mut().choose(&candidates)?.start;
        self.hints_used += 1;
        Some(start)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            difficulty: self.difficulty,
            words: self.words.clone(),
            found_words: self.found_words.clone(),
        }
    }
}
