//! WebAssembly bindings for the word search engine
//!
//! Exposes a `WordSearchGame` class that owns a game session and keeps its
//! snapshot in localStorage, plus the normalizer and the constant tables.
//!
//! Usage from JavaScript:
//!
//!   const game = new WordSearchGame();      // restores the saved session
//!   game.grid();                            // => [["P", "X", ...], ...]
//!   game.select(0, 0, 0, 2);                // => { outcome: "match", word: "PAI", orientation: "forward" }
//!   game.hint();                            // => { row: 3, col: 5 } or null
//!   game.setDifficulty("hard");
//!   normalize("café");                      // => "CAFE"

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wordsearch_core::{Board, Difficulty, Game, Placement, Position, Snapshot, DIRECTIONS};

mod logging;
mod storage;

#[cfg(test)]
mod tests;

// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init_logger(cfg!(debug_assertions));
}

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPlacement {
    word: String,
    start_row: usize,
    start_col: usize,
    direction: usize,
    direction_name: &'static str,
    positions: Vec<Position>,
}

impl From<&Placement> for JsPlacement {
    fn from(p: &Placement) -> Self {
        Self {
            word: p.word.clone(),
            start_row: p.start.row,
            start_col: p.start.col,
            direction: p.direction.index(),
            direction_name: p.direction.name(),
            positions: p.positions.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDifficulty {
    key: &'static str,
    label: String,
    size: usize,
    directions: Vec<usize>,
}

impl From<Difficulty> for JsDifficulty {
    fn from(d: Difficulty) -> Self {
        let profile = d.profile();
        Self {
            key: d.key(),
            label: d.to_string(),
            size: profile.size,
            directions: profile.directions.iter().map(|dir| dir.index()).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDirection {
    index: usize,
    name: &'static str,
    dx: isize,
    dy: isize,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn core_error_to_js(e: wordsearch_core::Error) -> JsError {
    JsError::new(&e.to_string())
}

fn placements_dto(board: &Board) -> Vec<JsPlacement> {
    board.placements.iter().map(JsPlacement::from).collect()
}

// ============================================================================
// Free functions
// ============================================================================

/// Normalize raw text to the grid alphabet
#[wasm_bindgen]
pub fn normalize(raw: &str) -> String {
    wordsearch_core::normalize(raw)
}

/// The difficulty table: `[{ key, label, size, directions }]`
#[wasm_bindgen]
pub fn difficulties() -> Result<JsValue, JsError> {
    let table: Vec<JsDifficulty> = Difficulty::all_levels().iter().map(|&d| d.into()).collect();
    to_js(&table)
}

/// The direction table: `[{ index, name, dx, dy }]`
#[wasm_bindgen]
pub fn directions() -> Result<JsValue, JsError> {
    let table: Vec<JsDirection> = DIRECTIONS
        .iter()
        .map(|&dir| {
            let (dx, dy) = dir.delta();
            JsDirection {
                index: dir.index(),
                name: dir.name(),
                dx,
                dy,
            }
        })
        .collect();
    to_js(&table)
}

// ============================================================================
// WordSearchGame
// ============================================================================

/// A word search session persisted to localStorage
#[wasm_bindgen]
pub struct WordSearchGame {
    game: Game,
}

impl Default for WordSearchGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WordSearchGame {
    /// Restore the saved session, or start from the defaults
    #[wasm_bindgen(constructor)]
    pub fn new() -> WordSearchGame {
        let game = WordSearchGame {
            game: Game::from_snapshot(storage::load_snapshot()),
        };
        game.persist();
        game
    }

    /// Regenerate the board with the same words
    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self) {
        self.game.new_game();
        self.persist();
    }

    /// Switch difficulty by key (`easy`, `normal`, `hard`) and regenerate
    #[wasm_bindgen(js_name = setDifficulty)]
    pub fn set_difficulty(&mut self, key: &str) -> Result<(), JsError> {
        let difficulty: Difficulty = key.parse().map_err(core_error_to_js)?;
        self.game.set_difficulty(difficulty);
        self.persist();
        Ok(())
    }

    /// Replace the word list and regenerate
    #[wasm_bindgen(js_name = setWords)]
    pub fn set_words(&mut self, words: Vec<String>) {
        self.game.set_words(&words);
        self.persist();
    }

    /// Validate the straight line between two clicked cells
    pub fn select(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    ) -> Result<JsValue, JsError> {
        let outcome = self
            .game
            .select(Position::new(start_row, start_col), Position::new(end_row, end_col))
            .map_err(core_error_to_js)?;
        if outcome.is_match() {
            self.persist();
        }
        to_js(&outcome)
    }

    /// Validate an explicit path of `{ row, col }` objects
    #[wasm_bindgen(js_name = submitPath)]
    pub fn submit_path(&mut self, path: JsValue) -> Result<JsValue, JsError> {
        let path: Vec<Position> =
            serde_wasm_bindgen::from_value(path).map_err(|e| JsError::new(&e.to_string()))?;
        let outcome = self.game.submit(&path).map_err(core_error_to_js)?;
        if outcome.is_match() {
            self.persist();
        }
        to_js(&outcome)
    }

    /// Start cell of a hidden word as `{ row, col }`, or null
    pub fn hint(&mut self) -> Result<JsValue, JsError> {
        match self.game.hint() {
            Some(pos) => to_js(&pos),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// Grid letters as an array of rows, each an array of one-letter strings
    pub fn grid(&self) -> js_sys::Array {
        self.game
            .grid()
            .rows()
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| JsValue::from_str(&c.to_string()))
                    .collect::<js_sys::Array>()
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.game.grid().size()
    }

    /// Placed words: `[{ word, startRow, startCol, direction, directionName, positions }]`
    pub fn placements(&self) -> Result<JsValue, JsError> {
        to_js(&placements_dto(self.game.board()))
    }

    pub fn words(&self) -> Vec<String> {
        self.game.words().to_vec()
    }

    #[wasm_bindgen(js_name = foundWords)]
    pub fn found_words(&self) -> Vec<String> {
        self.game.found_words().to_vec()
    }

    #[wasm_bindgen(js_name = unplacedWords)]
    pub fn unplaced_words(&self) -> Vec<String> {
        self.game.unplaced_words().into_iter().map(String::from).collect()
    }

    pub fn difficulty(&self) -> String {
        self.game.difficulty().key().to_string()
    }

    #[wasm_bindgen(js_name = hintsUsed)]
    pub fn hints_used(&self) -> usize {
        self.game.hints_used()
    }

    /// Current snapshot as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }

    /// Replace the session from snapshot JSON, regenerating the board
    #[wasm_bindgen(js_name = loadStateJson)]
    pub fn load_state_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Snapshot>(json) {
            Ok(snapshot) => {
                self.game = Game::from_snapshot(snapshot);
                self.persist();
                true
            }
            Err(e) => {
                log::warn!("rejected state json: {}", e);
                false
            }
        }
    }

    /// Forget the saved session and start over from the defaults
    pub fn reset(&mut self) {
        storage::clear();
        self.game = Game::default();
        self.persist();
    }

    fn persist(&self) {
        if !storage::save_snapshot(&self.game.snapshot()) {
            log::debug!("snapshot not saved");
        }
    }
}
