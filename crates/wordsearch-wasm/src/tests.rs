//! Tests for the WASM glue that do not need a browser

use crate::storage::snapshot_from_values;
use crate::{JsDifficulty, JsPlacement};
use wordsearch_core::{Difficulty, Direction, Generator, Placement, Position, DEFAULT_WORDS};

#[test]
fn test_snapshot_from_stored_values() {
    let snapshot = snapshot_from_values(
        Some("\"hard\""),
        Some("[\"PAI\",\"AMOR\"]"),
        Some("[\"PAI\"]"),
    );
    assert_eq!(snapshot.difficulty, Difficulty::Hard);
    assert_eq!(snapshot.words, vec!["PAI".to_string(), "AMOR".to_string()]);
    assert_eq!(snapshot.found_words, vec!["PAI".to_string()]);
}

#[test]
fn test_missing_values_use_defaults() {
    let snapshot = snapshot_from_values(None, None, None);
    assert_eq!(snapshot.difficulty, Difficulty::Normal);
    assert_eq!(snapshot.words.len(), DEFAULT_WORDS.len());
    assert!(snapshot.found_words.is_empty());
}

#[test]
fn test_corrupt_values_use_defaults() {
    let snapshot = snapshot_from_values(Some("hard"), Some("{not json"), Some("42"));
    assert_eq!(snapshot.difficulty, Difficulty::Normal);
    assert_eq!(snapshot.words.len(), DEFAULT_WORDS.len());
    assert!(snapshot.found_words.is_empty());
}

#[test]
fn test_empty_saved_word_list_uses_defaults() {
    let snapshot = snapshot_from_values(Some("\"easy\""), Some("[]"), None);
    assert_eq!(snapshot.difficulty, Difficulty::Easy);
    assert_eq!(snapshot.words.len(), DEFAULT_WORDS.len());
}

#[test]
fn test_placement_dto_shape() {
    let placement = Placement {
        word: "PAI".to_string(),
        start: Position::new(2, 3),
        direction: Direction::Down,
        positions: vec![Position::new(2, 3), Position::new(3, 3), Position::new(4, 3)],
    };
    let json = serde_json::to_value(JsPlacement::from(&placement)).unwrap();
    assert_eq!(json["word"], "PAI");
    assert_eq!(json["startRow"], 2);
    assert_eq!(json["startCol"], 3);
    assert_eq!(json["direction"], 4);
    assert_eq!(json["directionName"], "down");
    assert_eq!(json["positions"][2]["row"], 4);
}

#[test]
fn test_difficulty_dto_shape() {
    let json = serde_json::to_value(JsDifficulty::from(Difficulty::Easy)).unwrap();
    assert_eq!(json["key"], "easy");
    assert_eq!(json["label"], "Easy");
    assert_eq!(json["size"], 10);
    assert_eq!(json["directions"], serde_json::json!([2, 4]));
}

#[test]
fn test_board_placements_convert() {
    let board = Generator::with_seed(5).generate(&DEFAULT_WORDS, Difficulty::Normal);
    let dtos = crate::placements_dto(&board);
    assert_eq!(dtos.len(), board.placements.len());
    for (dto, placement) in dtos.iter().zip(&board.placements) {
        assert_eq!(dto.word, placement.word);
        assert_eq!(dto.direction, placement.direction.index());
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use crate::WordSearchGame;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_game_persists_difficulty() {
        let mut game = WordSearchGame::new();
        game.set_difficulty("easy").unwrap();
        assert_eq!(game.size(), 10);

        let restored = WordSearchGame::new();
        assert_eq!(restored.difficulty(), "easy");
    }

    #[wasm_bindgen_test]
    fn test_set_words_normalizes() {
        let mut game = WordSearchGame::new();
        game.set_words(vec!["café".to_string(), "!!".to_string()]);
        assert_eq!(game.words(), vec!["CAFE".to_string()]);
        game.reset();
        assert_eq!(game.difficulty(), "normal");
    }
}
