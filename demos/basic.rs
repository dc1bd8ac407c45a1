//! Basic example of using the word search engine

use wordsearch_core::{classify, line_between, normalize, Difficulty, Game, Generator, Position, DEFAULT_WORDS};

fn main() {
    // Generate a board
    println!("Generating a Normal board...\n");
    let mut generator = Generator::new();
    let board = generator.generate(&DEFAULT_WORDS, Difficulty::Normal);

    println!("{}", board.grid);
    for placement in &board.placements {
        println!("{:<10} at {} going {}", placement.word, placement.start, placement.direction);
    }

    // Validate a selection the way a host would after two clicks
    if let Some(placement) = board.placements.first() {
        let end = placement.positions[placement.positions.len() - 1];
        let path = line_between(end, placement.start).unwrap_or_default();
        match classify(&board.grid, &path, &DEFAULT_WORDS) {
            Ok(outcome) => println!("\nSelecting {} backwards: {:?}", placement.word, outcome),
            Err(e) => println!("\nSelection failed: {}", e),
        }
    }

    println!("\nnormalize(\"Família\") = {}", normalize("Família"));

    // Play a short session
    let mut game = Game::new(Difficulty::Easy, &["café", "sol", "lua"]);
    println!("\nEasy game with {:?}:\n{}", game.words(), game.grid());
    if let Some(hint) = game.hint() {
        println!("Hint: a word starts at {}", hint);
    }
    match game.select(Position::new(0, 0), Position::new(0, 2)) {
        Ok(outcome) => println!("Selecting (0, 0) to (0, 2): {:?}", outcome),
        Err(e) => println!("Selection failed: {}", e),
    }
    println!("Found so far: {:?}", game.found_words());
}
