use crate::{normalize, Difficulty, Direction, Grid, Position, RandomSource, SimpleRng};
use serde::{Deserialize, Serialize};

/// Where and how one word was embedded in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
    /// Cells occupied by the word, first letter first
    pub positions: Vec<Position>,
}

/// Result of one generation call: a filled grid and the words hidden in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub difficulty: Difficulty,
    pub grid: Grid,
    /// Successful placements in placement order. Words that found no slot are absent.
    pub placements: Vec<Placement>,
}

impl Board {
    pub fn placement_for(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word == word)
    }

    pub fn is_placed(&self, word: &str) -> bool {
        self.placement_for(word).is_some()
    }
}

/// Configuration for board generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Random probes per word before falling back to an exhaustive scan
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_attempts: 100 }
    }
}

/// Word search board generator
pub struct Generator<R: RandomSource = SimpleRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_rng(SimpleRng::new())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SimpleRng::with_seed(seed))
    }
}

impl<R: RandomSource> Generator<R> {
    /// Create a generator drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Generate a board hiding `words` at the given difficulty.
    ///
    /// Words are normalized first; words that normalize to nothing are
    /// skipped and words with no legal slot are left out of the placements.
    pub fn generate<S: AsRef<str>>(&mut self, words: &[S], difficulty: Difficulty) -> Board {
        let profile = difficulty.profile();
        let mut grid = Grid::new(profile.size);
        let mut placements = Vec::with_capacity(words.len());

        // Shuffle so input order does not decide who gets the open space
        let mut order: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        self.rng.shuffle(&mut order);

        for raw in order {
            let word = normalize(raw);
            if word.is_empty() {
                continue;
            }

            let placed = place_randomly(
                &mut grid,
                &word,
                profile.directions,
                self.config.max_attempts,
                &mut self.rng,
            )
            .or_else(|| place_exhaustively(&mut grid, &word, profile.directions));

            match placed {
                Some(placement) => placements.push(placement),
                None => log::debug!("no slot for '{}' on {}x{} grid", word, profile.size, profile.size),
            }
        }

        random_fill(&mut grid, &mut self.rng);

        log::debug!(
            "generated {} board: {}/{} words placed",
            difficulty.key(),
            placements.len(),
            words.len()
        );

        Board {
            difficulty,
            grid,
            placements,
        }
    }
}

/// Check whether `word` fits at `start` running along `direction`.
///
/// Every cell must be in bounds and either empty or already holding the same
/// letter. Nothing is written.
pub fn can_place_at(grid: &Grid, word: &str, start: Position, direction: Direction) -> bool {
    word.chars().enumerate().all(|(i, letter)| {
        start
            .offset(direction, i)
            .and_then(|pos| grid.get(pos))
            .is_some_and(|cell| cell.letter().map_or(true, |existing| existing == letter))
    })
}

/// Write `word` into the grid and record where it went.
///
/// Callers must have checked the slot with [`can_place_at`].
pub fn apply_placement(grid: &mut Grid, word: &str, start: Position, direction: Direction) -> Placement {
    let mut positions = Vec::with_capacity(word.len());
    for (i, letter) in word.chars().enumerate() {
        if let Some(pos) = start.offset(direction, i) {
            grid.set(pos, letter);
            positions.push(pos);
        }
    }
    Placement {
        word: word.to_string(),
        start,
        direction,
        positions,
    }
}

/// Probe up to `max_attempts` random (start, direction) pairs and place the
/// word at the first compatible one.
pub fn place_randomly<R: RandomSource>(
    grid: &mut Grid,
    word: &str,
    directions: &[Direction],
    max_attempts: usize,
    rng: &mut R,
) -> Option<Placement> {
    let size = grid.size();
    if word.is_empty() || size == 0 || directions.is_empty() {
        return None;
    }

    for _ in 0..max_attempts {
        let start = Position::new(rng.next_usize(size), rng.next_usize(size));
        let direction = *rng.choose(directions)?;
        if can_place_at(grid, word, start, direction) {
            return Some(apply_placement(grid, word, start, direction));
        }
    }
    None
}

/// Scan every position in row-major order, trying directions in the given
/// order, and place the word at the first compatible slot.
///
/// The scan order favours the top-left corner.
pub fn place_exhaustively(grid: &mut Grid, word: &str, directions: &[Direction]) -> Option<Placement> {
    if word.is_empty() {
        return None;
    }

    let slot = grid.positions().find_map(|start| {
        directions
            .iter()
            .find(|&&dir| can_place_at(grid, word, start, dir))
            .map(|&dir| (start, dir))
    })?;

    log::trace!("'{}' placed by exhaustive scan at {} going {}", word, slot.0, slot.1);
    Some(apply_placement(grid, word, slot.0, slot.1))
}

/// Fill every empty cell with a uniformly random letter A-Z
pub fn random_fill<R: RandomSource>(grid: &mut Grid, rng: &mut R) {
    let empty: Vec<Position> = grid
        .positions()
        .filter(|&pos| grid.get(pos).is_some_and(|c| c.is_empty()))
        .collect();
    for pos in empty {
        let letter = (b'A' + rng.next_usize(26) as u8) as char;
        grid.set(pos, letter);
    }
}
