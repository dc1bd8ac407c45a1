//! Snapshot persistence in the browser's localStorage
//!
//! Each snapshot field lives under its own key as a JSON value. Any failure
//! to read or parse falls back to the default for that field; write failures
//! are reported to the caller and logged, never raised.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;
use wordsearch_core::{Difficulty, Snapshot};

pub const DIFFICULTY_KEY: &str = "ws_difficulty";
pub const WORDS_KEY: &str = "ws_words";
pub const FOUND_KEY: &str = "ws_found";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn parse<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring corrupt '{}' in storage: {}", key, e);
            None
        }
    }
}

/// Build a snapshot from the raw stored values, defaulting anything missing
/// or unreadable. An empty saved word list counts as missing.
pub fn snapshot_from_values(
    difficulty: Option<&str>,
    words: Option<&str>,
    found: Option<&str>,
) -> Snapshot {
    let defaults = Snapshot::default();
    Snapshot {
        difficulty: parse::<Difficulty>(DIFFICULTY_KEY, difficulty).unwrap_or(defaults.difficulty),
        words: parse::<Vec<String>>(WORDS_KEY, words)
            .filter(|w| !w.is_empty())
            .unwrap_or(defaults.words),
        found_words: parse::<Vec<String>>(FOUND_KEY, found).unwrap_or_default(),
    }
}

/// Load the saved snapshot, or the defaults when storage is unavailable
pub fn load_snapshot() -> Snapshot {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, starting from defaults");
        return Snapshot::default();
    };
    let read = |key: &str| storage.get_item(key).ok().flatten();
    snapshot_from_values(
        read(DIFFICULTY_KEY).as_deref(),
        read(WORDS_KEY).as_deref(),
        read(FOUND_KEY).as_deref(),
    )
}

fn write<T: Serialize + ?Sized>(storage: &Storage, key: &str, value: &T) -> bool {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("could not encode '{}': {}", key, e);
            return false;
        }
    };
    match storage.set_item(key, &json) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not save '{}': {:?}", key, e);
            false
        }
    }
}

/// Save every snapshot field. Returns false if any write failed.
pub fn save_snapshot(snapshot: &Snapshot) -> bool {
    let Some(storage) = local_storage() else {
        return false;
    };
    let difficulty = write(&storage, DIFFICULTY_KEY, &snapshot.difficulty);
    let words = write(&storage, WORDS_KEY, &snapshot.words);
    let found = write(&storage, FOUND_KEY, &snapshot.found_words);
    difficulty && words && found
}

/// Remove every saved key
pub fn clear() -> bool {
    let Some(storage) = local_storage() else {
        return false;
    };
    [DIFFICULTY_KEY, WORDS_KEY, FOUND_KEY]
        .iter()
        .all(|key| storage.remove_item(key).is_ok())
}
