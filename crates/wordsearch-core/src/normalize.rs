use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Map raw text onto the grid alphabet: uppercase A-Z only, accents stripped.
///
/// Total: input with no usable letters yields an empty string.
pub fn normalize(raw: &str) -> String {
    raw.to_uppercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Normalize a word list, dropping entries that normalize to nothing
pub fn normalize_words<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|w| normalize(w.as_ref()))
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize("café"), "CAFE");
        assert_eq!(normalize("Família"), "FAMILIA");
        assert_eq!(normalize("abraço"), "ABRACO");
        assert_eq!(normalize("Ångström"), "ANGSTROM");
    }

    #[test]
    fn test_drops_non_letters() {
        assert_eq!(normalize("hello, world!"), "HELLOWORLD");
        assert_eq!(normalize("r2-d2"), "RD");
        assert_eq!(normalize("...!?"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("日本"), "");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["café", "Ünïcödé wörds", "  spaced out ", "ÇA", "ß", "x-y_z"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_words_filters_empty() {
        let words = normalize_words(&["pai", "???", "", "Respeito"]);
        assert_eq!(words, vec!["PAI".to_string(), "RESPEITO".to_string()]);
    }
}
