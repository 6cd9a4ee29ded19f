//! Embedded word lists
//!
//! Word lists compiled into the binary so the game runs without a file.

use super::{parse_word_lists, WordListSet};
use crate::WordfindResult;

/// Built-in lists in word-list file format.
pub const EMBEDDED_WORD_LISTS: &str = "\
# Djur
[djur]*
katt
hund
häst
älg
björn
räv
uggla
mus
orm
get

# Frukt
[frukt]
äpple
päron
banan
plommon
kiwi
melon
citron

# Animals
[animals]
cat
dog
horse
moose
bear
fox
owl
mouse
snake
goat
";

/// Parses the built-in word lists.
pub fn embedded_word_lists() -> WordfindResult<WordListSet> {
    parse_word_lists(EMBEDDED_WORD_LISTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DIMENSION;
    use crate::{normalize_word, WordSource};

    #[test]
    fn embedded_lists_parse() {
        let set = embedded_word_lists().unwrap();
        assert_eq!(set.names(), vec!["djur", "frukt", "animals"]);
        assert_eq!(set.name(), "djur");
    }

    #[test]
    fn embedded_words_fit_default_board() {
        let set = embedded_word_lists().unwrap();
        for list in set.lists() {
            for word in list.words().unwrap() {
                let normalized = normalize_word(&word);
                assert_eq!(normalized.as_deref(), Some(word.as_str()), "'{word}' is not normalized");
                assert!(
                    word.chars().count() <= DEFAULT_DIMENSION,
                    "'{word}' does not fit a {DEFAULT_DIMENSION}x{DEFAULT_DIMENSION} board"
                );
            }
        }
    }
}
