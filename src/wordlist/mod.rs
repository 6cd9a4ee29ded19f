//! # Word Lists
//!
//! Sources of candidate words for a round.
//!
//! A word-list file holds one word per line. Blank lines and lines starting
//! with `#` are ignored. A `[name]` header starts a named list; words before
//! the first header go to the list called `default`. A header written as
//! `[name]*` marks that list as the selected one, otherwise the first list is
//! selected.
//!
//! ```text
//! # Animals, Swedish
//! [djur]*
//! katt
//! hund
//!
//! [fruit]
//! apple
//! ```

pub mod embedded;
pub mod loader;

pub use embedded::*;
pub use loader::*;

use crate::{WordfindError, WordfindResult};
use serde::{Deserialize, Serialize};

/// Name given to words that appear before any header.
pub const DEFAULT_LIST_NAME: &str = "default";

/// Anything that can supply the ordered candidate words for a round.
pub trait WordSource {
    /// Gets the candidate words in order.
    fn words(&self) -> WordfindResult<Vec<String>>;

    /// Human-readable name of the source.
    fn name(&self) -> &str;
}

/// A named list of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub name: String,
    pub words: Vec<String>,
}

impl WordList {
    /// Creates a named list.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordfind::{WordList, WordSource};
    ///
    /// let list = WordList::new("pets", vec!["cat".to_string(), "dog".to_string()]);
    /// assert_eq!(list.words().unwrap(), vec!["cat", "dog"]);
    /// ```
    pub fn new(name: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn words(&self) -> WordfindResult<Vec<String>> {
        if self.is_empty() {
            return Err(WordfindError::InvalidInput(format!(
                "Word list '{}' is empty",
                self.name
            )));
        }
        Ok(self.words.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Several named word lists with one of them selected.
///
/// Always holds at least one list, and `selected` always indexes one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWordListSet")]
pub struct WordListSet {
    lists: Vec<WordList>,
    selected: usize,
}

/// Unchecked serialized form of [`WordListSet`].
#[derive(Deserialize)]
struct RawWordListSet {
    lists: Vec<WordList>,
    selected: usize,
}

impl TryFrom<RawWordListSet> for WordListSet {
    type Error = WordfindError;

    fn try_from(raw: RawWordListSet) -> WordfindResult<Self> {
        let mut set = Self::new(raw.lists)?;
        if raw.selected >= set.lists.len() {
            return Err(WordfindError::InvalidInput(format!(
                "Selected list {} out of range for {} list(s)",
                raw.selected,
                set.lists.len()
            )));
        }
        set.selected = raw.selected;
        Ok(set)
    }
}

impl WordListSet {
    /// Creates a set with the first list selected.
    pub fn new(lists: Vec<WordList>) -> WordfindResult<Self> {
        if lists.is_empty() {
            return Err(WordfindError::InvalidInput(
                "No word lists defined".to_string(),
            ));
        }
        Ok(Self { lists, selected: 0 })
    }

    pub fn lists(&self) -> &[WordList] {
        &self.lists
    }

    /// Names of all lists in file order.
    pub fn names(&self) -> Vec<&str> {
        self.lists.iter().map(|list| list.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&WordList> {
        self.lists.iter().find(|list| list.name == name)
    }

    /// Selects a list by name.
    pub fn select(&mut self, name: &str) -> WordfindResult<()> {
        self.selected = self
            .lists
            .iter()
            .position(|list| list.name == name)
            .ok_or_else(|| WordfindError::WordListNotFound(name.to_string()))?;
        Ok(())
    }

    pub fn selected(&self) -> &WordList {
        &self.lists[self.selected]
    }
}

impl WordSource for WordListSet {
    fn words(&self) -> WordfindResult<Vec<String>> {
        self.selected().words()
    }

    fn name(&self) -> &str {
        self.selected().name()
    }
}

/// Parses word-list text into a set of lists.
pub fn parse_word_lists(text: &str) -> WordfindResult<WordListSet> {
    let mut lists: Vec<WordList> = Vec::new();
    let mut selected: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let (name, marked) = match header.strip_suffix("]*") {
                Some(name) => (name, true),
                None => (
                    header.strip_suffix(']').ok_or_else(|| {
                        WordfindError::InvalidInput(format!(
                            "Line {}: unterminated list header '{}'",
                            index + 1,
                            line
                        ))
                    })?,
                    false,
                ),
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(WordfindError::InvalidInput(format!(
                    "Line {}: list header without a name",
                    index + 1
                )));
            }
            if marked {
                selected = Some(name.to_string());
            }
            lists.push(WordList::new(name, Vec::new()));
            continue;
        }

        match lists.last_mut() {
            Some(list) => list.words.push(line.to_string()),
            None => lists.push(WordList::new(DEFAULT_LIST_NAME, vec![line.to_string()])),
        }
    }

    let mut set = WordListSet::new(lists)?;
    if let Some(name) = selected {
        set.select(&name)?;
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_list() {
        let set = parse_word_lists("cat\n\ndog\n# comment\nowl\n").unwrap();
        assert_eq!(set.names(), vec![DEFAULT_LIST_NAME]);
        assert_eq!(set.words().unwrap(), vec!["cat", "dog", "owl"]);
    }

    #[test]
    fn test_parse_named_lists() {
        let text = "[pets]\ncat\ndog\n[fruit]\napple\n";
        let set = parse_word_lists(text).unwrap();

        assert_eq!(set.names(), vec!["pets", "fruit"]);
        assert_eq!(set.name(), "pets");
        assert_eq!(set.get("fruit").unwrap().words, vec!["apple"]);
    }

    #[test]
    fn test_parse_selected_marker() {
        let text = "[pets]\ncat\n[fruit]*\napple\npear\n";
        let set = parse_word_lists(text).unwrap();

        assert_eq!(set.name(), "fruit");
        assert_eq!(set.words().unwrap(), vec!["apple", "pear"]);
    }

    #[test]
    fn test_select_unknown_list() {
        let mut set = parse_word_lists("[pets]\ncat\n").unwrap();
        assert!(matches!(
            set.select("birds"),
            Err(WordfindError::WordListNotFound(_))
        ));
        assert_eq!(set.name(), "pets");
    }

    #[test]
    fn test_parse_rejects_bad_headers() {
        assert!(parse_word_lists("[pets\ncat\n").is_err());
        assert!(parse_word_lists("[]\ncat\n").is_err());
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(matches!(
            parse_word_lists("# nothing here\n"),
            Err(WordfindError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deserialize_checks_selection() {
        let set = parse_word_lists("[pets]\ncat\n[fruit]*\napple\n").unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let loaded: WordListSet = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, set);
        assert_eq!(loaded.name(), "fruit");

        let out_of_range = r#"{"lists":[{"name":"pets","words":["cat"]}],"selected":3}"#;
        assert!(serde_json::from_str::<WordListSet>(out_of_range).is_err());

        let no_lists = r#"{"lists":[],"selected":0}"#;
        assert!(serde_json::from_str::<WordListSet>(no_lists).is_err());
    }

    #[test]
    fn test_empty_selected_list_has_no_words() {
        let set = parse_word_lists("[empty]\n").unwrap();
        assert!(set.words().is_err());
    }
}
