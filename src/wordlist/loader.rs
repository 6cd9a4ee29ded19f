//! Word list loading utilities
//!
//! Loading is asynchronous and bounded: a source that does not become ready
//! within its timeout fails with [`WordfindError::Timeout`] instead of
//! leaving the game waiting.

use super::{parse_word_lists, WordListSet};
use crate::{WordfindError, WordfindResult};
use log::{debug, info};
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// Waits for a readiness future, failing once `timeout` has elapsed.
pub async fn wait_ready<T, F>(what: &str, timeout: Duration, ready: F) -> WordfindResult<T>
where
    F: Future<Output = WordfindResult<T>>,
{
    tokio::time::timeout(timeout, ready)
        .await
        .map_err(|_| WordfindError::Timeout {
            what: what.to_string(),
            millis: timeout.as_millis(),
        })?
}

/// Loads and parses a word-list file.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use wordfind::{load_word_lists, WordSource};
///
/// # async fn run() -> wordfind::WordfindResult<()> {
/// let lists = load_word_lists("words.txt", Duration::from_secs(10)).await?;
/// println!("Playing '{}'", lists.name());
/// # Ok(())
/// # }
/// ```
pub async fn load_word_lists(path: impl AsRef<Path>, timeout: Duration) -> WordfindResult<WordListSet> {
    let path = path.as_ref();
    let what = format!("word list {}", path.display());

    let text = wait_ready(&what, timeout, async {
        tokio::fs::read_to_string(path)
            .await
            .map_err(WordfindError::from)
    })
    .await?;

    let set = parse_word_lists(&text)?;
    info!(
        "Loaded {} word list(s) from {}: {:?}",
        set.lists().len(),
        path.display(),
        set.names()
    );
    for list in set.lists() {
        debug!("List '{}' holds {} word(s)", list.name, list.len());
    }
    Ok(set)
}

/// Blocking wrapper around [`load_word_lists`] for callers without a runtime.
pub fn load_word_lists_blocking(path: impl AsRef<Path>, timeout: Duration) -> WordfindResult<WordListSet> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(load_word_lists(path, timeout))
}
