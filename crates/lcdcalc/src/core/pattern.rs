//! Background pattern cycler
//!
//! Round-robin over a fixed list of decorative patterns. Advancing from the
//! first pattern always moves to the second, so a freshly started app never
//! "advances" to the pattern it already shows.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::CalcResult;
use crate::storage::{Storage, StorageError, PATTERN_KEY};

/// Patterns shipped with the calculator
pub const DEFAULT_PATTERN_URLS: [&str; 5] = [
    "patterns/bubbles.png",
    "patterns/circuit-board.png",
    "patterns/diagonal-lines.png",
    "patterns/hexagons.png",
    "patterns/topography.png",
];

/// A background pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Short name, e.g. `circuit-board`
    pub name: String,
    /// Asset location
    pub url: String,
}

impl Pattern {
    /// Creates a pattern, deriving its name from the last url segment
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let file = url.rsplit('/').next().unwrap_or(&url);
        let name = file.split('.').next().unwrap_or(file).to_string();
        Self { name, url }
    }
}

/// Stored shape under the `pattern` key
#[derive(Debug, Serialize, Deserialize)]
struct StoredPattern {
    pattern: Pattern,
    count: usize,
}

/// Current pattern, cycle cursor and animation state
#[derive(Debug, Clone)]
pub struct PatternCycler {
    patterns: Vec<Pattern>,
    current: usize,
    counter: usize,
    paused: bool,
}

impl Default for PatternCycler {
    fn default() -> Self {
        Self::from_urls(DEFAULT_PATTERN_URLS)
    }
}

impl PatternCycler {
    /// Cycler over `patterns`, showing the first one
    #[must_use]
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self {
            patterns,
            current: 0,
            counter: 0,
            paused: false,
        }
    }

    /// Cycler over pattern urls
    #[must_use]
    pub fn from_urls<I, U>(urls: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<String>,
    {
        Self::new(urls.into_iter().map(Pattern::new).collect())
    }

    /// Every known pattern
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Pattern currently shown; `None` when the list is empty
    #[must_use]
    pub fn current(&self) -> Option<&Pattern> {
        self.patterns.get(self.current)
    }

    /// Moves to the next pattern
    pub fn advance(&mut self) -> Option<&Pattern> {
        if self.patterns.is_empty() {
            return None;
        }
        if self.current == 0 {
            self.counter = 1;
        }
        if self.counter >= self.patterns.len() {
            self.counter = 0;
        }

        self.current = self.counter;
        self.counter += 1;
        debug!(pattern = %self.patterns[self.current].name, "pattern advanced");
        self.patterns.get(self.current)
    }

    /// Pauses or resumes the animation; returns the new paused state
    pub fn toggle_animation(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Whether the animation is paused
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Writes the current pattern and cursor under the `pattern` key
    pub fn persist<S: Storage + ?Sized>(&self, storage: &mut S) -> CalcResult<()> {
        let Some(pattern) = self.current().cloned() else {
            return Ok(());
        };
        let stored = StoredPattern {
            pattern,
            count: self.current,
        };
        let json = serde_json::to_string(&stored).map_err(StorageError::from)?;
        storage.set_item(PATTERN_KEY, &json)?;
        Ok(())
    }

    /// Picks up the stored pattern, if it is one of ours
    ///
    /// Absent, malformed or unknown state leaves the cycler untouched.
    pub fn restore<S: Storage + ?Sized>(&mut self, storage: &S) {
        let json = match storage.get_item(PATTERN_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "could not read stored pattern");
                return;
            }
        };
        let stored: StoredPattern = match serde_json::from_str(&json) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "ignoring malformed stored pattern");
                return;
            }
        };
        let Some(index) = self
            .patterns
            .iter()
            .position(|p| p.name == stored.pattern.name)
        else {
            debug!(pattern = %stored.pattern.name, "stored pattern no longer available");
            return;
        };

        self.current = index;
        self.counter = if stored.count >= self.patterns.len() {
            0
        } else {
            stored.count + 1
        };
        debug!(pattern = %stored.pattern.name, "restored pattern");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn names(cycler: &mut PatternCycler, steps: usize) -> Vec<String> {
        (0..steps)
            .map(|_| cycler.advance().unwrap().name.clone())
            .collect()
    }

    // ===== Pattern =====

    #[test]
    fn test_pattern_name_from_url() {
        let p = Pattern::new("img/patterns/circuit-board.png");
        assert_eq!(p.name, "circuit-board");
        assert_eq!(p.url, "img/patterns/circuit-board.png");
    }

    #[test]
    fn test_pattern_name_without_directory_or_extension() {
        assert_eq!(Pattern::new("waves").name, "waves");
        assert_eq!(Pattern::new("a/b/dots.min.svg").name, "dots");
    }

    // ===== Cycling =====

    #[test]
    fn test_starts_on_first() {
        let cycler = PatternCycler::default();
        assert_eq!(cycler.current().unwrap().name, "bubbles");
    }

    #[test]
    fn test_advance_never_repeats_and_wraps() {
        let mut cycler = PatternCycler::from_urls(["a.png", "b.png", "c.png"]);
        assert_eq!(names(&mut cycler, 5), vec!["b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_advance_single_pattern() {
        let mut cycler = PatternCycler::from_urls(["only.png"]);
        assert_eq!(cycler.advance().unwrap().name, "only");
        assert_eq!(cycler.advance().unwrap().name, "only");
    }

    #[test]
    fn test_advance_empty_list() {
        let mut cycler = PatternCycler::new(Vec::new());
        assert!(cycler.current().is_none());
        assert!(cycler.advance().is_none());
    }

    #[test]
    fn test_toggle_animation() {
        let mut cycler = PatternCycler::default();
        assert!(!cycler.is_paused());
        assert!(cycler.toggle_animation());
        assert!(cycler.is_paused());
        assert!(!cycler.toggle_animation());
    }

    // ===== Persistence =====

    #[test]
    fn test_persist_shape() {
        let mut cycler = PatternCycler::from_urls(["x/a.png", "x/b.png"]);
        cycler.advance();
        let mut storage = MemoryStorage::new();
        cycler.persist(&mut storage).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&storage.get_item(PATTERN_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(value["pattern"]["name"], "b");
        assert_eq!(value["pattern"]["url"], "x/b.png");
        assert_eq!(value["count"], 1);
    }

    #[test]
    fn test_restore_continues_after_stored() {
        let urls = ["a.png", "b.png", "c.png", "d.png"];
        let mut first = PatternCycler::from_urls(urls);
        first.advance();
        first.advance();
        let mut storage = MemoryStorage::new();
        first.persist(&mut storage).unwrap();

        let mut second = PatternCycler::from_urls(urls);
        second.restore(&storage);
        assert_eq!(second.current().unwrap().name, "c");
        assert_eq!(second.advance().unwrap().name, "d");
        assert_eq!(second.advance().unwrap().name, "a");
        assert_eq!(second.advance().unwrap().name, "b");
    }

    #[test]
    fn test_restore_last_wraps() {
        let urls = ["a.png", "b.png", "c.png"];
        let mut storage = MemoryStorage::new();
        storage
            .set_item(
                PATTERN_KEY,
                r#"{"pattern":{"name":"c","url":"c.png"},"count":2}"#,
            )
            .unwrap();
        let mut cycler = PatternCycler::from_urls(urls);
        cycler.restore(&storage);
        assert_eq!(cycler.current().unwrap().name, "c");
        assert_eq!(cycler.advance().unwrap().name, "a");
    }

    #[test]
    fn test_restore_unknown_or_malformed_ignored() {
        let mut storage = MemoryStorage::new();
        storage
            .set_item(
                PATTERN_KEY,
                r#"{"pattern":{"name":"gone","url":"gone.png"},"count":1}"#,
            )
            .unwrap();
        let mut cycler = PatternCycler::default();
        cycler.restore(&storage);
        assert_eq!(cycler.current().unwrap().name, "bubbles");

        storage.set_item(PATTERN_KEY, "][").unwrap();
        cycler.restore(&storage);
        assert_eq!(cycler.current().unwrap().name, "bubbles");
    }
}
