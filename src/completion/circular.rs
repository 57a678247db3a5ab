/// Rotation state for repeated synonym replacement of the active word.
///
/// The state belongs to the word the last rotation put into the buffer, at the
/// offset where it put it. As soon as the active word is anything else, the
/// rotation starts over with the synonyms of the new word.
///
/// A fresh rotation begins with the second synonym, wrapping around for
/// single-entry lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymCycle {
    last_word: Option<(String, usize)>,
    synonyms: Vec<String>,
    index: usize,
}

/// Index a fresh rotation starts from
const START_INDEX: usize = 1;

impl Default for SynonymCycle {
    fn default() -> Self {
        SynonymCycle {
            last_word: None,
            synonyms: Vec::new(),
            index: START_INDEX,
        }
    }
}

impl SynonymCycle {
    fn reset(&mut self) {
        self.last_word = None;
        self.synonyms.clear();
        self.index = START_INDEX;
    }

    fn owns(&self, word: &str, from: usize) -> bool {
        matches!(&self.last_word, Some((last, at)) if last == word && *at == from)
    }

    /// Drop the rotation unless `word` at `from` is the word it produced
    pub fn observe(&mut self, word: &str, from: usize) {
        if !self.owns(word, from) {
            self.reset();
        }
    }

    /// Next replacement for `word`, located at `from`.
    ///
    /// `lookup` is only called when a new rotation starts. Returns `None` when
    /// there are no synonyms.
    pub fn advance<F>(&mut self, word: &str, from: usize, lookup: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<Vec<String>>,
    {
        self.observe(word, from);
        if self.last_word.is_none() {
            self.synonyms = lookup(word).unwrap_or_default();
        }
        if self.synonyms.is_empty() {
            self.reset();
            return None;
        }

        let replacement = self.synonyms[self.index % self.synonyms.len()].clone();
        self.index = (self.index + 1) % self.synonyms.len();
        self.last_word = Some((replacement.clone(), from));
        Some(replacement)
    }

    /// Key the rotation to the word as it ended up in the buffer.
    ///
    /// Replacement may change the casing, this keeps the rotation alive.
    pub fn rekey(&mut self, word: &str, from: usize) {
        if self.last_word.is_some() {
            self.last_word = Some((word.to_string(), from));
        }
    }

    /// Position of the next synonym in the rotation
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether a rotation is in progress
    pub fn is_active(&self) -> bool {
        self.last_word.is_some()
    }
}
