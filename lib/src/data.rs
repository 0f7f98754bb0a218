use crate::restrictions::ConstraintState;
use crate::results::WordleError;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contains all the possible words for a game, in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and empty lines are skipped. All words must have the same length.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let words = word_reader
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;
        WordBank::from_iterator(words)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to lower case, and empty words are skipped. All words
    /// must have the same length.
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut word_length = 0;
        let mut all_words = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let length = word.chars().count();
            if word_length == 0 {
                word_length = length;
            } else if length != word_length {
                return Err(WordleError::WordLength(word_length));
            }
            all_words.push(Arc::from(word.to_lowercase().as_str()));
        }
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff the bank has no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// The length of every word in the bank, or 0 if the bank is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Deduplicates and sorts a word list.
///
/// Words are trimmed and lower-cased first, and empty lines are dropped.
pub fn clean_word_list<S, I>(words: I) -> Vec<String>
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    words
        .into_iter()
        .map(|word| word.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Gets the words in `words` that are still possible, in their original order.
///
/// When `loose` is true only the excluded letters are checked, so the pool stays large while
/// few letters are confirmed. Otherwise fixed letters must also be in place.
pub fn filter_candidates(
    words: &[Arc<str>],
    state: &ConstraintState,
    loose: bool,
) -> Vec<Arc<str>> {
    let candidates: Vec<Arc<str>> = words
        .iter()
        .filter(|word| {
            if loose {
                state.is_loosely_satisfied_by(word)
            } else {
                state.is_satisfied_by(word)
            }
        })
        .map(Arc::clone)
        .collect();
    log::debug!(
        "{} of {} words remain ({} filter)",
        candidates.len(),
        words.len(),
        if loose { "loose" } else { "strict" }
    );
    candidates
}

/// Counts how often each letter occurs at each location across a word list.
///
/// This is built once from the full word list and not updated as the candidates shrink.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterFrequencyModel {
    num_words_by_location: Vec<HashMap<char, u32>>,
    num_words: u32,
}

impl LetterFrequencyModel {
    /// Counts the letters in each location of the given words.
    pub fn build<S>(words: &[S]) -> LetterFrequencyModel
    where
        S: AsRef<str>,
    {
        let mut num_words_by_location: Vec<HashMap<char, u32>> = Vec::new();
        for word in words {
            for (index, letter) in word.as_ref().chars().enumerate() {
                if num_words_by_location.len() <= index {
                    num_words_by_location.resize_with(index + 1, HashMap::new);
                }
                *num_words_by_location[index].entry(letter).or_insert(0) += 1;
            }
        }
        LetterFrequencyModel {
            num_words_by_location,
            num_words: words.len() as u32,
        }
    }

    /// The number of words the model was built from.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    /// Retrieves the count of words with the given letter at the given location.
    pub fn count(&self, location: usize, letter: char) -> u32 {
        self.num_words_by_location
            .get(location)
            .and_then(|counts| counts.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    /// The fraction of words with the given letter at the given location. Zero for an empty
    /// word list.
    pub fn frequency(&self, location: usize, letter: char) -> f64 {
        if self.num_words == 0 {
            return 0.0;
        }
        self.count(location, letter) as f64 / self.num_words as f64
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    macro_rules! assert_arc_eq {
        ($arc_vec:expr, $non_arc_vec:expr) => {
            assert_eq!(
                $arc_vec,
                $non_arc_vec
                    .iter()
                    .map(|thing| Arc::from(*thing))
                    .collect::<Vec<Arc<str>>>()
            );
        };
    }

    #[test]
    fn filter_candidates_fixed_letters() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["worda", "wordb", "other", "smore"])?;
        let mut state = ConstraintState::new(5);
        state.apply_feedback("cozzb", "02002")?;

        assert_arc_eq!(filter_candidates(&bank, &state, false), vec!["wordb"]);
        Ok(())
    }

    #[test]
    fn filter_candidates_excluded_letters() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["worda", "wordb", "other", "smore"])?;
        let mut state = ConstraintState::new(5);
        state.apply_feedback("oxxxx", "10000")?;

        assert_arc_eq!(
            filter_candidates(&bank, &state, false),
            vec!["worda", "wordb", "smore"]
        );
        Ok(())
    }

    #[test]
    fn filter_candidates_loose_ignores_fixed_letters() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["worda", "wordb", "other", "smore"])?;
        let mut state = ConstraintState::new(5);
        state.apply_feedback("cozzb", "02002")?;

        assert_arc_eq!(
            filter_candidates(&bank, &state, true),
            vec!["worda", "wordb", "other", "smore"]
        );
        Ok(())
    }

    #[test]
    fn filter_candidates_no_match() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["worda", "wordb", "other", "smore"])?;
        let mut state = ConstraintState::new(5);
        state.apply_feedback("wotxx", "02000")?;
        state.apply_feedback("xxxxb", "00002")?;

        assert!(filter_candidates(&bank, &state, false).is_empty());
        Ok(())
    }

    #[test]
    fn letter_frequency_model_count() {
        let model = LetterFrequencyModel::build(&["hello", "hallo", "worda"]);

        assert_eq!(model.num_words(), 3);
        assert_eq!(model.count(0, 'h'), 2);
        assert_eq!(model.count(1, 'e'), 1);
        assert_eq!(model.count(2, 'l'), 2);
        assert_eq!(model.count(3, 'l'), 2);
        assert_eq!(model.count(4, 'o'), 2);
        assert_eq!(model.count(1, 'a'), 1);
        assert_eq!(model.count(0, 'w'), 1);
        assert_eq!(model.count(4, 'a'), 1);

        // Missing letters:
        assert_eq!(model.count(1, 'h'), 0);
        assert_eq!(model.count(0, 'z'), 0);
        assert_eq!(model.count(7, 'h'), 0);
    }

    #[test]
    fn letter_frequency_model_frequency() {
        let model = LetterFrequencyModel::build(&["hello", "hallo", "worda", "other"]);

        assert_eq!(model.frequency(0, 'h'), 0.5);
        assert_eq!(model.frequency(0, 'o'), 0.25);
        assert_eq!(model.frequency(4, 'z'), 0.0);
    }

    #[test]
    fn letter_frequency_model_empty() {
        let model = LetterFrequencyModel::build::<&str>(&[]);

        assert_eq!(model.num_words(), 0);
        assert_eq!(model.frequency(0, 'a'), 0.0);
    }
}
