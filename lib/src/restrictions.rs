use crate::results::parse_feedback;
use crate::results::FeedbackCode;
use crate::results::GuessResult;
use crate::results::WordleError;
use std::collections::HashSet;
use std::iter::zip;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The letters a word may contain.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The letters treated as vowels when scoring.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Everything learned from the feedback given so far in one game.
///
/// The state only changes through [`ConstraintState::apply_feedback`] (or
/// [`ConstraintState::apply_result`]), once per guess. A call that fails leaves the state exactly
/// as it was, so the caller can retry with corrected input.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ConstraintStateFields"))]
pub struct ConstraintState {
    word_length: usize,
    /// The letter known to be at each location, if any.
    fixed: Vec<Option<char>>,
    /// Letters known not to be at each location.
    excluded_at: Vec<HashSet<char>>,
    /// Letters known to be in the word that may still belong at each location.
    floating: Vec<HashSet<char>>,
    /// Letters that have not received any feedback yet.
    unexplored: HashSet<char>,
    /// Every letter that has been marked as present elsewhere.
    present_elsewhere: HashSet<char>,
}

/// The serialized form of a [`ConstraintState`], checked before it is accepted.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ConstraintStateFields {
    word_length: usize,
    fixed: Vec<Option<char>>,
    excluded_at: Vec<HashSet<char>>,
    floating: Vec<HashSet<char>>,
    unexplored: HashSet<char>,
    present_elsewhere: HashSet<char>,
}

#[cfg(feature = "serde")]
impl TryFrom<ConstraintStateFields> for ConstraintState {
    type Error = WordleError;

    fn try_from(fields: ConstraintStateFields) -> Result<Self, Self::Error> {
        for (input, actual) in [
            ("fixed", fields.fixed.len()),
            ("excluded_at", fields.excluded_at.len()),
            ("floating", fields.floating.len()),
        ] {
            if actual != fields.word_length {
                return Err(WordleError::LengthMismatch {
                    input,
                    expected: fields.word_length,
                    actual,
                });
            }
        }
        Ok(ConstraintState {
            word_length: fields.word_length,
            fixed: fields.fixed,
            excluded_at: fields.excluded_at,
            floating: fields.floating,
            unexplored: fields.unexplored,
            present_elsewhere: fields.present_elsewhere,
        })
    }
}

impl ConstraintState {
    /// Creates an empty state for words of the given length, with the whole alphabet unexplored.
    pub fn new(word_length: usize) -> ConstraintState {
        ConstraintState {
            word_length,
            fixed: vec![None; word_length],
            excluded_at: vec![HashSet::new(); word_length],
            floating: vec![HashSet::new(); word_length],
            unexplored: ALPHABET.iter().copied().collect(),
            present_elsewhere: HashSet::new(),
        }
    }

    /// The length of the words this state applies to.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The letter confirmed at `position`, if any.
    pub fn fixed(&self, position: usize) -> Option<char> {
        self.fixed.get(position).copied().flatten()
    }

    /// Letters that can't be at `position`. Empty for positions outside the word.
    pub fn excluded_at(&self, position: usize) -> impl Iterator<Item = char> + '_ {
        self.excluded_at
            .get(position)
            .into_iter()
            .flat_map(|letters| letters.iter().copied())
    }

    /// Returns `true` iff `letter` is known not to be at `position`.
    pub fn is_excluded_at(&self, position: usize, letter: char) -> bool {
        self.excluded_at
            .get(position)
            .map_or(false, |letters| letters.contains(&letter))
    }

    /// Letters known to be in the word that may land at `position`.
    pub fn floating(&self, position: usize) -> impl Iterator<Item = char> + '_ {
        self.floating
            .get(position)
            .into_iter()
            .flat_map(|letters| letters.iter().copied())
    }

    /// Returns `true` iff `letter` is a floating candidate for `position`.
    pub fn is_floating_at(&self, position: usize, letter: char) -> bool {
        self.floating
            .get(position)
            .map_or(false, |letters| letters.contains(&letter))
    }

    /// Letters that have never received any feedback.
    pub fn unexplored(&self) -> &HashSet<char> {
        &self.unexplored
    }

    /// Returns `true` iff `letter` has not received any feedback yet.
    pub fn is_unexplored(&self, letter: char) -> bool {
        self.unexplored.contains(&letter)
    }

    /// Unexplored vowels.
    pub fn unexplored_vowels(&self) -> HashSet<char> {
        VOWELS
            .iter()
            .copied()
            .filter(|vowel| self.unexplored.contains(vowel))
            .collect()
    }

    /// All fixed letters, plus every letter ever marked as present elsewhere.
    pub fn required_letters(&self) -> HashSet<char> {
        self.fixed
            .iter()
            .flatten()
            .copied()
            .chain(self.present_elsewhere.iter().copied())
            .collect()
    }

    /// The union of the floating letters across all locations, plus all fixed letters.
    pub fn all_floating_letters(&self) -> HashSet<char> {
        self.floating
            .iter()
            .flat_map(|letters| letters.iter().copied())
            .chain(self.fixed.iter().flatten().copied())
            .collect()
    }

    /// Renders the known letters, with `_` for unknown locations, e.g. `"_r_n_"`.
    pub fn pattern(&self) -> String {
        self.fixed
            .iter()
            .map(|maybe_letter| maybe_letter.unwrap_or('_'))
            .collect()
    }

    /// Adds the information from a guess and its feedback string (e.g. `"crane"` and `"02010"`).
    ///
    /// Both strings must have one entry per letter, and the feedback may only contain `0`, `1`,
    /// or `2`. If either check fails the state is left unchanged.
    pub fn apply_feedback(&mut self, guess: &str, feedback: &str) -> Result<(), WordleError> {
        let results = parse_feedback(feedback)?;
        self.apply_result(&GuessResult { guess, results })
    }

    /// Adds the information from the given guess result.
    ///
    /// The result is validated before any change is made, so on error the state is unchanged.
    pub fn apply_result(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        let guess_length = guess_result.guess.chars().count();
        if guess_length != self.word_length {
            return Err(WordleError::LengthMismatch {
                input: "guess",
                expected: self.word_length,
                actual: guess_length,
            });
        }
        if guess_result.results.len() != self.word_length {
            return Err(WordleError::LengthMismatch {
                input: "feedback",
                expected: self.word_length,
                actual: guess_result.results.len(),
            });
        }

        for ((index, letter), code) in zip(
            guess_result.guess.chars().enumerate(),
            guess_result.results.iter(),
        ) {
            self.unexplored.remove(&letter);
            match code {
                FeedbackCode::Absent => {
                    self.excluded_at[index].insert(letter);
                }
                FeedbackCode::PresentElsewhere => self.set_present_elsewhere(letter, index),
                FeedbackCode::Correct => self.set_fixed(letter, index),
            }
        }
        log::debug!(
            "Applied {} -> {}: known letters {}, {} unexplored",
            guess_result.guess,
            guess_result
                .results
                .iter()
                .map(|code| code.to_char())
                .collect::<String>(),
            self.pattern(),
            self.unexplored.len()
        );
        Ok(())
    }

    /// Returns `true` iff the word avoids every excluded letter at its location and has every
    /// fixed letter in place.
    ///
    /// Required letters are not enforced: a word missing a letter that is known to be present
    /// still matches, and that only shows up in its score. Callers that want a stricter pool can
    /// check [`ConstraintState::required_letters`] themselves.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        self.matches(word, true)
    }

    /// Like [`ConstraintState::is_satisfied_by`], but ignores fixed letters. Only the excluded
    /// letters are enforced.
    pub fn is_loosely_satisfied_by(&self, word: &str) -> bool {
        self.matches(word, false)
    }

    fn matches(&self, word: &str, check_fixed: bool) -> bool {
        word.chars().count() == self.word_length
            && word.chars().enumerate().all(|(index, letter)| {
                !self.excluded_at[index].contains(&letter)
                    && (!check_fixed
                        || self.fixed[index].map_or(true, |fixed| fixed == letter))
            })
    }

    fn set_present_elsewhere(&mut self, letter: char, location: usize) {
        self.excluded_at[location].insert(letter);
        for (index, (fixed, floating)) in self
            .fixed
            .iter()
            .zip(self.floating.iter_mut())
            .enumerate()
        {
            if index != location && fixed.is_none() {
                floating.insert(letter);
            }
        }
        self.present_elsewhere.insert(letter);
    }

    fn set_fixed(&mut self, letter: char, location: usize) {
        self.fixed[location] = Some(letter);
        self.floating[location].clear();
    }
}
