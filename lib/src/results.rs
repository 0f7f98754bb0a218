use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback given for a single letter of a guess.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeedbackCode {
    /// The letter is not at this location, and no other feedback placed it in the word.
    Absent,
    /// The letter is in the word, but somewhere else.
    PresentElsewhere,
    /// The letter is in the word at this location.
    Correct,
}

impl FeedbackCode {
    /// Parses a single feedback character: `'0'` is absent, `'1'` is present elsewhere, and `'2'`
    /// is correct.
    pub fn from_char(code: char) -> Result<FeedbackCode, WordleError> {
        match code {
            '0' => Ok(FeedbackCode::Absent),
            '1' => Ok(FeedbackCode::PresentElsewhere),
            '2' => Ok(FeedbackCode::Correct),
            other => Err(WordleError::InvalidFeedbackCode(other)),
        }
    }

    /// The character used for this code in feedback strings.
    pub fn to_char(self) -> char {
        match self {
            FeedbackCode::Absent => '0',
            FeedbackCode::PresentElsewhere => '1',
            FeedbackCode::Correct => '2',
        }
    }
}

/// Indicates that an input or a word list could not be used.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// The guess or feedback doesn't have one entry per letter of the word.
    #[error("the {input} must have {expected} letters, but it has {actual}")]
    LengthMismatch {
        input: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A feedback character was not one of `0`, `1` or `2`.
    #[error("'{0}' is not a feedback code, use only '0', '1' or '2'")]
    InvalidFeedbackCode(char),
    /// Words must all have the given length.
    #[error("all words must have length {0}")]
    WordLength(usize),
    /// The session has already been won or has run out of guesses.
    #[error("the game is already over")]
    GameOver,
    /// Reading the word list failed.
    #[error("failed to read words: {0}")]
    Io(String),
}

impl From<io::Error> for WordleError {
    fn from(error: io::Error) -> Self {
        WordleError::Io(error.to_string())
    }
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The feedback for each letter, provided in the same letter order as in the guess.
    pub results: Vec<FeedbackCode>,
}

impl<'a> GuessResult<'a> {
    /// Pairs a guess with its feedback string, e.g. `"crane"` and `"02010"`.
    ///
    /// Every feedback character is checked before anything is returned. Lengths are checked
    /// against the word length when the result is applied.
    pub fn parse(guess: &'a str, feedback: &str) -> Result<GuessResult<'a>, WordleError> {
        Ok(GuessResult {
            guess,
            results: parse_feedback(feedback)?,
        })
    }

    /// Returns `true` iff every letter was correct.
    pub fn is_win(&self) -> bool {
        !self.results.is_empty()
            && self
                .results
                .iter()
                .all(|code| *code == FeedbackCode::Correct)
    }
}

/// Parses a feedback string such as `"02010"` into one code per letter.
pub fn parse_feedback(feedback: &str) -> Result<Vec<FeedbackCode>, WordleError> {
    feedback.chars().map(FeedbackCode::from_char).collect()
}

/// Returns `true` iff the feedback string marks all `word_length` letters as correct.
pub fn is_winning_feedback(feedback: &str, word_length: usize) -> bool {
    feedback.chars().count() == word_length && feedback.chars().all(|code| code == '2')
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Box<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Box<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

/// Determines the feedback for `guess` when the hidden word is `objective`.
///
/// Exact matches are marked first. Remaining letters are then marked as present elsewhere only
/// while unmatched copies of that letter are left in the objective, so a repeated letter is never
/// reported more often than it appears.
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective_letters: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective_letters.len() != guess_letters.len() {
        return Err(WordleError::WordLength(objective_letters.len()));
    }

    let mut results = vec![FeedbackCode::Absent; guess_letters.len()];
    let mut unmatched: Vec<Option<char>> = Vec::with_capacity(objective_letters.len());
    for (index, (objective_letter, guess_letter)) in objective_letters
        .iter()
        .zip(guess_letters.iter())
        .enumerate()
    {
        if objective_letter == guess_letter {
            results[index] = FeedbackCode::Correct;
            unmatched.push(None);
        } else {
            unmatched.push(Some(*objective_letter));
        }
    }

    for (index, guess_letter) in guess_letters.iter().enumerate() {
        if results[index] == FeedbackCode::Correct {
            continue;
        }
        if let Some(slot) = unmatched
            .iter_mut()
            .find(|slot| **slot == Some(*guess_letter))
        {
            *slot = None;
            results[index] = FeedbackCode::PresentElsewhere;
        }
    }

    Ok(GuessResult { guess, results })
}
