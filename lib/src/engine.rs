use crate::data::*;
use crate::restrictions::ConstraintState;
use crate::results::*;
use crate::scorers::*;
use rayon::prelude::*;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// The number of letters in each word.
    pub word_length: usize,
    /// The number of guesses allowed before the game is lost.
    pub max_guesses: u32,
    /// The number of opening rounds that ignore fixed letters when filtering.
    pub loose_rounds: u32,
    /// How constraint violations affect scores.
    pub orientation: ScoringOrientation,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            word_length: 5,
            max_guesses: 6,
            loose_rounds: 3,
            orientation: ScoringOrientation::default(),
        }
    }
}

/// What happened after a round of feedback.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    /// Every letter was correct. Holds the number of guesses used.
    Won { guesses: u32 },
    /// The game continues. Holds the ranked candidates for the next guess, best first.
    Continue(Vec<ScoredWord>),
    /// The last allowed guess was used without winning.
    Exhausted,
}

/// Tracks one game: the feedback received so far and the number of guesses used.
///
/// The word bank and frequency model are borrowed so they can be shared across games.
#[derive(Debug)]
pub struct Session<'a> {
    bank: &'a WordBank,
    model: &'a LetterFrequencyModel,
    config: SessionConfig,
    state: ConstraintState,
    guesses_made: u32,
    finished: bool,
}

impl<'a> Session<'a> {
    /// Starts a new game. The bank's words must have the configured length.
    ///
    /// ```
    /// use wordle_hints::*;
    ///
    /// let bank = WordBank::from_iterator(["crane", "slate", "irate"]).unwrap();
    /// let model = LetterFrequencyModel::build(&*bank);
    /// let mut session = Session::new(&bank, &model, SessionConfig::default()).unwrap();
    ///
    /// assert!(matches!(
    ///     session.update("crane", "00222"),
    ///     Ok(RoundOutcome::Continue(_))
    /// ));
    /// ```
    pub fn new(
        bank: &'a WordBank,
        model: &'a LetterFrequencyModel,
        config: SessionConfig,
    ) -> Result<Session<'a>, WordleError> {
        if !bank.is_empty() && bank.word_length() != config.word_length {
            return Err(WordleError::WordLength(config.word_length));
        }
        Ok(Session {
            bank,
            model,
            config,
            state: ConstraintState::new(config.word_length),
            guesses_made: 0,
            finished: false,
        })
    }

    /// Everything learned so far.
    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// The settings for this game.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The number of guesses that have received feedback.
    pub fn guesses_made(&self) -> u32 {
        self.guesses_made
    }

    /// Returns `true` once the game has been won or has run out of guesses.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Records the feedback for a guess.
    ///
    /// A winning feedback string ends the game without any filtering or scoring. Invalid input
    /// returns an error and doesn't use up a guess.
    pub fn update(&mut self, guess: &str, feedback: &str) -> Result<RoundOutcome, WordleError> {
        if self.finished {
            return Err(WordleError::GameOver);
        }
        if is_winning_feedback(feedback, self.config.word_length) {
            self.guesses_made += 1;
            self.finished = true;
            return Ok(RoundOutcome::Won {
                guesses: self.guesses_made,
            });
        }
        self.state.apply_feedback(guess, feedback)?;
        self.guesses_made += 1;
        if self.guesses_made >= self.config.max_guesses {
            self.finished = true;
            return Ok(RoundOutcome::Exhausted);
        }
        Ok(RoundOutcome::Continue(self.suggestions()))
    }

    /// Ranks the words that are still possible, best first.
    ///
    /// The first `loose_rounds` guesses only filter by excluded letters. Scores use the number
    /// of the latest guess, or 1 before any guess.
    pub fn suggestions(&self) -> Vec<ScoredWord> {
        let guess_number = self.guesses_made.max(1);
        let loose = guess_number <= self.config.loose_rounds;
        let candidates = filter_candidates(self.bank, &self.state, loose);
        score_all(
            &candidates,
            &self.state,
            self.model,
            guess_number,
            self.config.orientation,
        )
    }
}

/// Plays a game against `objective`, always guessing the best-ranked suggestion.
pub fn play_game(
    objective: &str,
    bank: &WordBank,
    model: &LetterFrequencyModel,
    config: SessionConfig,
) -> Result<GameResult, WordleError> {
    if objective.chars().count() != config.word_length {
        return Err(WordleError::WordLength(config.word_length));
    }
    if !bank.iter().any(|word| word.as_ref() == objective) {
        return Ok(GameResult::UnknownWord);
    }
    let mut session = Session::new(bank, model, config)?;
    let mut guesses: Vec<Box<str>> = Vec::new();
    let mut suggestions = session.suggestions();
    loop {
        let guess = match suggestions.first() {
            Some(best) => best.word.clone(),
            None => return Ok(GameResult::Failure(guesses)),
        };
        log::debug!("Guess {}: {}", session.guesses_made() + 1, guess);
        guesses.push(Box::from(guess.as_ref()));
        let result = get_result_for_guess(objective, &guess)?;
        let feedback: String = result.results.iter().map(|code| code.to_char()).collect();
        match session.update(&guess, &feedback)? {
            RoundOutcome::Won { .. } => return Ok(GameResult::Success(guesses)),
            RoundOutcome::Exhausted => return Ok(GameResult::Failure(guesses)),
            RoundOutcome::Continue(next) => suggestions = next,
        }
    }
}

/// Plays a game against each objective in parallel. Results are in the same order as the
/// objectives.
pub fn play_games<S>(
    objectives: &[S],
    bank: &WordBank,
    model: &LetterFrequencyModel,
    config: SessionConfig,
) -> Vec<Result<GameResult, WordleError>>
where
    S: AsRef<str> + Sync,
{
    objectives
        .par_iter()
        .map(|objective| play_game(objective.as_ref(), bank, model, config))
        .collect()
}
