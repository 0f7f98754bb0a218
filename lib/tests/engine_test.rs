#[macro_use]
extern crate assert_matches;

use wordle_hints::*;

use std::result::Result;

fn small_bank() -> WordBank {
    WordBank::from_iterator(vec!["alpha", "allot", "begot", "below", "endow", "ingot"]).unwrap()
}

fn suggested_words(suggestions: &[ScoredWord]) -> Vec<&str> {
    suggestions
        .iter()
        .map(|suggestion| suggestion.word.as_ref())
        .collect()
}

#[test]
fn session_rejects_bank_with_other_word_length() {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let config = SessionConfig {
        word_length: 4,
        ..SessionConfig::default()
    };

    assert_matches!(
        Session::new(&bank, &model, config),
        Err(WordleError::WordLength(4))
    );
}

#[test]
fn default_config() {
    let config = SessionConfig::default();

    assert_eq!(config.word_length, 5);
    assert_eq!(config.max_guesses, 6);
    assert_eq!(config.loose_rounds, 3);
    assert_eq!(config.orientation, ScoringOrientation::PenalizeViolations);
}

#[test]
fn winning_feedback_ends_session_without_filtering() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let mut session = Session::new(&bank, &model, SessionConfig::default())?;

    assert_eq!(
        session.update("below", "22222")?,
        RoundOutcome::Won { guesses: 1 }
    );
    assert!(session.is_finished());
    assert_eq!(*session.state(), ConstraintState::new(5));
    assert_matches!(
        session.update("below", "22222"),
        Err(WordleError::GameOver)
    );
    Ok(())
}

#[test]
fn invalid_input_does_not_use_a_guess() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let mut session = Session::new(&bank, &model, SessionConfig::default())?;
    session.update("begot", "00020")?;
    let before = session.state().clone();

    assert_matches!(
        session.update("beg", "000"),
        Err(WordleError::LengthMismatch {
            input: "guess",
            expected: 5,
            actual: 3
        })
    );
    assert_matches!(
        session.update("begot", "00x20"),
        Err(WordleError::InvalidFeedbackCode('x'))
    );
    assert_eq!(session.guesses_made(), 1);
    assert_eq!(*session.state(), before);
    assert!(!session.is_finished());
    Ok(())
}

#[test]
fn session_runs_out_of_guesses() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let config = SessionConfig {
        max_guesses: 2,
        ..SessionConfig::default()
    };
    let mut session = Session::new(&bank, &model, config)?;

    assert_matches!(
        session.update("begot", "00020")?,
        RoundOutcome::Continue(_)
    );
    assert_eq!(
        session.update("ingot", "00020")?,
        RoundOutcome::Exhausted
    );
    assert!(session.is_finished());
    assert_matches!(
        session.update("endow", "22222"),
        Err(WordleError::GameOver)
    );
    Ok(())
}

#[test]
fn suggestions_still_ranked_after_running_out() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let config = SessionConfig {
        max_guesses: 2,
        ..SessionConfig::default()
    };
    let mut session = Session::new(&bank, &model, config)?;
    session.update("begot", "00020")?;

    assert_eq!(
        session.update("ingot", "00020")?,
        RoundOutcome::Exhausted
    );

    // Still in the loose rounds, so only excluded letters narrow the pool.
    assert_eq!(suggested_words(&session.suggestions()), vec!["alpha"]);
    Ok(())
}

#[test]
fn opening_rounds_ignore_fixed_letters() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let mut loose_session = Session::new(&bank, &model, SessionConfig::default())?;
    let mut strict_session = Session::new(
        &bank,
        &model,
        SessionConfig {
            loose_rounds: 0,
            ..SessionConfig::default()
        },
    )?;

    // 'o' is fixed in the fourth location, and 'b', 'e', 'g', 't' are excluded where guessed.
    let loose = assert_matches!(
        loose_session.update("begot", "00020")?,
        RoundOutcome::Continue(suggestions) => suggestions
    );
    let strict = assert_matches!(
        strict_session.update("begot", "00020")?,
        RoundOutcome::Continue(suggestions) => suggestions
    );

    let mut loose_words = suggested_words(&loose);
    loose_words.sort_unstable();
    assert_eq!(loose_words, vec!["alpha", "endow"]);
    let mut strict_words = suggested_words(&strict);
    strict_words.sort_unstable();
    assert_eq!(strict_words, vec!["endow"]);
    Ok(())
}

#[test]
fn suggestions_are_ranked_best_first() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let session = Session::new(&bank, &model, SessionConfig::default())?;

    let suggestions = session.suggestions();

    assert_eq!(suggestions.len(), bank.len());
    assert!(suggestions
        .windows(2)
        .all(|pair| pair[0].score <= pair[1].score));
    Ok(())
}

#[test]
fn play_game_solves_word_in_bank() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let config = SessionConfig {
        max_guesses: bank.len() as u32,
        ..SessionConfig::default()
    };

    for orientation in [
        ScoringOrientation::Reference,
        ScoringOrientation::PenalizeViolations,
    ] {
        let config = SessionConfig {
            orientation,
            ..config
        };
        let result = play_game("alpha", &bank, &model, config)?;

        let guesses = assert_matches!(result, GameResult::Success(guesses) => guesses);
        assert_eq!(guesses.last().map(|guess| guess.as_ref()), Some("alpha"));
    }
    Ok(())
}

#[test]
fn play_game_unknown_word() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);

    assert_eq!(
        play_game("other", &bank, &model, SessionConfig::default())?,
        GameResult::UnknownWord
    );
    assert_matches!(
        play_game("others", &bank, &model, SessionConfig::default()),
        Err(WordleError::WordLength(5))
    );
    Ok(())
}

#[test]
fn play_game_can_run_out_of_guesses() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let config = SessionConfig {
        max_guesses: 1,
        ..SessionConfig::default()
    };
    let first_guess = session_first_guess(&bank, &model)?;
    let objective = if first_guess == "alpha" {
        "endow"
    } else {
        "alpha"
    };

    let guesses = assert_matches!(
        play_game(objective, &bank, &model, config)?,
        GameResult::Failure(guesses) => guesses
    );
    assert_eq!(guesses.len(), 1);
    Ok(())
}

#[test]
fn play_games_solves_every_word() -> Result<(), WordleError> {
    let bank = small_bank();
    let model = LetterFrequencyModel::build(&*bank);
    let config = SessionConfig {
        max_guesses: bank.len() as u32,
        ..SessionConfig::default()
    };

    let results = play_games(&bank[..], &bank, &model, config);

    assert_eq!(results.len(), bank.len());
    for (word, result) in bank.iter().zip(results) {
        let guesses = assert_matches!(result, Ok(GameResult::Success(guesses)) => guesses);
        assert_eq!(
            guesses.last().map(|guess| guess.to_string()),
            Some(word.to_string())
        );
    }
    Ok(())
}

fn session_first_guess(
    bank: &WordBank,
    model: &LetterFrequencyModel,
) -> Result<String, WordleError> {
    let session = Session::new(bank, model, SessionConfig::default())?;
    Ok(session.suggestions()[0].word.to_string())
}
