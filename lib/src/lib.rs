//! Narrows and ranks the candidate words of a Wordle-style game from per-letter feedback.
//!
//! Each round, the feedback for a guess is added to a [`ConstraintState`]. The word list is then
//! filtered with [`filter_candidates`] and the survivors are ranked by [`score_all`], which
//! combines several heuristics whose weights change with the guess number. [`Session`] ties these
//! together for a whole game.
//!
//! ```
//! use wordle_hints::*;
//!
//! let bank = WordBank::from_iterator(["brine", "crane", "crone", "drone", "irony", "prone"]).unwrap();
//! let model = LetterFrequencyModel::build(&*bank);
//! let mut state = ConstraintState::new(5);
//!
//! state.apply_feedback("crane", "02022").unwrap();
//!
//! let candidates = filter_candidates(&bank, &state, false);
//! let ranked = score_all(&candidates, &state, &model, 1, ScoringOrientation::default());
//! assert_eq!(ranked.len(), 3);
//! ```

mod data;
mod engine;
mod restrictions;
mod results;
pub mod scorers;

pub use data::*;
pub use engine::*;
pub use restrictions::*;
pub use results::*;
pub use scorers::score_all;
pub use scorers::score_word;
pub use scorers::ScoredWord;
pub use scorers::ScoringOrientation;
