use crate::data::LetterFrequencyModel;
use crate::restrictions::ConstraintState;
use crate::restrictions::VOWELS;
use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exponents are clamped to this magnitude so late guess numbers can't overflow to infinity.
const MAX_EXPONENT: f64 = 700.0;

/// Scales a heuristic's weight according to the guess number `g`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Multiplier {
    /// `e^(g - offset)`: grows as the game goes on, capped at `e^700`.
    Grow { offset: f64 },
    /// `e^(offset - g)`: shrinks as the game goes on.
    Decay { offset: f64 },
    /// `sqrt(g)`: grows slowly.
    Sqrt,
    /// The same value on every guess.
    Constant(f64),
}

impl Multiplier {
    /// Evaluates the multiplier for the given guess number.
    pub fn apply(self, guess_number: u32) -> f64 {
        let g = guess_number as f64;
        match self {
            Multiplier::Grow { offset } => (g - offset).clamp(-MAX_EXPONENT, MAX_EXPONENT).exp(),
            Multiplier::Decay { offset } => (offset - g).clamp(-MAX_EXPONENT, MAX_EXPONENT).exp(),
            Multiplier::Sqrt => g.sqrt(),
            Multiplier::Constant(value) => value,
        }
    }
}

/// One of the signals combined into a word's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of fixed locations where the word has a different letter.
    MissingRequired,
    /// Number of locations where the word has one of that location's floating letters.
    PotentialCoverage,
    /// Number of distinct unexplored letters in the word.
    UnexploredLetters,
    /// Number of distinct unexplored vowels in the word.
    UnexploredVowels,
    /// Mean frequency of the word's letters at their locations, across the whole word list.
    LetterFrequency,
    /// Number of locations where the word has a letter excluded from that location.
    BadLetterHits,
}

/// A heuristic with its base weight and how that weight changes over the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeight {
    pub heuristic: Heuristic,
    pub base_weight: f64,
    pub multiplier: Multiplier,
}

/// The weights used to combine heuristics into a score.
///
/// Constraint violations and floating letter hits matter more as the game goes on, while
/// exploring vowels matters less.
pub static HEURISTIC_WEIGHTS: [HeuristicWeight; 6] = [
    HeuristicWeight {
        heuristic: Heuristic::MissingRequired,
        base_weight: -1.0,
        multiplier: Multiplier::Grow { offset: 2.0 },
    },
    HeuristicWeight {
        heuristic: Heuristic::PotentialCoverage,
        base_weight: 1.0,
        multiplier: Multiplier::Grow { offset: 0.0 },
    },
    HeuristicWeight {
        heuristic: Heuristic::UnexploredLetters,
        base_weight: 2.0,
        multiplier: Multiplier::Constant(10.0),
    },
    HeuristicWeight {
        heuristic: Heuristic::UnexploredVowels,
        base_weight: 10.0,
        multiplier: Multiplier::Decay { offset: 2.0 },
    },
    HeuristicWeight {
        heuristic: Heuristic::LetterFrequency,
        base_weight: 10.0,
        multiplier: Multiplier::Sqrt,
    },
    HeuristicWeight {
        heuristic: Heuristic::BadLetterHits,
        base_weight: -2.0,
        multiplier: Multiplier::Grow { offset: 2.0 },
    },
];

impl Heuristic {
    /// Every heuristic, in scoring order.
    pub const ALL: [Heuristic; 6] = [
        Heuristic::MissingRequired,
        Heuristic::PotentialCoverage,
        Heuristic::UnexploredLetters,
        Heuristic::UnexploredVowels,
        Heuristic::LetterFrequency,
        Heuristic::BadLetterHits,
    ];

    /// A short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::MissingRequired => "missing_required",
            Heuristic::PotentialCoverage => "potential_coverage",
            Heuristic::UnexploredLetters => "unexplored_letters",
            Heuristic::UnexploredVowels => "unexplored_vowels",
            Heuristic::LetterFrequency => "letter_frequency",
            Heuristic::BadLetterHits => "bad_letter_hits",
        }
    }

    /// Returns `true` for heuristics that count broken constraints.
    pub fn counts_violations(self) -> bool {
        matches!(self, Heuristic::MissingRequired | Heuristic::BadLetterHits)
    }

    /// The entry for this heuristic in [`HEURISTIC_WEIGHTS`].
    pub fn weights(self) -> &'static HeuristicWeight {
        &HEURISTIC_WEIGHTS[self as usize]
    }

    /// The weight applied to this heuristic's raw value on the given guess.
    pub fn weight(self, guess_number: u32, orientation: ScoringOrientation) -> f64 {
        let weights = self.weights();
        let base_weight = match orientation {
            ScoringOrientation::PenalizeViolations if self.counts_violations() => {
                weights.base_weight.abs()
            }
            _ => weights.base_weight,
        };
        base_weight * weights.multiplier.apply(guess_number)
    }
}

/// How constraint violations affect a score. Lower scores rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoringOrientation {
    /// Uses the weights exactly as listed in [`HEURISTIC_WEIGHTS`]. The violation counts have
    /// negative weights there, so a word breaking more constraints gets a lower score and ranks
    /// closer to the top.
    Reference,
    /// Flips the violation weights to be positive, so every broken constraint pushes a word
    /// further down the ranking.
    #[default]
    PenalizeViolations,
}

/// The raw (unweighted) value of each heuristic for one word.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicValues {
    pub missing_required: u32,
    pub potential_coverage: u32,
    pub unexplored_letters: u32,
    pub unexplored_vowels: u32,
    pub letter_frequency: f64,
    pub bad_letter_hits: u32,
}

impl HeuristicValues {
    /// Measures each heuristic for `word`.
    pub fn compute(
        word: &str,
        state: &ConstraintState,
        model: &LetterFrequencyModel,
    ) -> HeuristicValues {
        let mut values = HeuristicValues::default();
        let mut seen_letters: HashSet<char> = HashSet::new();
        let mut frequency_sum = 0.0;
        let mut num_letters = 0;
        for (index, letter) in word.chars().enumerate() {
            if let Some(fixed) = state.fixed(index) {
                if fixed != letter {
                    values.missing_required += 1;
                }
            }
            if state.is_floating_at(index, letter) {
                values.potential_coverage += 1;
            }
            if state.is_excluded_at(index, letter) {
                values.bad_letter_hits += 1;
            }
            if seen_letters.insert(letter) && state.is_unexplored(letter) {
                values.unexplored_letters += 1;
                if VOWELS.contains(&letter) {
                    values.unexplored_vowels += 1;
                }
            }
            frequency_sum += model.frequency(index, letter);
            num_letters += 1;
        }
        if num_letters > 0 {
            values.letter_frequency = frequency_sum / num_letters as f64;
        }
        values
    }

    /// The raw value for one heuristic.
    pub fn get(&self, heuristic: Heuristic) -> f64 {
        match heuristic {
            Heuristic::MissingRequired => self.missing_required as f64,
            Heuristic::PotentialCoverage => self.potential_coverage as f64,
            Heuristic::UnexploredLetters => self.unexplored_letters as f64,
            Heuristic::UnexploredVowels => self.unexplored_vowels as f64,
            Heuristic::LetterFrequency => self.letter_frequency,
            Heuristic::BadLetterHits => self.bad_letter_hits as f64,
        }
    }

    /// Sums each weighted value into a single score.
    pub fn score(&self, guess_number: u32, orientation: ScoringOrientation) -> f64 {
        Heuristic::ALL
            .iter()
            .map(|heuristic| heuristic.weight(guess_number, orientation) * self.get(*heuristic))
            .sum()
    }
}

/// A candidate word and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Arc<str>,
    pub score: f64,
}

/// Scores `word` for the given guess number. Lower is better.
pub fn score_word(
    word: &str,
    state: &ConstraintState,
    model: &LetterFrequencyModel,
    guess_number: u32,
    orientation: ScoringOrientation,
) -> f64 {
    let values = HeuristicValues::compute(word, state, model);
    if log::log_enabled!(log::Level::Trace) {
        for heuristic in Heuristic::ALL {
            let weight = heuristic.weight(guess_number, orientation);
            let value = values.get(heuristic);
            log::trace!(
                "{}: {}: {} * {} = {}",
                word,
                heuristic.name(),
                weight,
                value,
                weight * value
            );
        }
    }
    values.score(guess_number, orientation)
}

/// Scores every candidate and sorts them so the best (lowest) score comes first. Words with equal
/// scores keep their original order.
pub fn score_all(
    candidates: &[Arc<str>],
    state: &ConstraintState,
    model: &LetterFrequencyModel,
    guess_number: u32,
    orientation: ScoringOrientation,
) -> Vec<ScoredWord> {
    let mut scored: Vec<ScoredWord> = candidates
        .iter()
        .map(|word| ScoredWord {
            word: Arc::clone(word),
            score: score_word(word, state, model, guess_number, orientation),
        })
        .collect();
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    scored
}
