use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use wordle_hints::*;

/// Suggests the next guess in a Wordle-style game from the feedback given so far.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: PathBuf,

    /// The number of letters in each word.
    #[arg(long, default_value_t = 5)]
    word_length: usize,

    /// The number of guesses allowed per game.
    #[arg(long, default_value_t = 6)]
    max_guesses: u32,

    /// The number of opening rounds that ignore known letter locations when filtering.
    #[arg(long, default_value_t = 3)]
    loose_rounds: u32,

    /// How words that break known constraints are ranked.
    #[arg(long, value_enum, default_value_t = Orientation::Penalize)]
    orientation: Orientation,

    /// The number of suggestions to print after each round.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Print debug logs. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get suggestions while playing a game elsewhere.
    Interactive,
    /// Let the solver play a single game against the given word, or a random word from the list.
    Single { word: Option<String> },
    /// Let the solver play against every word in the words file.
    Benchmark,
    /// Remove duplicate words from the words file and sort it.
    Clean {
        /// Where to write the cleaned list. Defaults to overwriting the words file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Orientation {
    /// Use the heuristic weights as listed, where broken constraints lower the score.
    Reference,
    /// Make every broken constraint raise the score, ranking the word lower.
    Penalize,
}

impl From<Orientation> for ScoringOrientation {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Reference => ScoringOrientation::Reference,
            Orientation::Penalize => ScoringOrientation::PenalizeViolations,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();
    println!("File: {}", args.words_file.display());

    if let Command::Clean { output } = &args.command {
        clean_words_file(&args.words_file, output.as_deref().unwrap_or(&args.words_file))?;
        return Ok(());
    }

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    println!("There are {} possible words.", word_bank.len());
    let model = LetterFrequencyModel::build(&*word_bank);
    let config = SessionConfig {
        word_length: args.word_length,
        max_guesses: args.max_guesses,
        loose_rounds: args.loose_rounds,
        orientation: args.orientation.into(),
    };

    match &args.command {
        Command::Interactive => play_interactive_game(&word_bank, &model, config, args.top)?,
        Command::Single { word } => play_single_game(word.as_deref(), &word_bank, &model, config)?,
        Command::Benchmark => run_benchmark(&word_bank, &model, config),
        Command::Clean { .. } => {}
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn clean_words_file(words_file: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    let words = io::BufReader::new(File::open(words_file)?)
        .lines()
        .collect::<io::Result<Vec<String>>>()?;
    let num_words = words.len();
    let cleaned = clean_word_list(words);
    let mut contents = cleaned.join("\n");
    contents.push('\n');
    fs::write(output, contents)?;
    println!(
        "Wrote {} words to {} ({} lines read).",
        cleaned.len(),
        output.display(),
        num_words
    );
    Ok(())
}

fn run_benchmark(word_bank: &WordBank, model: &LetterFrequencyModel, config: SessionConfig) {
    let results = play_games(&word_bank[..], word_bank, model, config);

    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    let mut num_failures = 0;
    for (word, result) in word_bank.iter().zip(results) {
        match result {
            Ok(GameResult::Success(guesses)) => num_guesses_per_game.push(guesses.len() as u32),
            Ok(_) => num_failures += 1,
            Err(error) => {
                eprintln!("Error while solving {}: {}", word, error);
                num_failures += 1;
            }
        }
    }
    println!(
        "Solved {} of {} words. Results:",
        num_guesses_per_game.len(),
        word_bank.len()
    );

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds: Vec<u32> = num_games_per_round.keys().copied().collect();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }
    println!("|failed|{}|", num_failures);

    if num_guesses_per_game.is_empty() {
        return;
    }
    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
}

fn play_single_game(
    word: Option<&str>,
    word_bank: &WordBank,
    model: &LetterFrequencyModel,
    config: SessionConfig,
) -> Result<(), Box<dyn Error>> {
    let objective = match word {
        Some(word) => word.trim().to_lowercase(),
        None => match word_bank.choose(&mut rand::thread_rng()) {
            Some(word) => word.to_string(),
            None => {
                eprintln!("Error: the word list is empty.");
                std::process::exit(1);
            }
        },
    };
    println!("Playing against: {}", objective);

    match play_game(&objective, word_bank, model, config)? {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn play_interactive_game(
    word_bank: &WordBank,
    model: &LetterFrequencyModel,
    config: SessionConfig,
    top: usize,
) -> Result<(), Box<dyn Error>> {
    println!(
        "\nAfter each guess, enter the guess and then the result for each letter as:\n\n\
           * '0' = this letter is not in the word\n\
           * '1' = this letter is in the word, but not in this location\n\
           * '2' = this letter is in the word and in the right location.\n\n\
         For example, if the word was \"spade\" and the guess was \"soapy\", you would enter \"20210\"."
    );

    loop {
        let mut session = Session::new(word_bank, model, config)?;
        play_interactive_round(&mut session, top)?;
        if !prompt("\nPlay again? (y/n)")?
            .map_or(false, |answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
        {
            break;
        }
    }
    println!("Bye");
    Ok(())
}

fn play_interactive_round(session: &mut Session, top: usize) -> io::Result<()> {
    while !session.is_finished() {
        let guess_number = session.guesses_made() + 1;
        let guess = match prompt(&format!("\nGuess {}: what did you guess?", guess_number))? {
            Some(guess) => guess.to_lowercase(),
            None => return Ok(()),
        };
        let feedback = match prompt("What was the result?")? {
            Some(feedback) => feedback.replace(' ', ""),
            None => return Ok(()),
        };

        match session.update(&guess, &feedback) {
            Ok(RoundOutcome::Won { guesses }) => {
                println!("Congrats! Solved in {} guesses.", guesses);
            }
            Ok(RoundOutcome::Exhausted) => {
                print_suggestions(session, &session.suggestions(), top);
                println!("Out of guesses :(");
            }
            Ok(RoundOutcome::Continue(suggestions)) => {
                print_suggestions(session, &suggestions, top);
            }
            Err(error) => {
                println!("Error: {}. Try again.", error);
            }
        }
    }
    Ok(())
}

fn print_suggestions(session: &Session, suggestions: &[ScoredWord], top: usize) {
    println!(
        "\nKnown letters: {}. {} possible words.",
        session.state().pattern(),
        suggestions.len()
    );
    for suggestion in suggestions.iter().take(top) {
        println!("\t{}: {:.3}", suggestion.word, suggestion.score);
    }
}

/// Prints the message and reads a trimmed line, or `None` at the end of input.
fn prompt(message: &str) -> io::Result<Option<String>> {
    println!("{}", message);
    io::stdout().flush()?;
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}
