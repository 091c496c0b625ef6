use anagram_engine::*;
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::time::Instant;

mod logging;

/// Simple program to play the anagrams game: find the words that use all the letters of a starter
/// word plus one more.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Seeds the starter word selection, so that games can be replayed.
    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game.
    Play,
    /// List the good starter words for each word length.
    Starters,
    /// List the anagrams of the given word with one more letter.
    Anagrams { word: String },
}

fn main() -> io::Result<()> {
    logging::init_logging();
    let args = Args::parse();

    let start_time = Instant::now();
    let index = match File::open(&args.words_file)
        .map_err(AnagramError::from)
        .and_then(|file| AnagramIndex::from_reader(io::BufReader::new(file)))
    {
        Ok(index) => index,
        Err(error) => {
            eprintln!("Could not load dictionary: {}", error);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} words from {} in {:.3}s.",
        index.len(),
        args.words_file,
        start_time.elapsed().as_secs_f64()
    );

    match args.command {
        Command::Play => {
            let session = args.seed.map_or_else(Session::new, Session::seeded);
            play_interactive_game(&index, session)?
        }
        Command::Starters => list_starters(&index),
        Command::Anagrams { word } => list_anagrams(&index, &word.trim().to_lowercase()),
    }

    Ok(())
}

fn list_starters(index: &AnagramIndex) {
    println!("|Length|Num starters|Starters|");
    println!("|------|------------|--------|");
    for length in 1..=MAX_WORD_LENGTH {
        let starters = index.starter_words(length);
        if starters.is_empty() {
            continue;
        }
        println!(
            "|{}|{}|{}|",
            length,
            starters.len(),
            starters
                .iter()
                .map(|word| &**word)
                .collect::<Vec<&str>>()
                .join(", ")
        );
    }
}

fn list_anagrams(index: &AnagramIndex, word: &str) {
    let anagrams = index.anagrams_with_one_more_letter(word);
    println!(
        "{} has {} anagrams with one more letter.",
        word.to_uppercase(),
        anagrams.len()
    );
    for anagram in anagrams.iter() {
        println!("\t{}", anagram);
    }
}

/// What the player chose at the prompt shown between rounds.
#[derive(Debug, PartialEq, Eq)]
enum Prompt {
    Quit,
    Restart,
    Play { harder: bool },
}

/// Parses the answer to the prompt shown between rounds. `None` means the input has ended.
fn parse_prompt(answer: Option<&str>) -> Prompt {
    match answer {
        None | Some("q") => Prompt::Quit,
        Some("!") => Prompt::Restart,
        Some(answer) => Prompt::Play {
            harder: answer.eq_ignore_ascii_case("y"),
        },
    }
}

/// Reads one trimmed line from stdin, or `None` at the end of input.
fn read_line(stdin: &mut impl BufRead) -> io::Result<Option<String>> {
    io::stdout().flush()?;
    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

fn play_interactive_game(index: &AnagramIndex, mut session: Session) -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    let mut score: i64 = 0;

    println!(
        "Find as many words as possible that can be formed by adding one letter to the starter \
         word, but that do not contain the starter word itself.\n\n\
         Each word you find scores one point per letter. If you give up, you lose one point per \
         letter of every word you didn't find.\n\n\
         Commands:\n\n\
           * '?' = give up on this word\n\
           * '!' = restart the game\n\
           * 'q' = quit"
    );

    loop {
        if session.used_words().is_empty() {
            print!("\nPress enter to play. ");
        } else {
            print!("\nIncrease difficulty? [y/N] ");
        }
        let harder = match parse_prompt(read_line(&mut stdin)?.as_deref()) {
            Prompt::Quit => return Ok(()),
            Prompt::Restart => {
                session.reset();
                score = 0;
                println!("Restarted. Score: 0.");
                continue;
            }
            Prompt::Play { harder } => harder,
        };

        let mut round = match session.start_round(index, harder, score) {
            Ok(round) => round,
            Err(error) => {
                eprintln!("Could not find a good starter word: {}", error);
                continue;
            }
        };
        println!(
            "\nFind words formed by adding one letter to {} (but that do not contain the \
             substring {}). There are {} to find.",
            round.starter().to_uppercase(),
            round.starter(),
            round.remaining().len()
        );

        loop {
            print!("Score: {}. Remaining: {}. > ", round.score(), round.remaining().len());
            let input = match read_line(&mut stdin)? {
                None => return Ok(()),
                Some(input) => input,
            };
            match input.as_str() {
                "q" => return Ok(()),
                "!" => {
                    session.reset();
                    score = 0;
                    println!("Restarted. Score: 0.");
                    break;
                }
                "?" => {
                    let summary = round.give_up();
                    score = summary.score;
                    println!("You missed:");
                    for word in summary.missed.iter() {
                        println!("\t{}", word);
                    }
                    println!("Score: {}.", score);
                    break;
                }
                _ => {}
            }
            match round.guess(index, &input) {
                GuessOutcome::Empty => {}
                GuessOutcome::Correct { points } => {
                    println!("\t{} (+{})", input.to_lowercase(), points)
                }
                GuessOutcome::Rejected => println!("\tX {}", input.to_lowercase()),
            }
            if round.remaining().is_empty() {
                score = round.score();
                println!("You found them all! Score: {}.", score);
                break;
            }
        }
    }
}
