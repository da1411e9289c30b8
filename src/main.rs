use std::path::PathBuf;
use std::time::Instant;

use derive_new::new;
use log::{error, info};
use serde::Serialize;
use structopt::StructOpt;
use thiserror::Error;

use lexicon_trie::{FileFormat, Lexicon, Pattern, PatternError, TrieOptions, Wordlist, WordlistError};


/// Load a word list into a trie and query it.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Split lines on this character and take a single column
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is given
    #[structopt(short, long, default_value = "0")]
    column: usize,
    /// Ignore lines starting with '#'
    #[structopt(long)]
    skip_comments: bool,
    /// Count each distinct word once, even if listed repeatedly
    #[structopt(long)]
    distinct: bool,
    /// Print results as JSON
    #[structopt(long)]
    json: bool,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Check whether words are in the list
    Contains { words: Vec<String> },
    /// Check whether any word starts with each prefix
    Prefix { prefixes: Vec<String> },
    /// List words alphabetically
    Words {
        #[structopt(long, default_value = "")]
        prefix: String,
    },
    /// Suggest same-length words differing in at most MAX_DISTANCE letters
    Suggest { max_distance: usize, targets: Vec<String> },
    /// Match patterns where '?' and '_' are one letter and '*' any run
    Match { patterns: Vec<String> },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("could not render results")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(untagged)]
enum Answer {
    Found(bool),
    Words(Vec<String>),
}

#[derive(Serialize, new)]
struct QueryReport {
    query: String,
    answer: Answer,
}

fn sorted<I: IntoIterator<Item=String>>(words: I) -> Answer {
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort();
    Answer::Words(words)
}

fn run(args: Cli) -> Result<(), CliError> {
    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.column)
        .skip_comments(args.skip_comments)
        .build();
    let options = TrieOptions::builder().count_reinsertions(!args.distinct).build();

    let mut wl = Wordlist::with_options(options);
    let lines = wl.load_file(&args.path, &format)?;
    info!("{} lines, {} words, {} nodes", lines, wl.num_words(), wl.trie().node_count());

    let start = Instant::now();
    let reports: Vec<QueryReport> = match args.command {
        Command::Contains { words } => words.into_iter()
            .map(|w| {
                let found = wl.contains_word(&w);
                QueryReport::new(w, Answer::Found(found))
            })
            .collect(),
        Command::Prefix { prefixes } => prefixes.into_iter()
            .map(|p| {
                let found = wl.contains_prefix(&p);
                QueryReport::new(p, Answer::Found(found))
            })
            .collect(),
        Command::Words { prefix } => {
            let words = wl.words_with_prefix(&prefix).collect();
            vec![QueryReport::new(prefix, Answer::Words(words))]
        }
        Command::Suggest { max_distance, targets } => {
            let results = wl.suggest_many(&targets, max_distance);
            targets.into_iter().zip(results)
                .map(|(t, r)| QueryReport::new(t, sorted(r)))
                .collect()
        }
        Command::Match { patterns } => {
            for p in &patterns {
                Pattern::parse(p)?;
            }
            let results = wl.match_patterns(&patterns);
            patterns.into_iter().zip(results)
                .map(|(p, r)| QueryReport::new(p, sorted(r)))
                .collect()
        }
    };
    info!("Answered {} queries in {:.3}s", reports.len(), start.elapsed().as_secs_f64());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match &report.answer {
                Answer::Found(found) => println!("{}: {}", report.query, found),
                Answer::Words(words) => println!("{}: {}", report.query, words.join(" ")),
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::from_args()) {
        error!("{:?}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
