use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::WordlistError;
use crate::wordlist::lexicon::Lexicon;
use crate::wordlist::trie::{Trie, TrieOptions};

/// A trie filled from word list files.
#[derive(Debug, Default, Clone)]
pub struct Wordlist {
    trie: Trie,
}

/// How to pull a word out of each line of a word list.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Split lines on this character; `None` takes the whole line.
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
    /// Ignore lines starting with `#` instead of feeding them to the trie.
    #[builder(default)]
    skip_comments: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<Option<&'a str>, WordlistError> {
        let line = line.trim();
        if self.skip_comments && line.starts_with('#') {
            return Ok(None);
        }
        match self.delimiter {
            Some(delimiter) if !line.is_empty() => line.split(delimiter)
                .nth(self.word_column)
                .map(Some)
                .ok_or(WordlistError::MissingColumn { line: line_no, column: self.word_column }),
            _ => Ok(Some(line)),
        }
    }
}

/// Feeds every line of `reader` to `lexicon`, returning the number of lines
/// processed. Empty lines count even though the lexicon rejects them; lines
/// missing the word column are logged and skipped.
pub fn load_lines<L, R>(lexicon: &mut L, reader: R, format: &FileFormat) -> Result<usize, WordlistError>
    where L: Lexicon, R: BufRead {
    let start = Instant::now();
    let mut count: usize = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let word = match format.parse_line(&line, idx + 1) {
            Ok(Some(word)) => normalize(word),
            Ok(None) => continue,
            Err(e) => {
                warn!("{}, skipping", e);
                continue;
            }
        };
        lexicon.add_word(&word);
        count += 1;
        if count % 100000 == 0 {
            debug!("{} {}", count, word);
        }
    }

    let elapsed = start.elapsed();
    info!("Read {} lines in {:.3}s ({} words counted)",
          count, elapsed.as_secs_f64(), lexicon.num_words());
    Ok(count)
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist::default()
    }

    pub fn with_options(options: TrieOptions) -> Wordlist {
        Wordlist { trie: Trie::with_options(options) }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let mut wl = Wordlist::new();
        wl.load_file(path, format)?;
        Ok(wl)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<usize, WordlistError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file), format)
    }

    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<usize, WordlistError> {
        load_lines(&mut self.trie, reader, format)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn words_with_prefix(&self, prefix: &str) -> crate::wordlist::trie::Words<'_>;
            pub fn match_patterns(&self, patterns: &[String]) -> Vec<HashSet<String>>;
            pub fn suggest_many(&self, targets: &[String], max_distance: usize) -> Vec<HashSet<String>>;
        }
    }
}

impl Lexicon for Wordlist {
    delegate! {
        to self.trie {
            fn add_word(&mut self, word: &str) -> bool;
            fn remove_word(&mut self, word: &str) -> bool;
            fn num_words(&self) -> usize;
            fn words(&self) -> Box<dyn Iterator<Item=String> + '_>;
            fn match_regex(&self, pattern: &str) -> HashSet<String>;
        }
    }

    fn contains_word(&self, word: &str) -> bool {
        self.trie.contains_word(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        self.trie.contains_prefix(prefix)
    }

    fn suggest_corrections(&self, target: &str, max_distance: usize) -> HashSet<String> {
        self.trie.suggest_corrections(target, max_distance)
    }
}
