//! An ordered trie over lowercase words with prefix queries, alphabetical
//! enumeration, substitution-only spelling suggestions and wildcard matching.

pub mod alphabet;
pub mod error;
pub mod pattern;
pub mod wordlist;

pub use error::{PatternError, WordlistError};
pub use pattern::{Pattern, Token};
pub use wordlist::lexicon::Lexicon;
pub use wordlist::trie::{Node, Trie, TrieOptions, Words};
pub use wordlist::wordlist::{FileFormat, Wordlist};
