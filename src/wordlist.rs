pub mod trie;
pub mod lexicon;
pub mod wordlist;
