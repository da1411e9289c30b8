pub mod trie;
pub mod node;
pub mod options;
pub mod iterators;
pub mod search;
pub mod wildcard;
pub mod multithreaded_search;

pub use iterators::Words;
pub use node::Node;
pub use options::TrieOptions;
pub use trie::Trie;
