use typed_builder::TypedBuilder;

/// Behavior switches for a [`Trie`](super::Trie).
#[derive(TypedBuilder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieOptions {
    /// Count every successful `insert`, even of a word already present.
    /// Turning this off makes the count track distinct words.
    #[builder(default = true)]
    pub count_reinsertions: bool,
    /// Delete branches left with no words after a `remove`.
    #[builder(default)]
    pub prune_on_remove: bool,
}

impl Default for TrieOptions {
    fn default() -> Self {
        TrieOptions::builder().build()
    }
}
