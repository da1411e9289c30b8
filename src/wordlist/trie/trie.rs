use std::fmt::{Debug, Formatter};

use crate::wordlist::trie::node::Node;
use crate::wordlist::trie::options::TrieOptions;

/// An ordered prefix tree over lowercase words.
///
/// Nodes are created lazily on insertion. Removing a word only clears its
/// terminal flag unless [`TrieOptions::prune_on_remove`] is set.
#[derive(Clone, Default)]
pub struct Trie {
    pub(crate) root: Node,
    word_count: usize,
    options: TrieOptions,
}

impl Trie {
    pub fn new() -> Self {
        Self::with_options(TrieOptions::default())
    }

    pub fn with_options(options: TrieOptions) -> Self {
        Trie {
            root: Node::default(),
            word_count: 0,
            options,
        }
    }

    pub fn options(&self) -> TrieOptions {
        self.options
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Lowercases and inserts `word`. Returns false only for empty input.
    ///
    /// With the default options the counter is bumped on every call that
    /// reaches this point, so inserting a word twice counts it twice while
    /// leaving the shape of the trie unchanged.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        if word.is_empty() {
            return false;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.add_child(c);
        }
        let was_terminal = current.is_terminal();
        current.set_terminal(true);
        if !was_terminal || self.options.count_reinsertions {
            self.word_count += 1;
        }
        true
    }

    /// Inserts every item, returning how many calls to `insert` succeeded.
    pub fn add_all<'f, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().filter(|x| self.insert(x)).count()
    }

    /// Clears the terminal flag of `word`. Returns false, leaving the trie
    /// untouched, if `word` is empty or not currently present.
    pub fn remove(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let removed = Self::remove_from(&mut self.root, word, self.options.prune_on_remove);
        if removed {
            self.word_count = self.word_count.saturating_sub(1);
        }
        removed
    }

    fn remove_from(node: &mut Node, word: &str, prune: bool) -> bool {
        let mut chars = word.chars();
        let c = match chars.next() {
            None => {
                if !node.is_terminal() {
                    return false;
                }
                node.set_terminal(false);
                return true;
            }
            Some(c) => c,
        };
        let removed = match node.get_child_mut(c) {
            None => return false,
            Some(child) => Self::remove_from(child, chars.as_str(), prune),
        };
        if removed && prune && node.get_child(c).map_or(false, |x| x.is_leaf() && !x.is_terminal()) {
            node.remove_child(c);
        }
        removed
    }

    /// Number of counted insertions minus successful removals.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of allocated nodes, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            count += 1;
            stack.extend(x.children());
        }
        count
    }
}


impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(&x);
            stack.extend(x.children().rev());
        }
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use maplit::hashset;
    use proptest::prelude::*;

    use crate::wordlist::trie::options::TrieOptions;
    use crate::wordlist::trie::trie::Trie;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        trie.add_all(vec!["cat", "cats", "car", "dog"]);
        trie
    }

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let mut trie = Trie::new();
        assert_eq!(trie.add_all(words.iter().copied()), 4);
        words.iter().for_each(|word| assert!(trie.contains_word(word)));
        assert_eq!(trie.word_count(), 4);
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let mut trie = Trie::new();
        trie.add_all(vec!["hello", "help", "goodbye", "good"]);
        let bad_words = vec!["he", "h", "lol", "banana"];
        bad_words.iter().for_each(|word| assert!(!trie.contains_word(word)));
    }

    #[test]
    fn insert_lowercases_and_rejects_empty() {
        let mut trie = Trie::new();
        assert!(trie.insert("HeLLo"));
        assert!(trie.contains_word("hello"));
        assert!(!trie.insert(""));
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn reinsertion_counts_twice_but_keeps_shape() {
        let mut once = Trie::new();
        once.insert("apple");
        let mut twice = Trie::new();
        twice.insert("apple");
        assert!(twice.insert("apple"));

        assert_eq!(once.all_words().collect::<Vec<_>>(),
                   twice.all_words().collect::<Vec<_>>());
        assert_eq!(once.node_count(), twice.node_count());
        // The counter is not idempotent: both calls were counted.
        assert_eq!(twice.word_count(), 2);
    }

    #[test]
    fn distinct_counting_option() {
        let mut trie = Trie::with_options(TrieOptions::builder().count_reinsertions(false).build());
        trie.insert("apple");
        trie.insert("apple");
        assert_eq!(trie.word_count(), 1);
        assert!(trie.remove("apple"));
        assert_eq!(trie.word_count(), 0);
    }

    #[test]
    fn remove_clears_word_only() {
        let mut trie = sample();
        assert!(trie.remove("cat"));
        assert!(!trie.contains_word("cat"));
        assert!(trie.contains_prefix("cat"));
        assert!(trie.contains_word("cats"));
        assert_eq!(trie.word_count(), 3);
        assert!(!trie.remove("cat"));
        assert_eq!(trie.word_count(), 3);
    }

    #[test]
    fn remove_missing_word_is_noop() {
        let mut trie = sample();
        let before: Vec<String> = trie.all_words().collect();
        let nodes = trie.node_count();
        assert!(!trie.remove("ca"));
        assert!(!trie.remove("cow"));
        assert!(!trie.remove("catsup"));
        assert!(!trie.remove(""));
        assert_eq!(trie.word_count(), 4);
        assert_eq!(trie.all_words().collect::<Vec<_>>(), before);
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn remove_keeps_dead_nodes_by_default() {
        let mut trie = sample();
        let nodes = trie.node_count();
        assert!(trie.remove("dog"));
        assert_eq!(trie.node_count(), nodes);
        assert!(trie.contains_prefix("dog"));
    }

    #[test]
    fn pruning_removes_dead_branches() {
        let mut trie = Trie::with_options(TrieOptions::builder().prune_on_remove(true).build());
        trie.add_all(vec!["cat", "cats", "car", "dog"]);
        assert!(trie.remove("dog"));
        assert!(trie.root().get_child('d').is_none());
        assert!(trie.remove("cats"));
        assert!(trie.contains_word("cat"));
        assert!(!trie.contains_prefix("cats"));
        assert!(trie.remove("cat"));
        assert!(trie.contains_prefix("ca"));
        assert!(!trie.contains_prefix("cat"));
        // root, c, a, r
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn concrete_scenario() {
        let mut trie = sample();
        assert_eq!(trie.all_words().collect::<Vec<_>>(), vec!["car", "cat", "cats", "dog"]);
        assert!(!trie.contains_word("ca"));
        assert!(trie.contains_prefix("ca"));
        assert_eq!(trie.match_pattern("c_t"), hashset! {"cat".to_string()});
        assert_eq!(trie.match_pattern("c*"),
                   hashset! {"car".to_string(), "cat".to_string(), "cats".to_string()});
        assert_eq!(trie.suggest_corrections("cat", 1),
                   hashset! {"cat".to_string(), "car".to_string()});
        assert!(trie.remove("cat"));
        assert!(!trie.contains_word("cat"));
        assert!(trie.contains_prefix("cat"));
    }

    proptest! {
        #[test]
        fn inserted_words_listed_once_in_order(
            words in prop::collection::vec("[a-z]{1,8}", 0..40)
        ) {
            let mut trie = Trie::new();
            for w in &words {
                prop_assert!(trie.insert(w));
            }
            let expected: Vec<String> = words.iter().cloned()
                .collect::<BTreeSet<_>>().into_iter().collect();
            prop_assert_eq!(trie.all_words().collect::<Vec<_>>(), expected);
            prop_assert_eq!(trie.word_count(), words.len());
            for w in &words {
                prop_assert!(trie.contains_word(w));
                for i in 0..=w.len() {
                    prop_assert!(trie.contains_prefix(&w[..i]));
                }
            }
        }

        #[test]
        fn removal_matches_set_model(
            words in prop::collection::vec("[a-d]{1,5}", 1..40),
            removals in prop::collection::vec("[a-d]{1,5}", 0..20),
            prune in any::<bool>(),
        ) {
            let options = TrieOptions::builder()
                .count_reinsertions(false)
                .prune_on_remove(prune)
                .build();
            let mut trie = Trie::with_options(options);
            let mut model: BTreeSet<String> = BTreeSet::new();
            for w in &words {
                trie.insert(w);
                model.insert(w.clone());
            }
            for r in &removals {
                prop_assert_eq!(trie.remove(r), model.remove(r));
                prop_assert!(!trie.contains_word(r));
            }
            prop_assert_eq!(trie.word_count(), model.len());
            prop_assert_eq!(trie.all_words().collect::<Vec<_>>(),
                            model.into_iter().collect::<Vec<_>>());
        }
    }
}
