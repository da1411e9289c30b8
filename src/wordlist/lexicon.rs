use std::collections::HashSet;

use crate::wordlist::trie::Trie;

/// A collection of words supporting lookup, enumeration and fuzzy queries.
pub trait Lexicon {
    /// Adds `word`, returning false if it was rejected as empty.
    fn add_word(&mut self, word: &str) -> bool;
    /// Returns whether `word` was present and has been removed.
    fn remove_word(&mut self, word: &str) -> bool;
    fn num_words(&self) -> usize;
    fn contains_word(&self, word: &str) -> bool;
    fn contains_prefix(&self, prefix: &str) -> bool;
    /// All words in alphabetical order.
    fn words(&self) -> Box<dyn Iterator<Item=String> + '_>;
    fn suggest_corrections(&self, target: &str, max_distance: usize) -> HashSet<String>;
    fn match_regex(&self, pattern: &str) -> HashSet<String>;

    fn add_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=&'a str>, Self: Sized {
        items.into_iter().filter(|x| self.add_word(x)).count()
    }
}

impl Lexicon for Trie {
    fn add_word(&mut self, word: &str) -> bool {
        self.insert(word)
    }

    fn remove_word(&mut self, word: &str) -> bool {
        self.remove(word)
    }

    fn num_words(&self) -> usize {
        self.word_count()
    }

    fn contains_word(&self, word: &str) -> bool {
        Trie::contains_word(self, word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        Trie::contains_prefix(self, prefix)
    }

    fn words(&self) -> Box<dyn Iterator<Item=String> + '_> {
        Box::new(self.all_words())
    }

    fn suggest_corrections(&self, target: &str, max_distance: usize) -> HashSet<String> {
        Trie::suggest_corrections(self, target, max_distance)
    }

    fn match_regex(&self, pattern: &str) -> HashSet<String> {
        self.match_pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::lexicon::Lexicon;
    use crate::wordlist::trie::Trie;

    fn fill<L: Lexicon>(lexicon: &mut L) -> usize {
        lexicon.add_all(vec!["pear", "", "peach", "plum"])
    }

    #[test]
    fn trie_is_a_lexicon() {
        let mut trie = Trie::new();
        assert_eq!(fill(&mut trie), 3);
        let lexicon: &dyn Lexicon = &trie;
        assert_eq!(lexicon.num_words(), 3);
        assert!(lexicon.contains_word("plum"));
        assert!(lexicon.contains_prefix("pea"));
        assert_eq!(lexicon.words().collect::<Vec<_>>(), vec!["peach", "pear", "plum"]);
        assert_eq!(lexicon.match_regex("pe*").len(), 2);
        assert!(lexicon.suggest_corrections("plus", 1).contains("plum"));
    }

    #[test]
    fn removal_through_trait() {
        let mut trie = Trie::new();
        fill(&mut trie);
        assert!(trie.remove_word("pear"));
        assert!(!trie.remove_word("pear"));
        assert_eq!(trie.num_words(), 2);
    }
}
