use std::collections::HashSet;

use crate::wordlist::trie::node::Node;
use crate::wordlist::trie::trie::Trie;

impl Trie {

    pub(crate) fn get_node(&self, word: &str) -> Option<&Node> {
        word.chars().try_fold(&self.root, |node, c| node.get_child(c))
    }

    /// The empty string is always contained.
    pub fn contains_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }
        self.get_node(word)
            .map(|x| x.is_terminal()).unwrap_or(false)
    }

    /// True if some path from the root spells `prefix`, whether or not a word
    /// ends there.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    /// Words of the same length as `target` differing from it in at most
    /// `max_distance` positions.
    ///
    /// Only substitutions are counted, so no word of another length is ever
    /// suggested.
    pub fn suggest_corrections(&self, target: &str, max_distance: usize) -> HashSet<String> {
        let target: Vec<char> = target.chars().collect();
        let mut suggestions = HashSet::new();
        let mut word = String::with_capacity(target.len());
        Self::suggest_from(&self.root, &target, max_distance, &mut word, &mut suggestions);
        suggestions
    }

    fn suggest_from(node: &Node, target: &[char], budget: usize,
                    word: &mut String, suggestions: &mut HashSet<String>) {
        let (&want, rest) = match target.split_first() {
            None => {
                if node.is_terminal() {
                    suggestions.insert(word.clone());
                }
                return;
            }
            Some(x) => x,
        };
        for child in node {
            let remaining = if child.letter() == want {
                budget
            } else {
                // a mismatch with nothing left to spend can never recover
                match budget.checked_sub(1) {
                    Some(b) => b,
                    None => continue,
                }
            };
            word.push(child.letter());
            Self::suggest_from(child, rest, remaining, word, suggestions);
            word.pop();
        }
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use maplit::hashset;

    use crate::wordlist::trie::trie::Trie;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        trie.add_all(vec!["cat", "cats", "car", "dog", "cot", "bat", "cub"]);
        trie
    }

    fn strings(words: HashSet<&str>) -> HashSet<String> {
        words.into_iter().map(String::from).collect()
    }

    #[test]
    fn empty_word_and_prefix_are_contained() {
        let trie = Trie::new();
        assert!(trie.contains_word(""));
        assert!(trie.contains_prefix(""));
    }

    #[test]
    fn prefix_ignores_terminal_flag() {
        let trie = sample();
        assert!(trie.contains_prefix("ca"));
        assert!(trie.contains_prefix("cats"));
        assert!(!trie.contains_word("ca"));
        assert!(!trie.contains_prefix("catz"));
        assert!(!trie.contains_prefix("x"));
    }

    #[test]
    fn suggest_exact_only_at_zero() {
        let trie = sample();
        assert_eq!(trie.suggest_corrections("cat", 0), strings(hashset! {"cat"}));
        assert!(trie.suggest_corrections("cax", 0).is_empty());
        assert!(trie.suggest_corrections("ca", 0).is_empty());
    }

    #[test]
    fn suggest_within_distance() {
        let trie = sample();
        assert_eq!(trie.suggest_corrections("cat", 1),
                   strings(hashset! {"cat", "car", "cot", "bat"}));
        assert_eq!(trie.suggest_corrections("cat", 2),
                   strings(hashset! {"cat", "car", "cot", "bat", "cub"}));
        assert_eq!(trie.suggest_corrections("cat", 3),
                   strings(hashset! {"cat", "car", "cot", "bat", "cub", "dog"}));
    }

    #[test]
    fn suggest_never_changes_length() {
        let trie = sample();
        assert_eq!(trie.suggest_corrections("catz", 1), strings(hashset! {"cats"}));
        assert!(trie.suggest_corrections("", 5).is_empty());
        assert!(trie.suggest_corrections("ca", 5).is_empty());
    }

    #[test]
    fn suggest_skips_removed_words() {
        let mut trie = sample();
        trie.remove("car");
        assert_eq!(trie.suggest_corrections("car", 1),
                   strings(hashset! {"cat"}));
    }
}
