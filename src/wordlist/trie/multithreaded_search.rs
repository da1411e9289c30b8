use std::collections::HashSet;

use rayon::prelude::*;

use crate::wordlist::trie::trie::Trie;

// Queries never touch the trie's state, so a shared borrow fans out safely.
impl Trie {
    /// Runs `match_pattern` for each pattern on the rayon pool. Results line
    /// up with the input order.
    pub fn match_patterns<S>(&self, patterns: &[S]) -> Vec<HashSet<String>>
        where S: AsRef<str> + Sync {
        patterns.par_iter()
            .map(|x| self.match_pattern(x.as_ref()))
            .collect()
    }

    pub fn suggest_many<S>(&self, targets: &[S], max_distance: usize) -> Vec<HashSet<String>>
        where S: AsRef<str> + Sync {
        targets.par_iter()
            .map(|x| self.suggest_corrections(x.as_ref(), max_distance))
            .collect()
    }
}
