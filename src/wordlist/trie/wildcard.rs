use std::collections::HashSet;

use log::warn;

use crate::error::PatternError;
use crate::pattern::{Pattern, Token};
use crate::wordlist::trie::node::Node;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// Words matching a wildcard pattern: `?` and `_` stand for exactly one
    /// letter, `*` for any run of letters including none.
    ///
    /// A malformed pattern matches nothing; use [`Trie::try_match_pattern`]
    /// to find out why.
    pub fn match_pattern(&self, pattern: &str) -> HashSet<String> {
        match Pattern::parse(pattern) {
            Ok(parsed) => self.match_parsed(&parsed),
            Err(e) => {
                warn!("{} in {:?}, no matches", e, pattern);
                HashSet::new()
            }
        }
    }

    pub fn try_match_pattern(&self, pattern: &str) -> Result<HashSet<String>, PatternError> {
        Ok(self.match_parsed(&Pattern::parse(pattern)?))
    }

    pub fn match_parsed(&self, pattern: &Pattern) -> HashSet<String> {
        let mut matches = HashSet::new();
        let mut word = String::new();
        Self::match_from(&self.root, pattern.tokens(), &mut word, &mut matches);
        matches
    }

    fn match_from(node: &Node, tokens: &[Token], word: &mut String, matches: &mut HashSet<String>) {
        let (token, rest) = match tokens.split_first() {
            None => {
                if node.is_terminal() {
                    matches.insert(word.clone());
                }
                return;
            }
            Some(x) => x,
        };
        match token {
            Token::Literal(c) => {
                if let Some(child) = node.get_child(*c) {
                    Self::descend(child, rest, word, matches);
                }
            }
            Token::AnyOne => {
                for child in node {
                    Self::descend(child, rest, word, matches);
                }
            }
            Token::AnyMany => {
                // zero letters here, or one more letter with `*` still pending
                Self::match_from(node, rest, word, matches);
                for child in node {
                    Self::descend(child, tokens, word, matches);
                }
            }
        }
    }

    fn descend(child: &Node, tokens: &[Token], word: &mut String, matches: &mut HashSet<String>) {
        word.push(child.letter());
        Self::match_from(child, tokens, word, matches);
        word.pop();
    }
}
