use std::iter::FusedIterator;
use std::slice::Iter;

use crate::wordlist::trie::node::Node;
use crate::wordlist::trie::trie::Trie;

/// Lazy alphabetical walk over the words below a node.
///
/// Keeps one child cursor per level and a shared path buffer, so each word
/// costs a single allocation when it is yielded.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    stack: Vec<Iter<'a, Node>>,
    path: String,
    pending: Option<String>,
}

impl<'a> Words<'a> {
    fn empty() -> Self {
        Words { stack: vec![], path: String::new(), pending: None }
    }

    fn below(start: &'a Node, path: String) -> Self {
        let pending = if start.is_terminal() { Some(path.clone()) } else { None };
        Words { stack: vec![start.children()], path, pending }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(child) => {
                    self.path.push(child.letter());
                    self.stack.push(child.children());
                    if child.is_terminal() {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for Words<'_> {}

impl Trie {
    /// Every word currently present, in alphabetical order.
    pub fn all_words(&self) -> Words<'_> {
        Words::below(&self.root, String::new())
    }

    /// Words starting with `prefix` (itself included), in alphabetical order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        match self.get_node(prefix) {
            Some(node) => Words::below(node, prefix.to_string()),
            None => Words::empty(),
        }
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_words()
    }
}
