use std::fmt::{Debug, Formatter};
use std::slice::Iter;

use derive_new::new;

use crate::alphabet::ROOT_LETTER;

/// One vertex of the trie. Children are owned and kept sorted by letter,
/// with no two siblings sharing a letter.
#[derive(new, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) letter: char,
    #[new(default)]
    pub(crate) children: Vec<Node>,
    #[new(default)]
    pub(crate) is_terminal: bool,
}

impl Default for Node {
    fn default() -> Self {
        Node::new(ROOT_LETTER)
    }
}

impl Node {
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn set_terminal(&mut self, terminal: bool) {
        self.is_terminal = terminal;
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn position(&self, letter: char) -> Result<usize, usize> {
        self.children.binary_search_by(|child| child.letter.cmp(&letter))
    }

    /// Returns the child for `letter`, creating it in sorted position if absent.
    pub fn add_child(&mut self, letter: char) -> &mut Node {
        let idx = match self.position(letter) {
            Ok(idx) => idx,
            Err(idx) => {
                self.children.insert(idx, Node::new(letter));
                idx
            }
        };
        &mut self.children[idx]
    }

    pub fn get_child(&self, letter: char) -> Option<&Node> {
        self.position(letter).ok().map(|idx| &self.children[idx])
    }

    pub fn get_child_mut(&mut self, letter: char) -> Option<&mut Node> {
        match self.position(letter) {
            Ok(idx) => Some(&mut self.children[idx]),
            Err(_) => None,
        }
    }

    /// Detaches the child for `letter` together with its subtree.
    pub fn remove_child(&mut self, letter: char) -> Option<Node> {
        self.position(letter).ok().map(|idx| self.children.remove(idx))
    }

    /// Children in ascending letter order.
    pub fn children(&self) -> Iter<'_, Node> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
