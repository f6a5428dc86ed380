//! Prefix index over normalized dictionary words.
//!
//! Nodes live in an arena (`Vec<TrieNode>`) and refer to their children by
//! index. A node is pushed exactly when the edge from its single parent is
//! created, so every node except the root has one parent and the structure
//! stays a tree. Nothing is ever removed.

use std::collections::BTreeMap;

use crate::spelling::normalize::normalize;

/// Index of a node inside the arena.
pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, NodeId>,
    is_word: bool,
}

/// A character trie answering "every stored word starting with this prefix".
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl PrefixIndex {
    /// Create an empty index containing only the root node.
    pub fn new() -> Self {
        PrefixIndex {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Insert a word. Returns `true` if the word was not stored yet.
    /// O(k) where k is the word length.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        let mut node_id = ROOT;

        for ch in normalized.chars() {
            node_id = match self.nodes[node_id].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_id].children.insert(ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[node_id];
        if node.is_word {
            false
        } else {
            node.is_word = true;
            self.word_count += 1;
            true
        }
    }

    /// Check whether exactly this word is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(&normalize(word))
            .is_some_and(|id| self.nodes[id].is_word)
    }

    /// Return every stored word that starts with `prefix`.
    ///
    /// The node reached by the prefix is included when it is itself a word,
    /// and an empty prefix returns every stored word. Children are visited in
    /// character order, so the result comes out lexicographically sorted.
    pub fn suggest_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize(prefix);
        let Some(start) = self.find_node(&prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut stack = vec![(start, prefix)];

        while let Some((node_id, word)) = stack.pop() {
            let node = &self.nodes[node_id];
            if node.is_word {
                results.push(word.clone());
            }
            // Reverse so the smallest character is popped first.
            for (&ch, &child) in node.children.iter().rev() {
                let mut next = word.clone();
                next.push(ch);
                stack.push((child, next));
            }
        }

        results
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn find_node(&self, normalized: &str) -> Option<NodeId> {
        normalized.chars().try_fold(ROOT, |node_id, ch| {
            self.nodes[node_id].children.get(&ch).copied()
        })
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut index = PrefixIndex::new();
        assert!(index.is_empty());

        assert!(index.insert("cat"));
        assert!(index.insert("cats"));
        assert!(index.contains("cat"));
        assert!(index.contains("CATS"));
        assert!(!index.contains("ca"));
        assert!(!index.contains("dog"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index = PrefixIndex::new();
        assert!(index.insert("apple"));
        let nodes = index.node_count();

        assert!(!index.insert("apple"));
        assert!(!index.insert("APPLE"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.node_count(), nodes);
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let index: PrefixIndex = ["car", "cat", "cats"].into_iter().collect();
        // root + c + a + r + t + s
        assert_eq!(index.node_count(), 6);
    }

    #[test]
    fn test_suggest_prefix() {
        let index: PrefixIndex = ["search", "searching", "server", "query"].into_iter().collect();

        assert_eq!(index.suggest_prefix("sear"), vec!["search", "searching"]);
        assert_eq!(
            index.suggest_prefix("se"),
            vec!["search", "searching", "server"]
        );
        assert_eq!(index.suggest_prefix("search"), vec!["search", "searching"]);
        assert!(index.suggest_prefix("x").is_empty());
        assert!(index.suggest_prefix("searchingly").is_empty());
    }

    #[test]
    fn test_suggest_prefix_is_case_insensitive() {
        let index: PrefixIndex = ["Apple", "apply"].into_iter().collect();
        assert_eq!(index.suggest_prefix("APP"), vec!["apple", "apply"]);
    }

    #[test]
    fn test_empty_prefix_returns_everything() {
        let index: PrefixIndex = ["b", "a", "ab", "ba"].into_iter().collect();
        assert_eq!(index.suggest_prefix(""), vec!["a", "ab", "b", "ba"]);
    }

    #[test]
    fn test_empty_word_is_storable() {
        let mut index = PrefixIndex::new();
        assert!(!index.contains(""));
        index.insert("");
        assert!(index.contains(""));
        assert_eq!(index.suggest_prefix(""), vec![""]);
    }

    #[test]
    fn test_empty_index() {
        let index = PrefixIndex::new();
        assert!(index.suggest_prefix("").is_empty());
        assert!(index.suggest_prefix("a").is_empty());
        assert_eq!(index.node_count(), 1);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let long_word = "a".repeat(10_000);
        let mut index = PrefixIndex::new();
        index.insert(&long_word);

        let found = index.suggest_prefix("a");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].len(), 10_000);
    }
}
